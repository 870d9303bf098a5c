//! The fixed product catalog used by the filter demonstration.

use crate::model::{Color, Product, Size};
use once_cell::sync::Lazy;

static DEMO_CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new("tree", Color::Green, Size::Large),
        Product::new("apple", Color::Green, Size::Small),
        Product::new("ocean", Color::Blue, Size::Large),
    ]
});

/// tree, apple and ocean, in that order.
pub fn demo_catalog() -> &'static [Product] {
    &DEMO_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_stable() {
        let names: Vec<_> = demo_catalog().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["tree", "apple", "ocean"]);
    }
}
