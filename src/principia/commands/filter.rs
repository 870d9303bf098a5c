use crate::commands::{CmdMessage, CmdResult, FilterPass};
use crate::error::{PrincipiaError, Result};
use crate::model::{Color, Product, Size};
use crate::specs::{ColorSpecification, Filter, SizeSpecification, SpecFilter, Specification};

/// The two-pass demonstration: everything green, then everything blue and large.
pub fn demo(catalog: &[Product]) -> Result<CmdResult> {
    let green = ColorSpecification::new(Color::Green);
    let blue_and_large =
        ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));

    let passes = vec![
        apply(catalog, "color = green", &green),
        apply(catalog, "color = blue and size = large", &blue_and_large),
    ];

    let mut result = CmdResult::default();
    for pass in &passes {
        result.add_message(summary(catalog, pass));
    }
    Ok(result.with_filter_passes(passes))
}

/// A single pass over `catalog` using whichever criteria are given.
pub fn run(catalog: &[Product], color: Option<Color>, size: Option<Size>) -> Result<CmdResult> {
    let spec: Box<dyn Specification<Item = Product>> = match (color, size) {
        (Some(c), Some(s)) => {
            Box::new(ColorSpecification::new(c).and(SizeSpecification::new(s)))
        }
        (Some(c), None) => Box::new(ColorSpecification::new(c)),
        (None, Some(s)) => Box::new(SizeSpecification::new(s)),
        (None, None) => {
            return Err(PrincipiaError::Api(
                "Filter needs a color, a size, or both".into(),
            ))
        }
    };
    let label = [
        color.map(|c| format!("color = {}", c)),
        size.map(|s| format!("size = {}", s)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" and ");

    let pass = apply(catalog, label, &*spec);
    let mut result = CmdResult::default();
    result.add_message(summary(catalog, &pass));
    if pass.products.is_empty() {
        result.add_message(CmdMessage::warning("No products matched."));
    }
    Ok(result.with_filter_passes(vec![pass]))
}

fn apply<S>(catalog: &[Product], label: impl Into<String>, spec: &S) -> FilterPass
where
    S: Specification<Item = Product> + ?Sized,
{
    let products = SpecFilter
        .filter(catalog, spec)
        .into_iter()
        .cloned()
        .collect();
    FilterPass {
        label: label.into(),
        products,
    }
}

fn summary(catalog: &[Product], pass: &FilterPass) -> CmdMessage {
    CmdMessage::info(format!(
        "{}: {} of {} products",
        pass.label,
        pass.products.len(),
        catalog.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use crate::commands::MessageLevel;

    fn names(pass: &FilterPass) -> Vec<&str> {
        pass.products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn demo_produces_both_passes_in_order() {
        let result = demo(demo_catalog()).unwrap();
        assert_eq!(result.filter_passes.len(), 2);
        assert_eq!(result.filter_passes[0].label, "color = green");
        assert_eq!(names(&result.filter_passes[0]), vec!["tree", "apple"]);
        assert_eq!(
            result.filter_passes[1].label,
            "color = blue and size = large"
        );
        assert_eq!(names(&result.filter_passes[1]), vec!["ocean"]);
    }

    #[test]
    fn demo_reports_info_summaries() {
        let result = demo(demo_catalog()).unwrap();
        assert_eq!(result.messages.len(), 2);
        assert!(result
            .messages
            .iter()
            .all(|m| m.level == MessageLevel::Info));
        assert_eq!(result.messages[0].content, "color = green: 2 of 3 products");
    }

    #[test]
    fn run_with_size_only() {
        let result = run(demo_catalog(), None, Some(Size::Large)).unwrap();
        assert_eq!(names(&result.filter_passes[0]), vec!["tree", "ocean"]);
        assert_eq!(result.filter_passes[0].label, "size = large");
    }

    #[test]
    fn run_with_both_criteria() {
        let result = run(demo_catalog(), Some(Color::Green), Some(Size::Small)).unwrap();
        assert_eq!(names(&result.filter_passes[0]), vec!["apple"]);
    }

    #[test]
    fn run_warns_when_nothing_matches() {
        let result = run(demo_catalog(), Some(Color::Red), None).unwrap();
        assert!(result.filter_passes[0].products.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn run_without_criteria_is_an_error() {
        assert!(matches!(
            run(demo_catalog(), None, None),
            Err(PrincipiaError::Api(_))
        ));
    }

    #[test]
    fn empty_catalog_gives_empty_passes() {
        let result = demo(&[]).unwrap();
        assert!(result
            .filter_passes
            .iter()
            .all(|pass| pass.products.is_empty()));
    }
}
