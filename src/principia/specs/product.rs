//! Single-attribute specifications over [`Product`].

use super::Specification;
use crate::model::{Color, Product, Size};

/// Matches products of exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification for ColorSpecification {
    type Item = Product;

    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Matches products of exactly one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification for SizeSpecification {
    type Item = Product;

    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}
