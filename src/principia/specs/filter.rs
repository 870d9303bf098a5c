//! Applying a specification to a collection.

use super::Specification;

/// Selects the items of a slice that satisfy a specification over `T`.
pub trait Filter<T> {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<Item = T> + ?Sized;
}

/// The one filter needed for every specification: a single pass that keeps
/// input order and never touches the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFilter;

impl<T> Filter<T> for SpecFilter {
    fn filter<'a, S>(&self, items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<Item = T> + ?Sized,
    {
        items.iter().filter(|item| spec.is_satisfied(item)).collect()
    }
}
