//! # Specifications
//!
//! A specification is a pure yes/no test over one item. Instead of writing a
//! new filter function for every combination of criteria (by color, by size,
//! by color and size, ...), criteria are expressed as small specification
//! values and composed with [`Specification::and`]. A single generic
//! [`Filter`] then applies any of them to a collection.
//!
//! The item type is an associated type, so composing a product specification
//! with a specification over some other type is a compile error:
//!
//! ```
//! use principia::model::{Color, Product, Size};
//! use principia::specs::{ColorSpecification, SizeSpecification, Specification};
//!
//! let big_blue = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
//! assert!(big_blue.is_satisfied(&Product::new("ocean", Color::Blue, Size::Large)));
//! assert!(!big_blue.is_satisfied(&Product::new("tree", Color::Green, Size::Large)));
//! ```
//!
//! References and boxed trait objects are specifications too, which lets
//! callers assemble a predicate at runtime from optional criteria.

mod filter;
mod product;

pub use filter::{Filter, SpecFilter};
pub use product::{ColorSpecification, SizeSpecification};

/// A pure predicate over `Self::Item`.
pub trait Specification {
    type Item: ?Sized;

    fn is_satisfied(&self, item: &Self::Item) -> bool;

    /// Conjunction: satisfied only when both `self` and `other` are.
    fn and<S>(self, other: S) -> AndSpecification<Self, S>
    where
        Self: Sized,
        S: Specification<Item = Self::Item>,
    {
        AndSpecification::new(self, other)
    }
}

impl<S: Specification + ?Sized> Specification for &S {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<S: Specification + ?Sized> Specification for Box<S> {
    type Item = S::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Logical AND of two specifications over the same item type.
#[derive(Debug, Clone)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Specification for AndSpecification<A, B>
where
    A: Specification,
    B: Specification<Item = A::Item>,
{
    type Item = A::Item;

    fn is_satisfied(&self, item: &Self::Item) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;
    struct Positive;
    struct Below(i32);

    impl Specification for Even {
        type Item = i32;
        fn is_satisfied(&self, item: &i32) -> bool {
            item % 2 == 0
        }
    }

    impl Specification for Positive {
        type Item = i32;
        fn is_satisfied(&self, item: &i32) -> bool {
            *item > 0
        }
    }

    impl Specification for Below {
        type Item = i32;
        fn is_satisfied(&self, item: &i32) -> bool {
            *item < self.0
        }
    }

    #[test]
    fn and_requires_both() {
        let spec = Even.and(Positive);
        assert!(spec.is_satisfied(&4));
        assert!(!spec.is_satisfied(&-4));
        assert!(!spec.is_satisfied(&3));
        assert!(!spec.is_satisfied(&-3));
    }

    #[test]
    fn and_is_commutative_in_result() {
        for n in -10..10 {
            assert_eq!(
                Even.and(Positive).is_satisfied(&n),
                Positive.and(Even).is_satisfied(&n)
            );
        }
    }

    #[test]
    fn nested_conjunctions_are_associative() {
        for n in -10..10 {
            let left = Even.and(Positive).and(Below(6));
            let right = Even.and(Positive.and(Below(6)));
            assert_eq!(left.is_satisfied(&n), right.is_satisfied(&n));
        }
        let chain = Even.and(Positive).and(Below(6));
        let matches: Vec<i32> = (-10..10).filter(|n| chain.is_satisfied(n)).collect();
        assert_eq!(matches, vec![2, 4]);
    }

    #[test]
    fn references_and_boxes_compose() {
        let even = Even;
        let boxed: Box<dyn Specification<Item = i32>> = Box::new(Positive);
        let spec = (&even).and(boxed);
        assert!(spec.is_satisfied(&2));
        assert!(!spec.is_satisfied(&-2));
    }
}
