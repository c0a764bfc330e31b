use std::fmt;
use std::ops::{Add, AddAssign};

use crate::category::Category;

/// CSS specificity for determining rule precedence.
///
/// Fields are declared most significant first, so the derived ordering is the
/// CSS comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub const ZERO: Specificity = Specificity {
        ids: 0,
        classes: 0,
        types: 0,
    };

    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }

    /// Specificity contributed by a single part.
    pub fn of_part(category: Category, value: &str) -> Self {
        match category {
            Category::Id => Self::new(1, 0, 0),
            // Attributes have the same specificity as classes and pseudo-classes
            Category::Class | Category::Attribute | Category::PseudoClass => Self::new(0, 1, 0),
            Category::Element if value.trim() == "*" => Self::ZERO,
            Category::Element | Category::PseudoElement => Self::new(0, 0, 1),
        }
    }
}

impl Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Specificity) -> Specificity {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Specificity) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.ids, self.classes, self.types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 10, 10));
        assert!(Specificity::new(0, 2, 0) > Specificity::new(0, 1, 5));
        assert!(Specificity::new(0, 0, 2) > Specificity::new(0, 0, 1));
    }

    #[test]
    fn test_universal_element_is_free() {
        assert_eq!(Specificity::of_part(Category::Element, "*"), Specificity::ZERO);
        assert_eq!(
            Specificity::of_part(Category::Element, "div"),
            Specificity::new(0, 0, 1)
        );
    }

    #[test]
    fn test_add_and_display() {
        let mut spec = Specificity::new(1, 2, 0);
        spec += Specificity::new(0, 1, 1);
        assert_eq!(spec, Specificity::new(1, 3, 1));
        assert_eq!(spec.to_string(), "(1,3,1)");
    }
}
