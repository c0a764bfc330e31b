//! Simple selector categories and their canonical order.
//!
//! A compound selector is written as
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//!           \----/\----/\----------/
//!           may repeat
//! ```
//!
//! [`Category`] names each slot, and [`CategorySet`] records which of the
//! single-occurrence slots are already filled.

use std::fmt;

use bitflags::bitflags;

/// The kind of a simple selector inside a compound selector.
///
/// Variants are declared in the order CSS requires them to appear, so the
/// derived `Ord` matches [`Category::ordinal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl Category {
    /// All categories, in the order they must appear.
    pub const ALL: [Category; 6] = [
        Category::Element,
        Category::Id,
        Category::Class,
        Category::Attribute,
        Category::PseudoClass,
        Category::PseudoElement,
    ];

    /// Position of the category in the compound selector, starting at 1.
    pub const fn ordinal(self) -> u8 {
        match self {
            Category::Element => 1,
            Category::Id => 2,
            Category::Class => 3,
            Category::Attribute => 4,
            Category::PseudoClass => 5,
            Category::PseudoElement => 6,
        }
    }

    /// Returns true for categories that may occur at most once.
    pub const fn is_singleton(self) -> bool {
        matches!(
            self,
            Category::Element | Category::Id | Category::PseudoElement
        )
    }

    /// The flag tracking this category in a [`CategorySet`].
    pub const fn flag(self) -> CategorySet {
        match self {
            Category::Element => CategorySet::ELEMENT,
            Category::Id => CategorySet::ID,
            Category::Class => CategorySet::CLASS,
            Category::Attribute => CategorySet::ATTRIBUTE,
            Category::PseudoClass => CategorySet::PSEUDO_CLASS,
            Category::PseudoElement => CategorySet::PSEUDO_ELEMENT,
        }
    }

    /// Renders `value` as a fragment of this category.
    ///
    /// The value is inserted verbatim; no escaping or validation is done.
    ///
    /// ```rust
    /// use selkit::Category;
    ///
    /// assert_eq!(Category::Attribute.render("href$=\".png\""), "[href$=\".png\"]");
    /// assert_eq!(Category::PseudoElement.render("before"), "::before");
    /// ```
    pub fn render(self, value: &str) -> String {
        match self {
            Category::Element => value.to_string(),
            Category::Id => format!("#{value}"),
            Category::Class => format!(".{value}"),
            Category::Attribute => format!("[{value}]"),
            Category::PseudoClass => format!(":{value}"),
            Category::PseudoElement => format!("::{value}"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Element => "element",
            Category::Id => "id",
            Category::Class => "class",
            Category::Attribute => "attribute",
            Category::PseudoClass => "pseudo-class",
            Category::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// A set of categories present in a compound selector.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        const ELEMENT = 1 << 0;
        const ID = 1 << 1;
        const CLASS = 1 << 2;
        const ATTRIBUTE = 1 << 3;
        const PSEUDO_CLASS = 1 << 4;
        const PSEUDO_ELEMENT = 1 << 5;

        const SINGLETONS = Self::ELEMENT.bits() | Self::ID.bits() | Self::PSEUDO_ELEMENT.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        let ordinals: Vec<u8> = Category::ALL.iter().map(|c| c.ordinal()).collect();
        assert_eq!(ordinals, vec![1, 2, 3, 4, 5, 6]);

        for pair in Category::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_singletons() {
        let singletons: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| c.is_singleton())
            .collect();
        assert_eq!(
            singletons,
            vec![Category::Element, Category::Id, Category::PseudoElement]
        );

        for category in Category::ALL {
            assert_eq!(
                CategorySet::SINGLETONS.contains(category.flag()),
                category.is_singleton()
            );
        }
    }

    #[test]
    fn test_render_prefixes() {
        assert_eq!(Category::Element.render("div"), "div");
        assert_eq!(Category::Id.render("main"), "#main");
        assert_eq!(Category::Class.render("container"), ".container");
        assert_eq!(Category::Attribute.render("disabled"), "[disabled]");
        assert_eq!(Category::PseudoClass.render("focus"), ":focus");
        assert_eq!(Category::PseudoElement.render("after"), "::after");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(Category::Attribute.to_string(), "attribute");
    }
}
