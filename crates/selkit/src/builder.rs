//! The immutable selector builder.
//!
//! Every construction call borrows the receiver and returns a new
//! [`SelectorBuilder`]; nothing is ever mutated after creation, so a builder
//! can be shared and branched freely:
//!
//! ```rust
//! use selkit::FACTORY;
//!
//! let button = FACTORY.element("button")?;
//! let primary = button.class("primary")?;
//! let focused = button.pseudo_class("focus")?;
//!
//! assert_eq!(button.stringify(), "button");
//! assert_eq!(primary.stringify(), "button.primary");
//! assert_eq!(focused.stringify(), "button:focus");
//! # Ok::<(), selkit::SelectorError>(())
//! ```

use std::fmt;

use crate::category::{Category, CategorySet};
use crate::error::{Result, SelectorError};
use crate::specificity::Specificity;

/// The empty root builder every selector chain starts from.
pub static FACTORY: SelectorBuilder = SelectorBuilder::new();

/// An immutable, partially built CSS selector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectorBuilder {
    text: String,
    last: Option<Category>,
    singletons: CategorySet,
    specificity: Specificity,
    combined: bool,
}

impl SelectorBuilder {
    /// Creates an empty builder, equal to [`FACTORY`].
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: None,
            singletons: CategorySet::empty(),
            specificity: Specificity::ZERO,
            combined: false,
        }
    }

    /// Appends a type selector such as `div` or `*`.
    pub fn element(&self, value: &str) -> Result<Self> {
        self.append(Category::Element, value)
    }

    /// Appends `#value`.
    pub fn id(&self, value: &str) -> Result<Self> {
        self.append(Category::Id, value)
    }

    /// Appends `.value`.
    pub fn class(&self, value: &str) -> Result<Self> {
        self.append(Category::Class, value)
    }

    /// Appends `[value]`. The expression is not parsed, so `href$=".png"` is
    /// passed through as is.
    pub fn attr(&self, value: &str) -> Result<Self> {
        self.append(Category::Attribute, value)
    }

    /// Appends `:value`, e.g. `focus` or `nth-of-type(even)`.
    pub fn pseudo_class(&self, value: &str) -> Result<Self> {
        self.append(Category::PseudoClass, value)
    }

    /// Appends `::value`.
    pub fn pseudo_element(&self, value: &str) -> Result<Self> {
        self.append(Category::PseudoElement, value)
    }

    /// Appends a part of the given category.
    ///
    /// Fails with [`SelectorError::DuplicateSingletonPart`] if `category` may
    /// only occur once and is already present, and otherwise with
    /// [`SelectorError::OutOfOrderPart`] if a later category was already
    /// appended. The receiver is left untouched either way.
    pub fn append(&self, category: Category, value: &str) -> Result<Self> {
        if let Err(err) = self.check(category) {
            log::debug!(
                "rejected {} part {:?} after {:?}: {}",
                category,
                value,
                self.last,
                err
            );
            return Err(err);
        }

        let mut text = String::with_capacity(self.text.len() + value.len() + 2);
        text.push_str(&self.text);
        text.push_str(&category.render(value));

        let mut singletons = self.singletons;
        if category.is_singleton() {
            singletons |= category.flag();
        }

        let next = Self {
            text,
            last: Some(category),
            singletons,
            specificity: self.specificity + Specificity::of_part(category, value),
            combined: self.combined,
        };
        log::trace!("appended {} part: {}", category, next.text);
        Ok(next)
    }

    fn check(&self, category: Category) -> Result<()> {
        if category.is_singleton() && self.singletons.contains(category.flag()) {
            return Err(SelectorError::DuplicateSingletonPart { category });
        }
        match self.last {
            Some(after) if category < after => {
                Err(SelectorError::OutOfOrderPart { category, after })
            }
            _ => Ok(()),
        }
    }

    /// Joins two selectors as `left <combinator> right`.
    ///
    /// Exactly one space is put on each side of `combinator`, which is passed
    /// through without validation. The result has no last category, so it
    /// accepts any further part.
    ///
    /// ```rust
    /// use selkit::{Combinator, FACTORY, SelectorBuilder};
    ///
    /// let list = FACTORY.element("ul")?;
    /// let item = FACTORY.element("li")?.class("active")?;
    ///
    /// let child = SelectorBuilder::combine(&list, Combinator::Child, &item);
    /// assert_eq!(child.stringify(), "ul > li.active");
    /// # Ok::<(), selkit::SelectorError>(())
    /// ```
    pub fn combine(left: &Self, combinator: impl AsRef<str>, right: &Self) -> Self {
        let combinator = combinator.as_ref();
        let text = format!("{} {} {}", left.text, combinator, right.text);
        log::trace!("combined with {:?}: {}", combinator, text);

        Self {
            text,
            last: None,
            singletons: CategorySet::empty(),
            specificity: left.specificity + right.specificity,
            combined: true,
        }
    }

    /// Returns the selector text built so far.
    pub fn stringify(&self) -> &str {
        &self.text
    }

    /// The category of the most recently appended part.
    ///
    /// `None` for the factory and for combined selectors.
    pub fn last_category(&self) -> Option<Category> {
        self.last
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if this selector, or one it was derived from, came out of
    /// [`combine`](Self::combine).
    pub fn is_combined(&self) -> bool {
        self.combined
    }
}

/// Free-function form of [`SelectorBuilder::combine`].
pub fn combine(
    left: &SelectorBuilder,
    combinator: impl AsRef<str>,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::combine(left, combinator, right)
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<SelectorBuilder> for String {
    fn from(builder: SelectorBuilder) -> String {
        builder.text
    }
}
