//! Error types for selector construction and logger setup.

use thiserror::Error;

use crate::category::Category;

/// Errors that can occur while appending a part to a compound selector.
///
/// Both variants are caller errors: the chain has to be restarted from an
/// earlier, valid builder.
///
/// # Examples
///
/// ```rust
/// use selkit::{FACTORY, SelectorError};
///
/// let err = FACTORY.class("a").unwrap().element("div").unwrap_err();
/// assert!(matches!(err, SelectorError::OutOfOrderPart { .. }));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A second element, id or pseudo-element was appended.
    #[error(
        "element, id and pseudo-element selectors should not occur more than one time \
         inside the selector (duplicate {category})"
    )]
    DuplicateSingletonPart { category: Category },

    /// A part was appended after a part that must come later.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, \
         attribute, pseudo-class, pseudo-element ({category} cannot follow {after})"
    )]
    OutOfOrderPart { category: Category, after: Category },
}

/// Errors that can occur when installing the file logger.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// The log file could not be opened.
    #[error("I/O error opening log file")]
    Io(#[from] std::io::Error),

    /// Another logger was already installed.
    #[error("logger already installed: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
