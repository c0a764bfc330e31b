//! Facade over the [`selkit`] selector builder.
//!
//! ```rust
//! use selkit_rs::FACTORY;
//!
//! let sel = FACTORY.element("li")?.class("active")?;
//! assert_eq!(sel.to_string(), "li.active");
//! # Ok::<(), selkit_rs::SelectorError>(())
//! ```

pub use selkit::*;
