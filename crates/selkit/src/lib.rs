//! # selkit - CSS selector builder
//!
//! A fluent, immutable builder for CSS selectors. Selectors are assembled from
//! simple parts and joined with combinators; the builder enforces the ordering
//! and cardinality rules CSS places on compound selectors.
//!
//! Part values are never parsed. Whatever is passed to [`SelectorBuilder::attr`]
//! or [`SelectorBuilder::pseudo_class`] ends up in the output verbatim.
//!
//! ## Quick Start
//!
//! ```rust
//! use selkit::{FACTORY, combine};
//!
//! let sel = FACTORY.id("main")?.class("container")?.class("editable")?;
//! assert_eq!(sel.stringify(), "#main.container.editable");
//!
//! let link = FACTORY.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let div = FACTORY.element("div")?.id("main")?;
//! let table = FACTORY.element("table")?.id("data")?;
//! assert_eq!(combine(&div, "+", &table).stringify(), "div#main + table#data");
//! # Ok::<(), selkit::SelectorError>(())
//! ```
//!
//! ## Rules
//!
//! Parts must appear in this order, and the starred ones at most once:
//!
//! - Type selectors*: `div`, `*`
//! - ID selectors*: `#main`
//! - Class selectors: `.container`
//! - Attribute selectors: `[disabled]`, `[href$=".png"]`
//! - Pseudo-classes: `:focus`, `:nth-of-type(even)`
//! - Pseudo-elements*: `::before`
//!
//! Breaking either rule returns a [`SelectorError`].
//!
//! ## Modules
//!
//! - [`builder`]: The [`SelectorBuilder`] type and [`combine`]
//! - [`category`]: Part categories and their order
//! - [`combinator`]: The standard CSS combinators
//! - [`specificity`]: Specificity tracking
//! - [`error`]: Error types

pub mod builder;
pub mod category;
pub mod combinator;
pub mod error;
pub mod specificity;

mod log_init;

pub use builder::{FACTORY, SelectorBuilder, combine};
pub use category::{Category, CategorySet};
pub use combinator::Combinator;
pub use error::{LogInitError, Result, SelectorError};
pub use log_init::init_logger;
pub use specificity::Specificity;

// Re-export the log crate so users can filter on selkit's records.
pub use log;
