//! # Workbench Catalog
//!
//! The static side of the authoring tool:
//!
//! - [`options`]: the built-in insertion directives per document kind
//! - [`WorkbenchTab`]: one document being built from catalog entries
//! - [`HandbookSnippets`]: markup preview plus handbook JSON snippets

mod catalog;
mod handbook;
mod kind;
mod workbench;

pub use catalog::{categories, find_option, options};
pub use handbook::{GuidePage, HandbookSnippets, ItemHandbook, DEFAULT_MARKUP};
pub use kind::{DocumentKind, UnknownKindError};
pub use workbench::{WorkbenchTab, ALL_CATEGORIES};
