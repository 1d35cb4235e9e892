//! # Workbench Patch
//!
//! Applies catalog insertion directives to a JSON document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document text + InsertDirective             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ engine: parse → walk pointer → apply mode   │
//! │  - SetIfMissing / Overwrite                 │
//! │  - MergeObject (deep, arrays concatenate)   │
//! │  - AppendToArray                            │
//! │  - ReplaceRoot                              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ pretty-printed document text (or error)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use workbench_patch::{apply, InsertDirective, InsertMode};
//!
//! let directive = InsertDirective::new(
//!     "Core",
//!     "code",
//!     "/code",
//!     InsertMode::Overwrite,
//!     "\"myblock\"",
//!     "Unique identifier for the block.",
//! );
//!
//! let outcome = apply("", &directive);
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.text, "{\n  \"code\": \"myblock\"\n}");
//! ```

mod directive;
mod engine;
mod errors;
mod merge;
pub mod pointer;

#[cfg(feature = "pretty-errors")]
mod report;

pub use directive::{InsertDirective, InsertMode, ParseModeError};
pub use engine::{apply, try_apply, PatchOutcome};
pub use errors::{PatchError, PatchResult};
pub use merge::merge_into;
pub use pointer::{escape_segment, format_pointer, split_pointer, unescape_segment};

#[cfg(feature = "pretty-errors")]
pub use report::format_parse_report;
