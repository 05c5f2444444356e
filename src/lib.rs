//! `structured_bidi` - directional marks for structured text
//!
//! Inserts Unicode directional formatting marks into "code-like" text such as
//! file paths, compound identifiers, expressions and delimited lists so that a
//! bidi-aware renderer shows mixed left-to-right and right-to-left segments in
//! the right visual order. Only marks are inserted; the characters of the
//! input are kept as they are (apart from opt-in mirrored-glyph substitution).
//!
//! Text is split by a [`SegmentationPolicy`], each segment is resolved to a
//! direction from its first strong character, and segments running against
//! the [`Environment`] orientation are wrapped in embedding marks.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // ExpertRegistry, StatefulExpert etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::must_use_candidate)] // Not every accessor needs #[must_use]
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_pub_crate)] // pub(crate) constructors in private modules

pub mod environment;
pub mod error;
pub mod expert;
pub mod list;
pub mod policy;
pub mod registry;
pub mod state;
pub mod unicode;

// Re-export core types at crate root
pub use environment::{Environment, MarkVisibility, Orientation};
pub use error::{Error, Result};
pub use expert::{Expert, Processor, StatefulExpert};
pub use list::ListFormatter;
pub use policy::{SegmentationPolicy, SeparatorPolicy, Span, SpanKind, StructuredType};
pub use registry::ExpertRegistry;
pub use state::ProcessingState;
pub use unicode::{Direction, DirectionalData, Mark, UnicodeData};
