//! Unicode utilities: bidi classification, mark glyphs, mirroring and
//! grapheme iteration.

mod bidi;
mod data;
mod grapheme;
mod mirror;

pub use bidi::{Control, Direction, PDF, PDI, classify, control, first_strong, last_strong};
pub use data::{DirectionalData, LRE, Mark, RLE, UnicodeData};
pub use grapheme::{base_char, grapheme_indices};
pub use mirror::mirror;
