//! Read-only directional data consumed by the engine.

use super::bidi::{self, Direction, PDF};
use super::mirror;
use crate::environment::MarkVisibility;
use std::fmt;

/// Opening and closing glyphs wrapped around a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    pub open: char,
    pub close: char,
}

/// Directional data tables: character classification, mark glyphs and
/// mirrored glyphs.
///
/// The engine only reads from this; implementations must be pure.
pub trait DirectionalData: Send + Sync + fmt::Debug {
    /// Strong direction of `ch`, or `Neutral`.
    fn classify(&self, ch: char) -> Direction {
        bidi::classify(ch)
    }

    /// Glyphs used to wrap a segment resolved to `direction`.
    ///
    /// Only called with a strong direction.
    fn mark(&self, direction: Direction, visibility: MarkVisibility) -> Mark;

    /// Mirror-image counterpart of `ch`.
    fn mirror(&self, ch: char) -> Option<char> {
        mirror::mirror(ch)
    }

    /// Returns true if `ch` is one of the glyphs `mark` can produce for
    /// `visibility`.
    fn is_mark(&self, ch: char, visibility: MarkVisibility) -> bool {
        [Direction::Ltr, Direction::Rtl].into_iter().any(|dir| {
            let mark = self.mark(dir, visibility);
            mark.open == ch || mark.close == ch
        })
    }
}

/// LEFT-TO-RIGHT EMBEDDING.
pub const LRE: char = '\u{202A}';
/// RIGHT-TO-LEFT EMBEDDING.
pub const RLE: char = '\u{202B}';

const VISIBLE_LTR: char = '\u{25B6}';
const VISIBLE_RTL: char = '\u{25C0}';
const VISIBLE_POP: char = '\u{25AA}';

/// Default tables backed by the Unicode Character Database.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeData;

impl DirectionalData for UnicodeData {
    fn mark(&self, direction: Direction, visibility: MarkVisibility) -> Mark {
        match (visibility, direction) {
            (MarkVisibility::Invisible, Direction::Rtl) => Mark {
                open: RLE,
                close: PDF,
            },
            (MarkVisibility::Invisible, _) => Mark {
                open: LRE,
                close: PDF,
            },
            (MarkVisibility::Visible, Direction::Rtl) => Mark {
                open: VISIBLE_RTL,
                close: VISIBLE_POP,
            },
            (MarkVisibility::Visible, _) => Mark {
                open: VISIBLE_LTR,
                close: VISIBLE_POP,
            },
        }
    }
}
