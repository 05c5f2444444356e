//! Bidirectional (BiDi) character classification.
//!
//! This module wraps the Unicode `Bidi_Class` table from `unicode-bidi` and
//! reduces it to the three-way classification the structured text engine
//! needs: strong left-to-right, strong right-to-left, or neutral. It also
//! recognizes the explicit formatting controls (embeddings, overrides,
//! isolates) so that controls already present in the input can be tracked.

use serde::{Deserialize, Serialize};
use unicode_bidi::{BidiClass, bidi_class};

/// Resolved direction of a character or segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
    /// No strong direction could be determined.
    #[default]
    Neutral,
}

impl Direction {
    /// Returns true for `Ltr` and `Rtl`.
    #[must_use]
    pub const fn is_strong(self) -> bool {
        !matches!(self, Self::Neutral)
    }

    /// The other strong direction. `Neutral` maps to itself.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Ltr => Self::Rtl,
            Self::Rtl => Self::Ltr,
            Self::Neutral => Self::Neutral,
        }
    }
}

/// Explicit directional formatting control found in input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// LRE, RLE, LRO or RLO: closed by PDF.
    OpenEmbedding,
    /// LRI, RLI or FSI: closed by PDI.
    OpenIsolate,
    /// PDF.
    CloseEmbedding,
    /// PDI.
    CloseIsolate,
}

impl Control {
    /// Character that closes a control of this kind.
    #[must_use]
    pub const fn closer(self) -> char {
        match self {
            Self::OpenEmbedding | Self::CloseEmbedding => PDF,
            Self::OpenIsolate | Self::CloseIsolate => PDI,
        }
    }

    #[must_use]
    pub const fn is_opener(self) -> bool {
        matches!(self, Self::OpenEmbedding | Self::OpenIsolate)
    }
}

/// POP DIRECTIONAL FORMATTING.
pub const PDF: char = '\u{202C}';
/// POP DIRECTIONAL ISOLATE.
pub const PDI: char = '\u{2069}';

/// Classify a character by its Unicode bidi class.
///
/// `L` is left-to-right, `R` and `AL` are right-to-left. Numbers, separators,
/// whitespace and formatting controls are neutral.
#[inline]
#[must_use]
pub fn classify(ch: char) -> Direction {
    if ch.is_ascii() {
        return if ch.is_ascii_alphabetic() {
            Direction::Ltr
        } else {
            Direction::Neutral
        };
    }
    match bidi_class(ch) {
        BidiClass::L => Direction::Ltr,
        BidiClass::R | BidiClass::AL => Direction::Rtl,
        _ => Direction::Neutral,
    }
}

/// Identify explicit formatting controls.
#[must_use]
pub fn control(ch: char) -> Option<Control> {
    if ch.is_ascii() {
        return None;
    }
    match bidi_class(ch) {
        BidiClass::LRE | BidiClass::RLE | BidiClass::LRO | BidiClass::RLO => {
            Some(Control::OpenEmbedding)
        }
        BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => Some(Control::OpenIsolate),
        BidiClass::PDF => Some(Control::CloseEmbedding),
        BidiClass::PDI => Some(Control::CloseIsolate),
        _ => None,
    }
}

/// Direction of the first strong character in `text` under `classify`.
pub fn first_strong(text: &str, classify: impl Fn(char) -> Direction) -> Direction {
    text.chars()
        .map(classify)
        .find(|dir| dir.is_strong())
        .unwrap_or(Direction::Neutral)
}

/// Direction of the last strong character in `text` under `classify`.
pub fn last_strong(text: &str, classify: impl Fn(char) -> Direction) -> Direction {
    text.chars()
        .rev()
        .map(classify)
        .find(|dir| dir.is_strong())
        .unwrap_or(Direction::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_latin_is_ltr() {
        assert_eq!(classify('a'), Direction::Ltr);
        assert_eq!(classify('Z'), Direction::Ltr);
        assert_eq!(classify('é'), Direction::Ltr);
    }

    #[test]
    fn classify_hebrew_and_arabic_are_rtl() {
        assert_eq!(classify('ש'), Direction::Rtl);
        assert_eq!(classify('ل'), Direction::Rtl);
    }

    #[test]
    fn classify_digits_and_punctuation_are_neutral() {
        for ch in ['1', '/', '.', ' ', '٣', '\u{202B}'] {
            assert_eq!(classify(ch), Direction::Neutral, "{ch:?}");
        }
    }

    #[test]
    fn first_and_last_strong() {
        assert_eq!(first_strong("12 abc שלום", classify), Direction::Ltr);
        assert_eq!(last_strong("12 abc שלום", classify), Direction::Rtl);
        assert_eq!(first_strong("123 ...", classify), Direction::Neutral);
        assert_eq!(last_strong("", classify), Direction::Neutral);
    }

    #[test]
    fn strong_scan_uses_given_classifier() {
        let digits_rtl = |ch: char| {
            if ch.is_ascii_digit() {
                Direction::Rtl
            } else {
                classify(ch)
            }
        };
        assert_eq!(first_strong("12 abc", digits_rtl), Direction::Rtl);
        assert_eq!(last_strong("abc 12 ..", digits_rtl), Direction::Rtl);
    }

    #[test]
    fn controls_are_recognized() {
        assert_eq!(control('\u{202B}'), Some(Control::OpenEmbedding));
        assert_eq!(control('\u{202E}'), Some(Control::OpenEmbedding));
        assert_eq!(control('\u{2067}'), Some(Control::OpenIsolate));
        assert_eq!(control(PDF), Some(Control::CloseEmbedding));
        assert_eq!(control(PDI), Some(Control::CloseIsolate));
        assert_eq!(control('a'), None);
        assert_eq!(Control::OpenIsolate.closer(), PDI);
    }

    #[test]
    fn direction_opposite() {
        assert_eq!(Direction::Ltr.opposite(), Direction::Rtl);
        assert_eq!(Direction::Neutral.opposite(), Direction::Neutral);
        assert!(!Direction::Neutral.is_strong());
    }
}
