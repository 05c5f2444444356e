//! Environment describing the context surrounding a piece of structured text.

use crate::error::{Error, Result};
use crate::unicode::Direction;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Orientation of the paragraph or widget hosting the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Ltr,
    Rtl,
    /// Direction is taken from the text itself (first strong character).
    Contextual,
}

impl Orientation {
    /// Fixed direction of this orientation, or `None` when contextual.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Ltr => Some(Direction::Ltr),
            Self::Rtl => Some(Direction::Rtl),
            Self::Contextual => None,
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" | "left-to-right" => Ok(Self::Ltr),
            "rtl" | "right-to-left" => Ok(Self::Rtl),
            "contextual" | "auto" => Ok(Self::Contextual),
            other => Err(Error::InvalidEnvironment(format!("orientation '{other}'"))),
        }
    }
}

/// How inserted directional marks are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkVisibility {
    /// Printable glyphs, useful for debugging and display of the mark layout.
    Visible,
    /// Unicode formatting controls that renderers do not paint.
    #[default]
    Invisible,
}

impl FromStr for MarkVisibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visible" => Ok(Self::Visible),
            "invisible" => Ok(Self::Invisible),
            other => Err(Error::InvalidEnvironment(format!("mark visibility '{other}'"))),
        }
    }
}

/// Processing environment.
///
/// Two environments are equal iff all fields match; equal environments share
/// cached experts in an [`ExpertRegistry`](crate::ExpertRegistry).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub orientation: Orientation,
    pub marks: MarkVisibility,
    /// Allow mirrored-glyph substitution in segments running against a fixed
    /// orientation.
    pub mirroring: bool,
}

impl Environment {
    /// Left-to-right, invisible marks, no mirroring.
    pub const DEFAULT: Self = Self {
        orientation: Orientation::Ltr,
        marks: MarkVisibility::Invisible,
        mirroring: false,
    };

    /// Create an environment with the given orientation and default options.
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::DEFAULT
        }
    }

    /// Set the mark visibility (builder pattern).
    #[must_use]
    pub const fn with_marks(mut self, marks: MarkVisibility) -> Self {
        self.marks = marks;
        self
    }

    /// Allow or forbid mirroring (builder pattern).
    #[must_use]
    pub const fn with_mirroring(mut self, mirroring: bool) -> Self {
        self.mirroring = mirroring;
        self
    }

    /// Normalize an optional environment to the default.
    #[must_use]
    pub fn resolve(environment: Option<Self>) -> Self {
        environment.unwrap_or(Self::DEFAULT)
    }

    /// Whether a segment resolved to `direction` gets its glyphs mirrored.
    #[must_use]
    pub fn mirrors(&self, direction: Direction) -> bool {
        self.mirroring
            && direction.is_strong()
            && self
                .orientation
                .direction()
                .is_some_and(|base| base == direction.opposite())
    }
}
