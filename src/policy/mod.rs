//! Segmentation policies for structured text.
//!
//! A policy splits a string into alternating runs of segment text and
//! separators. Directional marks are only ever placed around segment runs, so
//! the policy decides where a renderer is allowed to break direction.

mod builtin;
mod separated;

pub use builtin::StructuredType;
pub use separated::{DEFAULT_SEPARATORS, SeparatorPolicy};

use crate::unicode::{Direction, base_char, grapheme_indices};
use std::fmt;
use std::ops::Range;

/// Kind of a span produced by a policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Segment,
    Separator,
}

/// A contiguous run of the input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    /// Byte offset of `text` in the input.
    pub start: usize,
    pub text: &'a str,
}

impl<'a> Span<'a> {
    #[must_use]
    pub const fn new(kind: SpanKind, start: usize, text: &'a str) -> Self {
        Self { kind, start, text }
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.kind == SpanKind::Separator
    }
}

/// How a type of structured text is split and classified.
///
/// Implementations are immutable and shared between experts, so they must be
/// `Send + Sync`.
pub trait SegmentationPolicy: Send + Sync + fmt::Debug {
    /// Identifier this policy is registered under (case-insensitive).
    fn name(&self) -> &str;

    /// Characters that separate segments.
    fn separators(&self) -> &str;

    /// Per-character direction override. `None` defers to the Unicode data.
    fn classify(&self, _ch: char) -> Option<Direction> {
        None
    }

    /// Direction assigned to a segment without strong characters when no
    /// context is available.
    fn default_direction(&self) -> Option<Direction> {
        None
    }

    /// Split `text` into spans covering it exactly.
    fn segments<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let separators = self.separators();
        split_runs(text, |grapheme| separators.contains(base_char(grapheme)))
    }
}

/// Split `text` into maximal runs of separator and non-separator grapheme
/// clusters. `is_separator` is called once per cluster, in order.
pub fn split_runs<'a>(text: &'a str, mut is_separator: impl FnMut(&str) -> bool) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut run: Option<(SpanKind, usize)> = None;

    for (idx, grapheme) in grapheme_indices(text) {
        let kind = if is_separator(grapheme) {
            SpanKind::Separator
        } else {
            SpanKind::Segment
        };
        match run {
            Some((current, _)) if current == kind => {}
            Some((current, start)) => {
                spans.push(Span::new(current, start, &text[start..idx]));
                run = Some((kind, idx));
            }
            None => run = Some((kind, idx)),
        }
    }

    if let Some((kind, start)) = run {
        spans.push(Span::new(kind, start, &text[start..]));
    }
    spans
}
