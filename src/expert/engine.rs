//! Segment direction resolution and mark insertion.

use crate::environment::Environment;
use crate::policy::{SegmentationPolicy, Span};
use crate::state::ProcessingState;
use crate::unicode::{
    Control, Direction, DirectionalData, Mark, control, first_strong, last_strong,
};
use tracing::trace;

/// Output of one pass over the input.
pub(super) struct Output {
    pub full: String,
    /// Lean-text byte offsets of inserted marks, when tracked.
    pub offsets: Option<Vec<usize>>,
}

impl Output {
    pub fn new(capacity: usize, track_offsets: bool) -> Self {
        Self {
            full: String::with_capacity(capacity),
            offsets: track_offsets.then(Vec::new),
        }
    }

    fn mark(&mut self, glyph: char, lean_offset: usize) {
        self.full.push(glyph);
        if let Some(offsets) = self.offsets.as_mut() {
            offsets.push(lean_offset);
        }
    }
}

/// Borrowed view of everything a pass needs.
pub(super) struct Engine<'a> {
    pub policy: &'a dyn SegmentationPolicy,
    pub environment: Environment,
    pub data: &'a dyn DirectionalData,
}

impl Engine<'_> {
    fn classify(&self, ch: char) -> Direction {
        self.policy
            .classify(ch)
            .unwrap_or_else(|| self.data.classify(ch))
    }

    /// First and last strong directions of a segment.
    fn scan(&self, segment: &str) -> (Direction, Direction) {
        let classify = |ch: char| self.classify(ch);
        let first = first_strong(segment, classify);
        if !first.is_strong() {
            return (first, first);
        }
        (first, last_strong(segment, classify))
    }

    /// Direction for a segment with no strong character of its own.
    fn fallback(&self, working: Direction) -> Direction {
        if working.is_strong() {
            return working;
        }
        self.policy
            .default_direction()
            .or_else(|| self.environment.orientation.direction())
            .unwrap_or(Direction::Neutral)
    }

    /// Direction of the text as a whole: the fixed orientation, or the first
    /// segment that resolves to a strong direction.
    pub fn text_direction(&self, text: &str, working: Direction) -> Direction {
        if let Some(base) = self.environment.orientation.direction() {
            return base;
        }
        self.policy
            .segments(text)
            .iter()
            .filter(|span| !span.is_separator())
            .map(|span| self.scan(span.text).0)
            .find(|dir| dir.is_strong())
            .unwrap_or_else(|| self.fallback(working))
    }

    /// Insert marks into `text`, updating `state` with the context at the end.
    pub fn run(&self, text: &str, state: &mut ProcessingState, out: &mut Output) {
        if text.is_empty() {
            return;
        }

        let base = self.environment.orientation.direction();
        let mut working = state.last_strong;
        let mut depth = state.open_depth;
        // Direction of the text surrounding wrapped segments when the
        // orientation is contextual.
        let mut context = working;

        for span in self.policy.segments(text) {
            if span.is_separator() {
                out.full.push_str(span.text);
                continue;
            }

            let (first, last) = self.scan(span.text);
            let resolved = if first.is_strong() {
                first
            } else {
                self.fallback(working)
            };
            if last.is_strong() {
                working = last;
            }

            let reference = base.unwrap_or(context);
            let wrap = resolved.is_strong() && reference.is_strong() && resolved != reference;
            if base.is_none() && !wrap && resolved.is_strong() {
                context = resolved;
            }

            let mark = if wrap {
                trace!(start = span.start, ?resolved, "wrapping segment");
                Some(self.data.mark(resolved, self.environment.marks))
            } else {
                None
            };
            let mirror = wrap && self.environment.mirrors(resolved);
            self.emit(&span, mark, mirror, &mut depth, out);
        }

        state.last_strong = working;
        state.open_depth = depth;
    }

    /// Copy a segment, wrapping it in `mark` when given.
    ///
    /// Embeddings and isolates the segment opens and leaves open are closed
    /// before the wrapping pop mark. A closer whose opener precedes the
    /// segment is emitted outside the wrapping pair and consumes `depth`; the
    /// pair reopens before the next character.
    fn emit(
        &self,
        span: &Span<'_>,
        mark: Option<Mark>,
        mirror: bool,
        depth: &mut u32,
        out: &mut Output,
    ) {
        let mut opened: Vec<Control> = Vec::new();
        let mut inside = false;

        for (offset, ch) in span.text.char_indices() {
            let at = span.start + offset;
            if let Some(c) = control(ch) {
                if c.is_opener() {
                    opened.push(c);
                } else if !close_local(&mut opened, c) {
                    close_all(&mut opened, at, out);
                    if let Some(mark) = mark.filter(|_| inside) {
                        out.mark(mark.close, at);
                        inside = false;
                    }
                    *depth = depth.saturating_sub(1);
                    out.full.push(ch);
                    continue;
                }
            }

            if let Some(mark) = mark.filter(|_| !inside) {
                out.mark(mark.open, at);
                inside = true;
            }
            let glyph = if mirror {
                self.data.mirror(ch).unwrap_or(ch)
            } else {
                ch
            };
            out.full.push(glyph);
        }

        close_all(&mut opened, span.end(), out);
        if let Some(mark) = mark.filter(|_| inside) {
            out.mark(mark.close, span.end());
        }
    }

    /// Remove the marks `run` inserts and undo mirroring inside wrapped
    /// segments.
    pub fn strip(&self, full: &str) -> String {
        let visibility = self.environment.marks;
        let ltr_open = self.data.mark(Direction::Ltr, visibility).open;
        let rtl_open = self.data.mark(Direction::Rtl, visibility).open;

        let mut lean = String::with_capacity(full.len());
        let mut open: Vec<Direction> = Vec::new();
        for ch in full.chars() {
            if ch == ltr_open || ch == rtl_open {
                open.push(if ch == rtl_open {
                    Direction::Rtl
                } else {
                    Direction::Ltr
                });
                continue;
            }
            if self.data.is_mark(ch, visibility) {
                open.pop();
                continue;
            }
            let mirrored = open
                .last()
                .is_some_and(|&dir| self.environment.mirrors(dir));
            lean.push(if mirrored {
                self.data.mirror(ch).unwrap_or(ch)
            } else {
                ch
            });
        }
        lean
    }
}

/// Match a closer against controls opened earlier in the same segment.
///
/// Returns false when the closer belongs to an embedding or isolate opened
/// before the segment. A PDF inside a local isolate closes nothing.
fn close_local(opened: &mut Vec<Control>, closer: Control) -> bool {
    match closer {
        Control::CloseEmbedding => match opened.last() {
            Some(Control::OpenEmbedding) => {
                opened.pop();
                true
            }
            Some(_) => true,
            None => false,
        },
        _ => match opened.iter().rposition(|&c| c == Control::OpenIsolate) {
            Some(pos) => {
                opened.truncate(pos);
                true
            }
            None => false,
        },
    }
}

/// Close every locally opened control, innermost first.
fn close_all(opened: &mut Vec<Control>, at: usize, out: &mut Output) {
    while let Some(open) = opened.pop() {
        out.mark(open.closer(), at);
    }
}
