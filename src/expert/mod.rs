//! Structured text experts.
//!
//! An [`Expert`] binds a segmentation policy to an environment and inserts
//! directional marks into structured text. It holds no mutable state, so one
//! instance can be shared between threads behind an `Arc`.
//!
//! A [`StatefulExpert`] additionally owns a [`ProcessingState`] that carries the
//! directional context from one call to the next, e.g. when a document is fed
//! line by line. It is private to its owner and every call that touches the
//! state takes `&mut self`.
//!
//! ```
//! use structured_bidi::{Expert, StructuredType};
//! use std::sync::Arc;
//!
//! let expert = Expert::new(Arc::new(StructuredType::File.policy()), None);
//! let full = expert.process("abc/\u{05D3}\u{05DC}/xyz");
//! assert_eq!(full, "abc/\u{202B}\u{05D3}\u{05DC}\u{202C}/xyz");
//! assert_eq!(expert.full_to_lean(&full), "abc/\u{05D3}\u{05DC}/xyz");
//! ```

mod engine;

use crate::environment::Environment;
use crate::policy::SegmentationPolicy;
use crate::state::ProcessingState;
use crate::unicode::{Direction, DirectionalData, UnicodeData};
use engine::{Engine, Output};
use std::sync::Arc;

/// Common capability of stateless and stateful experts.
pub trait Processor {
    /// Insert directional marks into `text`.
    fn process(&mut self, text: &str) -> String;

    /// Environment this processor is bound to.
    fn environment(&self) -> Environment;
}

/// Stateless structured text processor.
#[derive(Clone, Debug)]
pub struct Expert {
    policy: Arc<dyn SegmentationPolicy>,
    environment: Environment,
    data: Arc<dyn DirectionalData>,
}

impl Expert {
    /// Create an expert using the Unicode directional data.
    ///
    /// `None` selects [`Environment::DEFAULT`].
    #[must_use]
    pub fn new(policy: Arc<dyn SegmentationPolicy>, environment: Option<Environment>) -> Self {
        Self {
            policy,
            environment: Environment::resolve(environment),
            data: Arc::new(UnicodeData),
        }
    }

    /// Replace the directional data tables (builder pattern).
    #[must_use]
    pub fn with_data(mut self, data: Arc<dyn DirectionalData>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &Arc<dyn SegmentationPolicy> {
        &self.policy
    }

    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    fn engine(&self) -> Engine<'_> {
        Engine {
            policy: self.policy.as_ref(),
            environment: self.environment,
            data: self.data.as_ref(),
        }
    }

    fn run(&self, text: &str, state: &mut ProcessingState, track_offsets: bool) -> Output {
        let mut out = Output::new(text.len() + 8, track_offsets);
        self.engine().run(text, state, &mut out);
        out
    }

    /// Insert directional marks into `text`.
    ///
    /// The result depends only on `text`, the policy and the environment.
    #[must_use]
    pub fn process(&self, text: &str) -> String {
        self.run(text, &mut ProcessingState::default(), false).full
    }

    /// Byte offsets in `text` where [`process`](Self::process) inserts marks,
    /// in insertion order.
    #[must_use]
    pub fn mark_offsets(&self, text: &str) -> Vec<usize> {
        self.run(text, &mut ProcessingState::default(), true)
            .offsets
            .unwrap_or_default()
    }

    /// Undo [`process`](Self::process): remove inserted marks and reverse
    /// mirrored-glyph substitution.
    ///
    /// Exact for input that did not already contain the mark glyphs.
    #[must_use]
    pub fn full_to_lean(&self, text: &str) -> String {
        self.engine().strip(text)
    }

    /// Overall direction of `text`: the orientation when it is fixed,
    /// otherwise the direction of the first segment that resolves to a
    /// strong direction.
    #[must_use]
    pub fn text_direction(&self, text: &str) -> Direction {
        self.engine().text_direction(text, Direction::Neutral)
    }

    /// Create a private stateful expert with the same policy, environment and
    /// data, starting from the initial state.
    #[must_use]
    pub fn to_stateful(&self) -> StatefulExpert {
        StatefulExpert {
            expert: self.clone(),
            state: ProcessingState::default(),
        }
    }
}

impl Processor for Expert {
    fn process(&mut self, text: &str) -> String {
        Self::process(self, text)
    }

    fn environment(&self) -> Environment {
        self.environment
    }
}

/// Structured text processor that carries directional context across calls.
#[derive(Clone, Debug)]
pub struct StatefulExpert {
    expert: Expert,
    state: ProcessingState,
}

impl StatefulExpert {
    /// Create a stateful expert for a directly supplied policy.
    #[must_use]
    pub fn new(policy: Arc<dyn SegmentationPolicy>, environment: Option<Environment>) -> Self {
        Expert::new(policy, environment).to_stateful()
    }

    /// Replace the directional data tables (builder pattern).
    #[must_use]
    pub fn with_data(mut self, data: Arc<dyn DirectionalData>) -> Self {
        self.expert = self.expert.with_data(data);
        self
    }

    /// The stateless view of this expert.
    #[must_use]
    pub const fn expert(&self) -> &Expert {
        &self.expert
    }

    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.expert.environment
    }

    /// Current directional context.
    #[must_use]
    pub const fn state(&self) -> ProcessingState {
        self.state
    }

    /// Seed the context for the next call.
    pub fn set_state(&mut self, state: ProcessingState) {
        self.state = state;
    }

    /// Reset to the initial context.
    pub fn clear_state(&mut self) {
        self.state = ProcessingState::default();
    }

    /// Insert directional marks into `text`, continuing from the current
    /// state and saving the context reached at its end.
    pub fn process(&mut self, text: &str) -> String {
        self.expert.run(text, &mut self.state, false).full
    }

    /// Offsets where the next [`process`](Self::process) call would insert
    /// marks. Does not change the state.
    #[must_use]
    pub fn mark_offsets(&self, text: &str) -> Vec<usize> {
        let mut state = self.state;
        self.expert
            .run(text, &mut state, true)
            .offsets
            .unwrap_or_default()
    }

    #[must_use]
    pub fn full_to_lean(&self, text: &str) -> String {
        self.expert.full_to_lean(text)
    }

    /// Like [`Expert::text_direction`], falling back to the carried context.
    #[must_use]
    pub fn text_direction(&self, text: &str) -> Direction {
        self.expert
            .engine()
            .text_direction(text, self.state.last_strong)
    }

    /// Process `text` line by line, carrying state from each line to the
    /// next. LF and CRLF line endings are copied through unchanged.
    pub fn process_lines(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        let bytes = text.as_bytes();
        let mut offset = 0usize;

        for line in text.lines() {
            out.push_str(&self.process(line));
            offset += line.len();

            let ending = offset;
            if offset < bytes.len() {
                if bytes[offset] == b'\r' && bytes.get(offset + 1) == Some(&b'\n') {
                    offset += 2;
                } else if bytes[offset] == b'\n' {
                    offset += 1;
                }
            }
            out.push_str(&text[ending..offset]);
        }

        out
    }
}

impl Processor for StatefulExpert {
    fn process(&mut self, text: &str) -> String {
        Self::process(self, text)
    }

    fn environment(&self) -> Environment {
        self.expert.environment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{MarkVisibility, Orientation};
    use crate::policy::{SeparatorPolicy, StructuredType};
    use crate::unicode::{LRE, Mark, PDF, RLE};

    const HEB: &str = "\u{05D3}\u{05DC}\u{05E7}"; // דלק

    fn slash_expert(environment: Environment) -> Expert {
        let policy = SeparatorPolicy::new("slash", "/").unwrap();
        Expert::new(Arc::new(policy), Some(environment))
    }

    #[test]
    fn rtl_segment_in_ltr_environment_is_wrapped() {
        let expert = slash_expert(Environment::DEFAULT);
        let out = expert.process(&format!("abc/{HEB}/xyz"));
        assert_eq!(out, format!("abc/{RLE}{HEB}{PDF}/xyz"));
    }

    #[test]
    fn ltr_segments_in_rtl_environment_are_wrapped() {
        let expert = slash_expert(Environment::new(Orientation::Rtl));
        let out = expert.process(&format!("abc/{HEB}/xyz"));
        assert_eq!(out, format!("{LRE}abc{PDF}/{HEB}/{LRE}xyz{PDF}"));
    }

    #[test]
    fn empty_and_separator_only_inputs_are_unchanged() {
        let expert = slash_expert(Environment::DEFAULT);
        assert_eq!(expert.process(""), "");
        assert_eq!(expert.process("///"), "///");
        assert!(expert.mark_offsets("").is_empty());
    }

    #[test]
    fn neutral_segment_follows_previous_strong_direction() {
        let expert = slash_expert(Environment::DEFAULT);
        let out = expert.process(&format!("{HEB}/123"));
        assert_eq!(out, format!("{RLE}{HEB}{PDF}/{RLE}123{PDF}"));
    }

    #[test]
    fn neutral_segment_without_context_uses_orientation() {
        let expert = slash_expert(Environment::new(Orientation::Rtl));
        assert_eq!(expert.process("123/456"), "123/456");
    }

    #[test]
    fn contextual_orientation_wraps_against_first_direction() {
        let expert = slash_expert(Environment::new(Orientation::Contextual));
        let out = expert.process(&format!("{HEB}/abc/xyz"));
        assert_eq!(out, format!("{HEB}/{LRE}abc{PDF}/{LRE}xyz{PDF}"));

        let out = expert.process(&format!("abc/{HEB}/xyz"));
        assert_eq!(out, format!("abc/{RLE}{HEB}{PDF}/xyz"));
    }

    #[test]
    fn contextual_neutral_text_is_untouched() {
        let expert = slash_expert(Environment::new(Orientation::Contextual));
        assert_eq!(expert.process("1/2/3"), "1/2/3");
    }

    #[test]
    fn visible_marks_use_printable_glyphs() {
        let env = Environment::DEFAULT.with_marks(MarkVisibility::Visible);
        let expert = slash_expert(env);
        let out = expert.process(&format!("a/{HEB}"));
        assert_eq!(out, format!("a/\u{25C0}{HEB}\u{25AA}"));
        assert_eq!(expert.full_to_lean(&out), format!("a/{HEB}"));
    }

    #[test]
    fn mirroring_applies_only_to_opposite_segments() {
        let env = Environment::DEFAULT.with_mirroring(true);
        let expert = slash_expert(env);
        let lean = format!("f(x)/{HEB}(1)");
        let full = expert.process(&lean);
        assert_eq!(full, format!("f(x)/{RLE}{HEB})1({PDF}"));
        assert_eq!(expert.full_to_lean(&full), lean);
    }

    #[test]
    fn mark_offsets_point_into_lean_text() {
        let expert = slash_expert(Environment::DEFAULT);
        let lean = format!("abc/{HEB}/xyz");
        let offsets = expert.mark_offsets(&lean);
        assert_eq!(offsets, vec![4, 4 + HEB.len()]);
    }

    #[test]
    fn unclosed_embedding_in_segment_is_closed_before_pop() {
        let expert = slash_expert(Environment::DEFAULT);
        let out = expert.process(&format!("{HEB}{LRE}x/abc"));
        assert_eq!(out, format!("{RLE}{HEB}{LRE}x{PDF}{PDF}/abc"));
    }

    #[test]
    fn carried_closer_is_emitted_outside_wrapping_pair() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        expert.set_state(ProcessingState::new(Direction::Neutral, 1));
        let lean = "\u{05D0}\u{202C}x";
        assert_eq!(expert.mark_offsets(lean), vec![0, 2, 5, 6]);
        assert_eq!(
            expert.process(lean),
            format!("{RLE}\u{05D0}{PDF}\u{202C}{RLE}x{PDF}")
        );
        assert_eq!(expert.state().open_depth, 0);
    }

    #[test]
    fn trailing_carried_closer_leaves_no_empty_pair() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        expert.set_state(ProcessingState::new(Direction::Neutral, 1));
        assert_eq!(
            expert.process("\u{05D0}\u{202C}"),
            format!("{RLE}\u{05D0}{PDF}\u{202C}")
        );
    }

    #[test]
    fn unmatched_isolate_closer_ends_local_embeddings_first() {
        let expert = slash_expert(Environment::DEFAULT);
        let out = expert.process("\u{05D0}\u{202A}b\u{2069}c");
        assert_eq!(
            out,
            format!("{RLE}\u{05D0}{LRE}b{PDF}{PDF}\u{2069}{RLE}c{PDF}")
        );
    }

    #[test]
    fn pdf_inside_local_isolate_is_passed_through() {
        let expert = slash_expert(Environment::DEFAULT);
        let out = expert.process("\u{05D0}\u{2067}\u{202C}");
        assert_eq!(out, format!("{RLE}\u{05D0}\u{2067}{PDF}\u{2069}{PDF}"));
    }

    #[test]
    fn policy_override_changes_resolution() {
        let policy = SeparatorPolicy::new("hash", "/")
            .unwrap()
            .with_override('#', Direction::Rtl);
        let expert = Expert::new(Arc::new(policy), None);
        assert_eq!(expert.process("#1/a"), format!("{RLE}#1{PDF}/a"));
    }

    #[test]
    fn policy_default_direction_beats_orientation() {
        let expert = Expert::new(
            Arc::new(StructuredType::Math.policy()),
            Some(Environment::new(Orientation::Rtl)),
        );
        assert_eq!(expert.process("1+2"), format!("{LRE}1{PDF}+{LRE}2{PDF}"));
    }

    #[test]
    fn text_direction_reports_first_strong_segment() {
        let contextual = slash_expert(Environment::new(Orientation::Contextual));
        assert_eq!(contextual.text_direction(&format!("12/{HEB}/a")), Direction::Rtl);
        assert_eq!(contextual.text_direction("12/34"), Direction::Neutral);

        let fixed = slash_expert(Environment::new(Orientation::Rtl));
        assert_eq!(fixed.text_direction("abc"), Direction::Rtl);
    }

    #[test]
    fn stateful_carries_last_strong_direction() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        expert.process(&format!("abc/{HEB}"));
        assert_eq!(expert.state().last_strong, Direction::Rtl);
        assert_eq!(expert.process("123"), format!("{RLE}123{PDF}"));

        expert.process(&format!("abc/{HEB}"));
        expert.clear_state();
        assert_eq!(expert.process("123"), "123");
    }

    #[test]
    fn stateful_empty_input_keeps_state() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        let state = ProcessingState::new(Direction::Rtl, 1);
        expert.set_state(state);
        assert_eq!(expert.process(""), "");
        assert_eq!(expert.state(), state);
    }

    #[test]
    fn stateful_closer_consumes_carried_depth() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        expert.set_state(ProcessingState::new(Direction::Neutral, 1));
        assert_eq!(expert.process(&format!("a{PDF}")), format!("a{PDF}"));
        assert_eq!(expert.state().open_depth, 0);
        expert.process(&format!("a{PDF}"));
        assert_eq!(expert.state().open_depth, 0);
    }

    #[test]
    fn stateful_mark_offsets_do_not_touch_state() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        expert.process(HEB);
        let before = expert.state();
        assert_eq!(expert.mark_offsets("1"), vec![0, 1]);
        assert_eq!(expert.state(), before);
        assert_eq!(expert.text_direction("1"), Direction::Ltr);
    }

    #[test]
    fn contextual_stateful_seeds_context_from_state() {
        let env = Environment::new(Orientation::Contextual);
        let mut expert = slash_expert(env).to_stateful();
        expert.process(HEB);
        assert_eq!(expert.process("abc"), format!("{LRE}abc{PDF}"));
        assert_eq!(expert.text_direction("1"), Direction::Ltr);
    }

    #[test]
    fn process_lines_keeps_line_endings() {
        let mut expert = slash_expert(Environment::DEFAULT).to_stateful();
        let text = format!("a/{HEB}\r\n1\n\nb");
        let out = expert.process_lines(&text);
        assert_eq!(
            out,
            format!("a/{RLE}{HEB}{PDF}\r\n{RLE}1{PDF}\n\nb")
        );
        assert_eq!(expert.state().last_strong, Direction::Ltr);
    }

    #[test]
    fn processor_trait_is_object_safe() {
        let mut processors: Vec<Box<dyn Processor>> = vec![
            Box::new(slash_expert(Environment::DEFAULT)),
            Box::new(slash_expert(Environment::DEFAULT).to_stateful()),
        ];
        for processor in &mut processors {
            assert_eq!(processor.process("abc"), "abc");
            assert_eq!(processor.environment(), Environment::DEFAULT);
        }
    }

    #[test]
    fn custom_data_tables_are_used() {
        #[derive(Debug)]
        struct Brackets;

        impl DirectionalData for Brackets {
            fn mark(&self, direction: Direction, _visibility: MarkVisibility) -> Mark {
                match direction {
                    Direction::Rtl => Mark { open: '{', close: '}' },
                    _ => Mark { open: '[', close: ']' },
                }
            }
        }

        let expert = slash_expert(Environment::DEFAULT).with_data(Arc::new(Brackets));
        assert_eq!(expert.process(&format!("a/{HEB}")), format!("a/{{{HEB}}}"));
    }

    #[test]
    fn experts_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Expert>();
        assert_send_sync::<StatefulExpert>();
    }
}
