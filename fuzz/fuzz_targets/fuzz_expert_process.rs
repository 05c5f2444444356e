//! Fuzz target for stateless mark insertion.
//!
//! Processes arbitrary text with every built-in policy and checks that the
//! lean text is recoverable whenever the input carries no marks of its own.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use structured_bidi::{Environment, Expert, MarkVisibility, Orientation, StructuredType};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    ty: u8,
    orientation: u8,
    visible: bool,
    mirroring: bool,
    text: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let ty = StructuredType::ALL[usize::from(input.ty) % StructuredType::ALL.len()];
    let orientation = match input.orientation % 3 {
        0 => Orientation::Ltr,
        1 => Orientation::Rtl,
        _ => Orientation::Contextual,
    };
    let marks = if input.visible {
        MarkVisibility::Visible
    } else {
        MarkVisibility::Invisible
    };
    let env = Environment::new(orientation)
        .with_marks(marks)
        .with_mirroring(input.mirroring);

    let expert = Expert::new(Arc::new(ty.policy()), Some(env));
    let full = expert.process(input.text);
    let offsets = expert.mark_offsets(input.text);
    assert!(offsets.iter().all(|&o| o <= input.text.len()));
    let _ = expert.text_direction(input.text);

    // Already-marked input cannot be restored exactly
    let clean = input.text.chars().all(|ch| {
        !matches!(ch, '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}')
            && !matches!(ch, '\u{25B6}' | '\u{25C0}' | '\u{25AA}')
    });
    if clean {
        assert_eq!(expert.full_to_lean(&full), input.text);
    }
});
