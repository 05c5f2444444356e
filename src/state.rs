//! Directional context carried between calls on one text stream.

use crate::unicode::Direction;
use serde::{Deserialize, Serialize};

/// Snapshot of the directional context at the end of a `process` call.
///
/// Only [`StatefulExpert`](crate::StatefulExpert) reads or writes one. The
/// snapshot is plain data and can be persisted with serde and restored with
/// `set_state`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingState {
    /// Direction of the last strong character seen.
    pub last_strong: Direction,
    /// Explicit embeddings or isolates opened before the current call and not
    /// yet closed.
    pub open_depth: u32,
}

impl ProcessingState {
    #[must_use]
    pub const fn new(last_strong: Direction, open_depth: u32) -> Self {
        Self {
            last_strong,
            open_depth,
        }
    }

    /// Returns true for the initial `(Neutral, 0)` state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }
}
