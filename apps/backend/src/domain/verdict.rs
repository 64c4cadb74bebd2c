//! Per-column comparison outcomes.

use serde::{Deserialize, Serialize};

/// Verdict for one attribute column of a scored guess.
///
/// Ordinal columns use `Higher`/`Lower` relative to the guess: `Higher`
/// means the guessed value is above the target's, so the UI renders a
/// "go lower" cue (and `Lower` the opposite). This convention is fixed;
/// renderers must not invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Present,
    Absent,
    Higher,
    Lower,
}

impl Verdict {
    /// Exact match on this column.
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}
