//! Guess scoring against the daily target.

use serde::{Deserialize, Serialize};

use crate::domain::dex::DexEntry;
use crate::domain::verdict::Verdict;

/// Verdicts for every displayed column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVerdicts {
    pub type1: Verdict,
    pub type2: Verdict,
    pub gen: Verdict,
    pub habitat: Verdict,
    pub color: Verdict,
    pub evolution: Verdict,
    pub height: Verdict,
    pub weight: Verdict,
}

/// Result of scoring one guess.
///
/// `is_correct` is decided by id equality alone; it is never derived from
/// the column verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub is_correct: bool,
    pub columns: ColumnVerdicts,
}

/// Score `guess` against `target` across all columns.
///
/// Both arguments must be resolved catalog entries; an unresolvable guess id
/// is the caller's lookup error and never reaches this function.
pub fn compare(target: &DexEntry, guess: &DexEntry) -> Comparison {
    Comparison {
        is_correct: guess.id == target.id,
        columns: ColumnVerdicts {
            type1: type_slot(0, guess, target),
            type2: type_slot(1, guess, target),
            gen: ordinal(guess.gen, target.gen),
            habitat: categorical(&guess.habitat, &target.habitat),
            color: categorical(&guess.color, &target.color),
            evolution: ordinal(guess.evolution_stage, target.evolution_stage),
            height: ordinal(guess.height_dm, target.height_dm),
            weight: ordinal(guess.weight_hg, target.weight_hg),
        },
    }
}

/// Plain equality column. Two "unknown" values compare equal; there is no
/// partial credit.
fn categorical(guess: &str, target: &str) -> Verdict {
    if guess == target {
        Verdict::Correct
    } else {
        Verdict::Absent
    }
}

/// Ternary ordinal comparison, not a distance metric.
fn ordinal<T: Ord>(guess: T, target: T) -> Verdict {
    match guess.cmp(&target) {
        std::cmp::Ordering::Equal => Verdict::Correct,
        std::cmp::Ordering::Greater => Verdict::Higher,
        std::cmp::Ordering::Less => Verdict::Lower,
    }
}

/// Type column at slot `p`: slot-sensitive but cross-slot-aware.
///
/// An empty guess slot matches an empty target slot; a filled guess slot
/// that misses its own slot still scores `Present` when the label occupies
/// the target's other slot.
fn type_slot(p: usize, guess: &DexEntry, target: &DexEntry) -> Verdict {
    match guess.type_at(p) {
        None => {
            if target.type_at(p).is_none() {
                Verdict::Correct
            } else {
                Verdict::Absent
            }
        }
        Some(g) => {
            if target.type_at(p) == Some(g) {
                Verdict::Correct
            } else if target.has_type(g) {
                Verdict::Present
            } else {
                Verdict::Absent
            }
        }
    }
}
