//! Status conditions.
//!
//! A monster holds at most one condition at a time. A condition weakens
//! one stat (Sleep instead suppresses the whole action) and rolls a
//! fixed 1/3 chance to clear each time its holder takes a turn.

use crate::rng::RngSource;
use crate::stats::StatKind;

/// Status condition afflicting a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// Weakens DEF.
    Wet,
    /// Weakens ATK and burns health each turn.
    Burn,
    /// Weakens SPD.
    Quicksand,
    /// Suppresses the holder's action effects.
    Sleep,
}

/// Per-turn chance, in percent, that a condition clears.
const CLEAR_PROBABILITY: f64 = 100.0 / 3.0;

/// Multiplier a condition applies to its weakened stat.
const WEAKENED_FACTOR: f64 = 0.75;

impl Condition {
    /// Multiplier this condition applies to the given stat.
    pub fn stat_factor(self, kind: StatKind) -> f64 {
        let weakened = match self {
            Self::Wet => StatKind::Def,
            Self::Burn => StatKind::Atk,
            Self::Quicksand => StatKind::Spd,
            Self::Sleep => return 1.0,
        };
        if kind == weakened { WEAKENED_FACTOR } else { 1.0 }
    }

    /// Rolls the per-turn expiry trial. Returns true if the condition
    /// clears.
    pub(crate) fn rolls_clear(self, rng: &mut dyn RngSource) -> bool {
        rng.probability_percent(CLEAR_PROBABILITY)
    }

    pub(crate) fn onset_message(self, name: &str) -> String {
        match self {
            Self::Wet => format!("{name} becomes soaking wet!"),
            Self::Burn => format!("{name} caught on fire!"),
            Self::Quicksand => format!("{name} gets caught by quicksand!"),
            Self::Sleep => format!("{name} falls asleep!"),
        }
    }

    pub(crate) fn ongoing_message(self, name: &str) -> String {
        match self {
            Self::Wet => format!("{name} is soaking wet!"),
            Self::Burn => format!("{name} is burning!"),
            Self::Quicksand => format!("{name} is caught in quicksand!"),
            Self::Sleep => format!("{name} is asleep!"),
        }
    }

    pub(crate) fn cleared_message(self, name: &str) -> String {
        match self {
            Self::Wet => format!("{name} dried up!"),
            Self::Burn => format!("{name}'s burning has faded!"),
            Self::Quicksand => format!("{name} escaped the quicksand!"),
            Self::Sleep => format!("{name} woke up!"),
        }
    }
}
