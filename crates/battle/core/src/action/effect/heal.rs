//! Heal effect.

use super::shift::{self, ShiftDirection};
use super::{EffectContext, TargetSide};
use crate::combat::Power;
use crate::monster::MonsterId;

/// Restores health to the recipient by the power's magnitude.
///
/// Never blocked by protections: shields only stop health loss.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealEffect {
    pub hit_rate: u32,
    pub side: TargetSide,
    pub power: Power,
}

impl HealEffect {
    pub fn new(hit_rate: u32, side: TargetSide, power: Power) -> Self {
        Self {
            hit_rate,
            side,
            power,
        }
    }

    pub(super) fn apply(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) {
        shift::apply_shift(ctx, recipient, &self.power, ShiftDirection::Heal, None);
    }
}
