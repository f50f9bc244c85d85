//! Damage effect.

use super::shift::{self, ShiftDirection};
use super::{EffectContext, TargetSide};
use crate::combat::Power;
use crate::monster::MonsterId;

/// Reduces the recipient's health by the power's magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageEffect {
    pub hit_rate: u32,
    pub side: TargetSide,
    pub power: Power,
}

impl DamageEffect {
    pub fn new(hit_rate: u32, side: TargetSide, power: Power) -> Self {
        Self {
            hit_rate,
            side,
            power,
        }
    }

    /// Health shields block opponent-inflicted damage.
    pub(super) fn passes_gates(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) -> bool {
        !shift::blocked_by_health_shield(ctx, self.side, ShiftDirection::Damage, recipient)
    }

    pub(super) fn apply(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) {
        shift::apply_shift(ctx, recipient, &self.power, ShiftDirection::Damage, None);
    }
}
