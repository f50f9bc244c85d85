//! Status condition effect.

use super::{EffectContext, TargetSide};
use crate::condition::Condition;
use crate::event::BattleEvent;
use crate::monster::MonsterId;

/// Inflicts a status condition on the recipient.
///
/// A monster holds at most one condition, so the gate fails whenever
/// the recipient is already afflicted, regardless of the hit roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionEffect {
    pub hit_rate: u32,
    pub side: TargetSide,
    pub condition: Condition,
}

impl ConditionEffect {
    pub fn new(hit_rate: u32, side: TargetSide, condition: Condition) -> Self {
        Self {
            hit_rate,
            side,
            condition,
        }
    }

    pub(super) fn passes_gates(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) -> bool {
        ctx.monster(recipient).condition().is_none()
    }

    pub(super) fn apply(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) {
        let monster = ctx.monster_mut(recipient);
        monster.set_condition(self.condition);
        let name = monster.name().to_owned();
        ctx.emit(BattleEvent::ConditionSet {
            monster: name,
            condition: self.condition,
        });
    }
}
