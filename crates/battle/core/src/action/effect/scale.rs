//! Stat scale effect.

use super::{EffectContext, TargetSide};
use crate::event::BattleEvent;
use crate::monster::MonsterId;
use crate::protection::ProtectionKind;
use crate::stats::StatKind;

/// Shifts a stat's scale on the recipient by a signed delta.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleStatEffect {
    pub hit_rate: u32,
    pub side: TargetSide,
    pub stat: StatKind,
    pub delta: i8,
}

impl ScaleStatEffect {
    pub fn new(hit_rate: u32, side: TargetSide, stat: StatKind, delta: i8) -> Self {
        Self {
            hit_rate,
            side,
            stat,
            delta,
        }
    }

    /// Stat shields block opponent-inflicted decreases only; buffs and
    /// self-targeted shifts pass.
    pub(super) fn passes_gates(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) -> bool {
        if self.side.is_user() || self.delta >= 0 {
            return true;
        }
        if ctx.monster(recipient).protection_kind() != Some(ProtectionKind::Stats) {
            return true;
        }
        let monster = ctx.monster(recipient).name().to_owned();
        ctx.emit(BattleEvent::ProtectedFromStatChange { monster });
        false
    }

    pub(super) fn apply(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) {
        let monster = ctx.monster_mut(recipient);
        monster.shift_scale(self.stat, self.delta);
        let name = monster.name().to_owned();
        let event = if self.delta < 0 {
            BattleEvent::StatFell {
                monster: name,
                stat: self.stat,
            }
        } else {
            BattleEvent::StatRose {
                monster: name,
                stat: self.stat,
            }
        };
        ctx.emit(event);
    }
}
