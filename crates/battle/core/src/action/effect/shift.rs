//! Shared health-shift core for damage, healing, and the burn tick.

use super::{EffectContext, TargetSide};
use crate::combat::Power;
use crate::event::BattleEvent;
use crate::monster::MonsterId;
use crate::protection::ProtectionKind;

/// Direction of a health shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ShiftDirection {
    Damage,
    Heal,
}

/// True if a health shield on the recipient blocks this shift.
///
/// Only opponent-inflicted health loss is shielded; healing and
/// self-targeted shifts always pass. Emits the protection notice when
/// it blocks.
pub(super) fn blocked_by_health_shield(
    ctx: &mut EffectContext<'_>,
    side: TargetSide,
    direction: ShiftDirection,
    recipient: MonsterId,
) -> bool {
    if side.is_user() || direction == ShiftDirection::Heal {
        return false;
    }
    if ctx.monster(recipient).protection_kind() != Some(ProtectionKind::Health) {
        return false;
    }
    let monster = ctx.monster(recipient).name().to_owned();
    ctx.emit(BattleEvent::ProtectedFromDamage { monster });
    true
}

/// Computes the power magnitude and applies the shift, emitting the
/// damage/heal event and, when the recipient drops to zero, the faint
/// event.
pub(super) fn apply_shift(
    ctx: &mut EffectContext<'_>,
    recipient: MonsterId,
    power: &Power,
    direction: ShiftDirection,
    reason: Option<&'static str>,
) {
    let amount = power.amount(ctx, recipient);
    let delta = match direction {
        ShiftDirection::Damage => -i64::from(amount),
        ShiftDirection::Heal => i64::from(amount),
    };

    let monster = ctx.monster_mut(recipient);
    let was_fainted = monster.fainted();
    monster.shift_health(delta);
    let name = monster.name().to_owned();
    let fainted = !was_fainted && monster.fainted();

    let event = match direction {
        ShiftDirection::Damage => BattleEvent::Damaged {
            monster: name.clone(),
            amount,
            reason,
        },
        ShiftDirection::Heal => BattleEvent::Healed {
            monster: name.clone(),
            amount,
            reason,
        },
    };
    ctx.emit(event);

    if fainted {
        ctx.emit(BattleEvent::Fainted { monster: name });
    }
}

/// Constant effect draining the holder while burning.
///
/// Injected by condition processing, never authored in an action
/// definition. Always hits and ignores protections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BurnTickEffect;

impl BurnTickEffect {
    /// Fraction of maximum health lost per burning turn, in percent.
    const DRAIN_PERCENT: u32 = 10;

    const REASON: &'static str = "burning";

    pub(crate) fn apply(&self, ctx: &mut EffectContext<'_>) {
        let user = ctx.user;
        apply_shift(
            ctx,
            user,
            &Power::Relative(Self::DRAIN_PERCENT),
            ShiftDirection::Damage,
            Some(Self::REASON),
        );
    }
}
