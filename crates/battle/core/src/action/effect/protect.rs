//! Protect effect.

use super::EffectContext;
use crate::action::Count;
use crate::protection::ProtectionKind;

/// Installs a timed shield on the user, replacing any prior one.
///
/// Always self-targeted. The duration count is drawn when the effect
/// applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectEffect {
    pub hit_rate: u32,
    pub kind: ProtectionKind,
    pub duration: Count,
}

impl ProtectEffect {
    pub fn new(hit_rate: u32, kind: ProtectionKind, duration: Count) -> Self {
        Self {
            hit_rate,
            kind,
            duration,
        }
    }

    pub(super) fn apply(&self, ctx: &mut EffectContext<'_>) {
        let duration = self.duration.resolve(ctx.rng);
        let user = ctx.user;
        ctx.monster_mut(user).set_protection(self.kind, duration);
    }
}
