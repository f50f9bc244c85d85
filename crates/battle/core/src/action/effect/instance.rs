//! Per-turn effect instances.
//!
//! An [`EffectInstance`] is one concrete, owned occurrence of an effect
//! inside an effect queue. The hit roll is cached on the instance
//! (`Option<bool>`) so a queue can test its lead effect and later apply
//! it without re-rolling; the cache lives and dies with the instance,
//! never shared between repeat clones.

use super::shift::BurnTickEffect;
use super::{
    ConditionEffect, ContinueEffect, DamageEffect, EffectContext, HealEffect, ProtectEffect,
    ScaleStatEffect, TargetSide,
};
use crate::combat::hit;

/// Runtime form of an effect: the definition leaf kinds plus the
/// burn tick, which only condition processing may inject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeEffect {
    Damage(DamageEffect),
    Heal(HealEffect),
    Condition(ConditionEffect),
    ScaleStat(ScaleStatEffect),
    Protect(ProtectEffect),
    Continue(ContinueEffect),
    BurnTick(BurnTickEffect),
}

impl RuntimeEffect {
    fn side(&self) -> TargetSide {
        match self {
            Self::Damage(e) => e.side,
            Self::Heal(e) => e.side,
            Self::Condition(e) => e.side,
            Self::ScaleStat(e) => e.side,
            Self::Protect(_) | Self::Continue(_) | Self::BurnTick(_) => TargetSide::User,
        }
    }

    fn hit_rate(&self) -> u32 {
        match self {
            Self::Damage(e) => e.hit_rate,
            Self::Heal(e) => e.hit_rate,
            Self::Condition(e) => e.hit_rate,
            Self::ScaleStat(e) => e.hit_rate,
            Self::Protect(e) => e.hit_rate,
            Self::Continue(e) => e.hit_rate,
            Self::BurnTick(_) => 0,
        }
    }

    /// Gate checks that precede the hit roll: standing protections and
    /// condition exclusivity. Emits the protection notice on a block.
    fn passes_gates(&self, ctx: &mut EffectContext<'_>) -> bool {
        let Some(recipient) = ctx.recipient(self.side()) else {
            // No recipient to gate on; the hit roll rejects the effect.
            return true;
        };
        match self {
            Self::Damage(e) => e.passes_gates(ctx, recipient),
            Self::Condition(e) => e.passes_gates(ctx, recipient),
            Self::ScaleStat(e) => e.passes_gates(ctx, recipient),
            Self::Heal(_) | Self::Protect(_) | Self::Continue(_) | Self::BurnTick(_) => true,
        }
    }

    /// Runs the hit trial.
    ///
    /// Deterministically false when the user has fainted, or when the
    /// effect is aimed at the opponent and the opponent has fainted or
    /// is absent.
    fn roll_hit(&self, ctx: &mut EffectContext<'_>) -> bool {
        if matches!(self, Self::BurnTick(_)) {
            return true;
        }
        let probability = {
            let user = ctx.user();
            if user.fainted() {
                return false;
            }
            match self.side() {
                TargetSide::User => hit::success_probability(self.hit_rate(), user, None),
                TargetSide::Target => {
                    let Some(target_id) = ctx.target else {
                        return false;
                    };
                    let target = ctx.monster(target_id);
                    if target.fainted() {
                        return false;
                    }
                    hit::success_probability(self.hit_rate(), user, Some(target))
                }
            }
        };
        ctx.rng.probability_percent(probability)
    }

    fn apply(&self, ctx: &mut EffectContext<'_>) {
        let Some(recipient) = ctx.recipient(self.side()) else {
            return;
        };
        match self {
            Self::Damage(e) => e.apply(ctx, recipient),
            Self::Heal(e) => e.apply(ctx, recipient),
            Self::Condition(e) => e.apply(ctx, recipient),
            Self::ScaleStat(e) => e.apply(ctx, recipient),
            Self::Protect(e) => e.apply(ctx),
            Self::Continue(_) => {}
            Self::BurnTick(e) => e.apply(ctx),
        }
    }
}

/// One owned occurrence of an effect in a queue, with its hit cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectInstance {
    kind: RuntimeEffect,
    cached_hit: Option<bool>,
}

impl EffectInstance {
    pub(crate) fn new(kind: RuntimeEffect) -> Self {
        Self {
            kind,
            cached_hit: None,
        }
    }

    pub(crate) fn burn_tick() -> Self {
        Self::new(RuntimeEffect::BurnTick(BurnTickEffect))
    }

    /// Hit test. The first call rolls and caches; later calls reuse the
    /// cached outcome.
    pub(crate) fn hits(&mut self, ctx: &mut EffectContext<'_>) -> bool {
        if let Some(cached) = self.cached_hit {
            return cached;
        }
        let hit = self.kind.roll_hit(ctx);
        self.cached_hit = Some(hit);
        hit
    }

    /// Full application gate: protections and exclusivity first, then
    /// the (cached) hit test.
    pub(crate) fn can_be_applied(&mut self, ctx: &mut EffectContext<'_>) -> bool {
        self.kind.passes_gates(ctx) && self.hits(ctx)
    }

    /// Applies the effect if its gate passes.
    pub(crate) fn apply(&mut self, ctx: &mut EffectContext<'_>) {
        if self.can_be_applied(ctx) {
            self.kind.apply(ctx);
        }
    }
}
