//! Effect kind enums and definition-time dispatch.
//!
//! [`EffectKind`] is the closed set of effects an action definition may
//! contain. Repeat nodes nest [`RepeatableKind`], a strict subset, so a
//! definition that would repeat a condition, protection, or continue
//! gate cannot be represented at all.

use super::instance::{EffectInstance, RuntimeEffect};
use super::{
    ConditionEffect, ContinueEffect, DamageEffect, HealEffect, ProtectEffect, ScaleStatEffect,
};
use crate::action::Count;
use crate::combat::Power;
use crate::rng::RngSource;

/// Effect kinds allowed inside a repeat node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepeatableKind {
    Damage(DamageEffect),
    Heal(HealEffect),
    ScaleStat(ScaleStatEffect),
}

impl RepeatableKind {
    fn needs_target(&self) -> bool {
        match self {
            Self::Damage(e) => !e.side.is_user(),
            Self::Heal(e) => !e.side.is_user(),
            Self::ScaleStat(e) => !e.side.is_user(),
        }
    }

    fn hit_rate(&self) -> u32 {
        match self {
            Self::Damage(e) => e.hit_rate,
            Self::Heal(e) => e.hit_rate,
            Self::ScaleStat(e) => e.hit_rate,
        }
    }

    fn display_power(&self) -> Option<&Power> {
        match self {
            Self::Damage(e) => Some(&e.power),
            Self::Heal(_) | Self::ScaleStat(_) => None,
        }
    }

    fn to_runtime(&self) -> RuntimeEffect {
        match self {
            Self::Damage(e) => RuntimeEffect::Damage(e.clone()),
            Self::Heal(e) => RuntimeEffect::Heal(e.clone()),
            Self::ScaleStat(e) => RuntimeEffect::ScaleStat(e.clone()),
        }
    }
}

/// A repeat node: its nested effects are expanded `count` times.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepeatEffect {
    pub count: Count,
    pub effects: Vec<RepeatableKind>,
}

impl RepeatEffect {
    pub fn new(count: Count, effects: Vec<RepeatableKind>) -> Self {
        Self { count, effects }
    }
}

/// One typed effect inside an action definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage(DamageEffect),
    Heal(HealEffect),
    Condition(ConditionEffect),
    ScaleStat(ScaleStatEffect),
    Protect(ProtectEffect),
    Continue(ContinueEffect),
    Repeat(RepeatEffect),
}

impl EffectKind {
    /// True if this effect (recursively, through repeat nodes) lands on
    /// the other participant.
    pub fn needs_target(&self) -> bool {
        match self {
            Self::Damage(e) => !e.side.is_user(),
            Self::Heal(e) => !e.side.is_user(),
            Self::Condition(e) => !e.side.is_user(),
            Self::ScaleStat(e) => !e.side.is_user(),
            Self::Protect(_) | Self::Continue(_) => false,
            Self::Repeat(repeat) => repeat.effects.iter().any(RepeatableKind::needs_target),
        }
    }

    /// Hit rate shown in action listings. Repeat nodes report their
    /// first nested effect's rate.
    pub fn hit_rate(&self) -> u32 {
        match self {
            Self::Damage(e) => e.hit_rate,
            Self::Heal(e) => e.hit_rate,
            Self::Condition(e) => e.hit_rate,
            Self::ScaleStat(e) => e.hit_rate,
            Self::Protect(e) => e.hit_rate,
            Self::Continue(e) => e.hit_rate,
            Self::Repeat(repeat) => repeat.effects.first().map_or(0, RepeatableKind::hit_rate),
        }
    }

    /// Power shown in action listings, taken from damage effects only,
    /// recursing into repeat nodes.
    pub fn display_power(&self) -> Option<&Power> {
        match self {
            Self::Damage(e) => Some(&e.power),
            Self::Repeat(repeat) => repeat.effects.iter().find_map(RepeatableKind::display_power),
            _ => None,
        }
    }

    /// Expands this definition into owned per-turn instances.
    ///
    /// Leaf kinds yield one instance. Repeat nodes draw their count and
    /// yield that many copies of the nested list; each copy is a fresh
    /// instance with its own hit cache, so repetitions roll
    /// independently.
    pub(crate) fn expand(&self, rng: &mut dyn RngSource) -> Vec<EffectInstance> {
        match self {
            Self::Damage(e) => vec![EffectInstance::new(RuntimeEffect::Damage(e.clone()))],
            Self::Heal(e) => vec![EffectInstance::new(RuntimeEffect::Heal(e.clone()))],
            Self::Condition(e) => vec![EffectInstance::new(RuntimeEffect::Condition(e.clone()))],
            Self::ScaleStat(e) => vec![EffectInstance::new(RuntimeEffect::ScaleStat(e.clone()))],
            Self::Protect(e) => vec![EffectInstance::new(RuntimeEffect::Protect(e.clone()))],
            Self::Continue(e) => vec![EffectInstance::new(RuntimeEffect::Continue(e.clone()))],
            Self::Repeat(repeat) => {
                let count = repeat.count.resolve(rng);
                let mut instances = Vec::with_capacity(repeat.effects.len() * count as usize);
                for _ in 0..count {
                    for effect in &repeat.effects {
                        instances.push(EffectInstance::new(effect.to_runtime()));
                    }
                }
                instances
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::effect::TargetSide;
    use crate::rng::ScriptedRng;

    fn target_damage(power: u32) -> DamageEffect {
        DamageEffect::new(100, TargetSide::Target, Power::Absolute(power))
    }

    #[test]
    fn needs_target_recurses_through_repeat() {
        let self_only = EffectKind::Repeat(RepeatEffect::new(
            Count::Value(2),
            vec![RepeatableKind::Heal(HealEffect::new(
                100,
                TargetSide::User,
                Power::Relative(20),
            ))],
        ));
        assert!(!self_only.needs_target());

        let aimed = EffectKind::Repeat(RepeatEffect::new(
            Count::Value(2),
            vec![RepeatableKind::Damage(target_damage(10))],
        ));
        assert!(aimed.needs_target());
    }

    #[test]
    fn repeat_expansion_draws_its_count() {
        let kind = EffectKind::Repeat(RepeatEffect::new(
            Count::Random { min: 2, max: 5 },
            vec![RepeatableKind::Damage(target_damage(10))],
        ));
        let mut rng = ScriptedRng::default().with_ints([4]);
        assert_eq!(kind.expand(&mut rng).len(), 4);
    }

    #[test]
    fn fixed_count_expansion_needs_no_draw() {
        let kind = EffectKind::Repeat(RepeatEffect::new(
            Count::Value(3),
            vec![RepeatableKind::Damage(target_damage(10))],
        ));
        let mut rng = ScriptedRng::default();
        assert_eq!(kind.expand(&mut rng).len(), 3);
    }

    #[test]
    fn display_power_surfaces_nested_damage() {
        let kind = EffectKind::Repeat(RepeatEffect::new(
            Count::Value(2),
            vec![RepeatableKind::Damage(target_damage(35))],
        ));
        assert_eq!(kind.display_power(), Some(&Power::Absolute(35)));
        assert_eq!(kind.hit_rate(), 100);

        let gate = EffectKind::Continue(ContinueEffect::new(70));
        assert_eq!(gate.display_power(), None);
    }
}
