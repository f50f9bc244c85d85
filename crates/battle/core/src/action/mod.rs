//! Action definitions and their per-turn resolution.
//!
//! An [`ActionDef`] is an immutable named move: an element plus an
//! ordered effect list. Selecting it for a (user, target) pair resolves
//! it into an [`queue::EffectQueue`] of owned effect instances.

pub mod effect;
pub mod queue;

use std::fmt;

use crate::element::Element;
use crate::rng::RngSource;
use effect::EffectKind;

/// Fixed or uniformly random count used for repeat counts and
/// protection durations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Count {
    /// A fixed value.
    Value(u32),
    /// Drawn uniformly from `[min, max]` inclusive.
    Random { min: u32, max: u32 },
}

impl Count {
    /// Resolves the count, drawing from the source only for random
    /// counts.
    pub fn resolve(&self, rng: &mut dyn RngSource) -> u32 {
        match *self {
            Self::Value(value) => value,
            Self::Random { min, max } => rng.uniform_int(min as i32, max as i32).max(0) as u32,
        }
    }
}

/// A named, data-defined battle move.
///
/// The empty name is reserved for the canonical pass action; every
/// other definition comes out of the catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDef {
    name: String,
    element: Element,
    effects: Vec<EffectKind>,
    needs_target: bool,
}

impl ActionDef {
    pub fn new(name: impl Into<String>, element: Element, effects: Vec<EffectKind>) -> Self {
        let needs_target = effects.iter().any(EffectKind::needs_target);
        Self {
            name: name.into(),
            element,
            effects,
            needs_target,
        }
    }

    /// The canonical pass action: no name, no effects, no element
    /// relations.
    pub fn pass() -> Self {
        Self::new("", Element::Normal, Vec::new())
    }

    pub fn is_pass(&self) -> bool {
        self.name.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn effects(&self) -> &[EffectKind] {
        &self.effects
    }

    /// True if any contained effect, recursively through repeat nodes,
    /// lands on the other participant. Derived once at construction.
    pub fn needs_target(&self) -> bool {
        self.needs_target
    }
}

impl fmt::Display for ActionDef {
    /// Action-listing line: name, element, damage powers, and the lead
    /// effect's hit rate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let damages: Vec<String> = self
            .effects
            .iter()
            .filter_map(EffectKind::display_power)
            .map(ToString::to_string)
            .collect();
        let damage = if damages.is_empty() {
            "--".to_owned()
        } else {
            damages.join(",")
        };
        let hit_rate = self
            .effects
            .first()
            .map_or_else(|| "--".to_owned(), |e| e.hit_rate().to_string());
        write!(
            f,
            "{}: ELEMENT {}, Damage {}, HitRate {}",
            self.name, self.element, damage, hit_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Power;
    use crate::rng::ScriptedRng;
    use super::effect::{ContinueEffect, DamageEffect, TargetSide};

    #[test]
    fn needs_target_is_derived_from_the_effects() {
        let aimed = ActionDef::new(
            "Strike",
            Element::Normal,
            vec![EffectKind::Damage(DamageEffect::new(
                100,
                TargetSide::Target,
                Power::Basic(50),
            ))],
        );
        assert!(aimed.needs_target());

        let introspective = ActionDef::new(
            "Focus",
            Element::Normal,
            vec![EffectKind::Continue(ContinueEffect::new(80))],
        );
        assert!(!introspective.needs_target());
    }

    #[test]
    fn pass_is_the_empty_action() {
        let pass = ActionDef::pass();
        assert!(pass.is_pass());
        assert!(!pass.needs_target());
        assert!(pass.effects().is_empty());
        assert_eq!(pass.element(), Element::Normal);
    }

    #[test]
    fn counts_resolve_fixed_and_random_values() {
        let mut rng = ScriptedRng::default().with_ints([3]);
        assert_eq!(Count::Value(5).resolve(&mut rng), 5);
        assert_eq!(Count::Random { min: 2, max: 6 }.resolve(&mut rng), 3);
    }

    #[test]
    fn listing_line_shows_powers_and_lead_hit_rate() {
        let action = ActionDef::new(
            "Scratch",
            Element::Fire,
            vec![EffectKind::Damage(DamageEffect::new(
                90,
                TargetSide::Target,
                Power::Basic(70),
            ))],
        );
        assert_eq!(
            action.to_string(),
            "Scratch: ELEMENT FIRE, Damage b70, HitRate 90"
        );

        let idle = ActionDef::new("Rest", Element::Normal, Vec::new());
        assert_eq!(idle.to_string(), "Rest: ELEMENT NORMAL, Damage --, HitRate --");
    }
}
