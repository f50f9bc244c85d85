//! Built-in battle content.
//!
//! `battle-content` provides a ready-made [`Catalog`] of actions and
//! monster templates so frontends and tests have a roster to battle
//! with, without depending on any external configuration source. The
//! definitions cover the whole effect vocabulary: plain and stat-based
//! damage, healing, every status condition, stat scaling, both
//! protection kinds, repeats, and a continue gate.

use battle_core::{
    ActionDef, Catalog, Condition, ConditionEffect, ContinueEffect, Count, DamageEffect,
    EffectKind, Element, HealEffect, MonsterTemplate, Power, ProtectEffect, ProtectionKind,
    RepeatEffect, RepeatableKind, ScaleStatEffect, StatKind, TargetSide,
};

/// Builds the default catalog.
///
/// The content is validated on construction; building it cannot fail.
pub fn default_catalog() -> Catalog {
    Catalog::new(default_actions(), default_templates())
        .expect("built-in content must be consistent")
}

fn default_actions() -> Vec<ActionDef> {
    vec![
        ActionDef::new(
            "Tackle",
            Element::Normal,
            vec![EffectKind::Damage(DamageEffect::new(
                100,
                TargetSide::Target,
                Power::Basic(40),
            ))],
        ),
        ActionDef::new(
            "Hydroblast",
            Element::Water,
            vec![EffectKind::Damage(DamageEffect::new(
                90,
                TargetSide::Target,
                Power::Basic(70),
            ))],
        ),
        ActionDef::new(
            "Soak",
            Element::Water,
            vec![EffectKind::Condition(ConditionEffect::new(
                80,
                TargetSide::Target,
                Condition::Wet,
            ))],
        ),
        ActionDef::new(
            "Ignite",
            Element::Fire,
            vec![
                EffectKind::Damage(DamageEffect::new(
                    90,
                    TargetSide::Target,
                    Power::Basic(50),
                )),
                EffectKind::Condition(ConditionEffect::new(
                    70,
                    TargetSide::Target,
                    Condition::Burn,
                )),
            ],
        ),
        ActionDef::new(
            "Sandstorm",
            Element::Earth,
            vec![EffectKind::Repeat(RepeatEffect::new(
                Count::Random { min: 2, max: 4 },
                vec![RepeatableKind::Damage(DamageEffect::new(
                    90,
                    TargetSide::Target,
                    Power::Basic(25),
                ))],
            ))],
        ),
        ActionDef::new(
            "Quagmire",
            Element::Earth,
            vec![EffectKind::Condition(ConditionEffect::new(
                75,
                TargetSide::Target,
                Condition::Quicksand,
            ))],
        ),
        ActionDef::new(
            "Lullaby",
            Element::Normal,
            vec![EffectKind::Condition(ConditionEffect::new(
                70,
                TargetSide::Target,
                Condition::Sleep,
            ))],
        ),
        ActionDef::new(
            "Harden",
            Element::Normal,
            vec![EffectKind::ScaleStat(ScaleStatEffect::new(
                100,
                TargetSide::User,
                StatKind::Def,
                1,
            ))],
        ),
        ActionDef::new(
            "Intimidate",
            Element::Normal,
            vec![EffectKind::ScaleStat(ScaleStatEffect::new(
                90,
                TargetSide::Target,
                StatKind::Atk,
                -1,
            ))],
        ),
        ActionDef::new(
            "Bulwark",
            Element::Normal,
            vec![EffectKind::Protect(ProtectEffect::new(
                100,
                ProtectionKind::Health,
                Count::Value(2),
            ))],
        ),
        ActionDef::new(
            "Aegis",
            Element::Normal,
            vec![EffectKind::Protect(ProtectEffect::new(
                100,
                ProtectionKind::Stats,
                Count::Random { min: 1, max: 3 },
            ))],
        ),
        ActionDef::new(
            "Regenerate",
            Element::Normal,
            vec![EffectKind::Heal(HealEffect::new(
                100,
                TargetSide::User,
                Power::Relative(30),
            ))],
        ),
        ActionDef::new(
            "Gamble",
            Element::Normal,
            vec![
                EffectKind::Continue(ContinueEffect::new(50)),
                EffectKind::Damage(DamageEffect::new(
                    100,
                    TargetSide::Target,
                    Power::Absolute(60),
                )),
            ],
        ),
    ]
}

fn default_templates() -> Vec<MonsterTemplate> {
    vec![
        MonsterTemplate::new(
            "Gluvik",
            Element::Water,
            120,
            10,
            12,
            9,
            ["Hydroblast", "Soak", "Regenerate", "Aegis"],
        ),
        MonsterTemplate::new(
            "Fyrax",
            Element::Fire,
            100,
            14,
            8,
            12,
            ["Ignite", "Tackle", "Intimidate", "Gamble"],
        ),
        MonsterTemplate::new(
            "Terrodon",
            Element::Earth,
            140,
            11,
            14,
            6,
            ["Sandstorm", "Quagmire", "Harden", "Bulwark"],
        ),
        MonsterTemplate::new(
            "Wispling",
            Element::Normal,
            90,
            9,
            9,
            16,
            ["Tackle", "Lullaby", "Regenerate", "Intimidate"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{BattleEvent, Competition, ScriptedRng};

    #[test]
    fn built_in_catalog_is_consistent() {
        let catalog = default_catalog();
        assert_eq!(catalog.actions().count(), 13);
        assert_eq!(catalog.templates().count(), 4);
    }

    #[test]
    fn every_template_action_resolves() {
        let catalog = default_catalog();
        for template in catalog.templates() {
            for name in template.action_names() {
                assert!(catalog.action(name).is_some(), "missing action {name}");
            }
        }
    }

    #[test]
    fn a_first_round_plays_out() {
        let catalog = default_catalog();
        // Sub-certain trials succeed, crits and condition expiry rolls
        // fail, jitter pegs at 1.0.
        let rng = ScriptedRng::default().with_fallback(true);
        let mut competition =
            Competition::new(catalog, &["Fyrax", "Gluvik"], Box::new(rng)).unwrap();

        competition.select_action("Tackle", None).unwrap();
        competition.select_action("Soak", None).unwrap();
        assert_eq!(competition.rounds_resolved(), 1);

        // Fyrax (SPD 12) tackles before Gluvik (SPD 9) soaks.
        let gluvik = competition.find_participant("Gluvik").unwrap();
        assert!(gluvik.health() < gluvik.max_health());
        let fyrax = competition.find_participant("Fyrax").unwrap();
        assert_eq!(fyrax.status().to_string(), "WET");

        let events = competition.take_events();
        assert!(events.iter().any(|e| matches!(e, BattleEvent::Damaged { .. })));
        assert!(!competition.is_over());
    }
}
