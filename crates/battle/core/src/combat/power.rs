//! Power strategies for damage and healing magnitudes.

use std::fmt;

use crate::action::effect::EffectContext;
use crate::element::Efficiency;
use crate::event::BattleEvent;
use crate::monster::MonsterId;
use crate::stats::StatKind;

/// Normalizes the nominal power scale of action definitions down to
/// damage-range magnitudes.
const NORMAL_FACTOR: f64 = 1.0 / 3.0;

/// Bonus multiplier when the user's own element matches the action's.
const SAME_ELEMENT_FACTOR: f64 = 1.5;

/// Multiplier applied on a successful critical-hit trial.
const CRITICAL_FACTOR: f64 = 2.0;

/// Lower bound of the multiplicative damage jitter.
const JITTER_MIN: f64 = 0.85;
/// Upper bound of the multiplicative damage jitter.
const JITTER_MAX: f64 = 1.0;

/// Strategy computing the magnitude of a health shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Power {
    /// A fixed magnitude.
    Absolute(u32),
    /// A percentage of the recipient's maximum health, rounded up.
    Relative(u32),
    /// Derived from the combatants' stats, elemental effectiveness, a
    /// critical-hit trial, the same-element bonus, and a random jitter.
    Basic(u32),
}

impl Power {
    /// Computes the magnitude of the shift against `recipient`.
    ///
    /// # Formula (Basic)
    ///
    /// ```text
    /// ceil(base × element × ATK(user)/DEF(recipient) × crit × same × jitter / 3)
    /// ```
    ///
    /// The critical-hit trial succeeds with probability
    /// `10^(-SPD(recipient)/SPD(user)) × 100` percent, so attackers that
    /// are fast relative to their target crit more often. The first
    /// stat-based evaluation in a queue also consumes the queue's
    /// one-shot effectiveness announcement.
    pub(crate) fn amount(&self, ctx: &mut EffectContext<'_>, recipient: MonsterId) -> u32 {
        match *self {
            Self::Absolute(value) => value,
            Self::Relative(percent) => {
                let max_health = ctx.monster(recipient).max_health();
                (f64::from(max_health) * f64::from(percent) / 100.0).ceil() as u32
            }
            Self::Basic(base) => {
                let (efficiency, status_factor, crit_probability, same_element_factor) = {
                    let user = ctx.user();
                    let recipient = ctx.monster(recipient);
                    let efficiency = ctx.action_element.efficiency(recipient.element());
                    let status_factor = user.effective_stat(StatKind::Atk)
                        / recipient.effective_stat(StatKind::Def);
                    let crit_probability = 10f64.powf(
                        -recipient.effective_stat(StatKind::Spd)
                            / user.effective_stat(StatKind::Spd),
                    ) * 100.0;
                    let same_element_factor = if user.element() == ctx.action_element {
                        SAME_ELEMENT_FACTOR
                    } else {
                        1.0
                    };
                    (efficiency, status_factor, crit_probability, same_element_factor)
                };

                if ctx.announce_efficiency {
                    ctx.announce_efficiency = false;
                    if efficiency != Efficiency::Normal {
                        ctx.events.push(BattleEvent::Effectiveness { efficiency });
                    }
                }

                let critical_factor = if ctx.rng.probability_percent(crit_probability) {
                    ctx.events.push(BattleEvent::CriticalHit);
                    CRITICAL_FACTOR
                } else {
                    1.0
                };
                let random_factor = ctx.rng.uniform(JITTER_MIN, JITTER_MAX);

                let raw = f64::from(base)
                    * efficiency.damage_scale()
                    * status_factor
                    * critical_factor
                    * same_element_factor
                    * random_factor
                    * NORMAL_FACTOR;
                raw.ceil().max(0.0) as u32
            }
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(value) => write!(f, "a{value}"),
            Self::Relative(value) => write!(f, "r{value}"),
            Self::Basic(value) => write!(f, "b{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::monster::{Monster, MonsterTemplate};
    use crate::rng::ScriptedRng;
    use std::rc::Rc;

    fn monster(name: &str, element: Element, max_health: u32, atk: u32, def: u32, spd: u32) -> Monster {
        Monster::new(
            Rc::new(MonsterTemplate::new(
                name,
                element,
                max_health,
                atk,
                def,
                spd,
                ["Strike"],
            )),
            1,
            false,
        )
    }

    fn eval(
        power: Power,
        action_element: Element,
        monsters: &mut [Monster],
        rng: &mut ScriptedRng,
    ) -> (u32, Vec<BattleEvent>) {
        let mut events = Vec::new();
        let mut ctx = EffectContext {
            monsters,
            user: MonsterId(0),
            target: Some(MonsterId(1)),
            action_element,
            rng,
            events: &mut events,
            announce_efficiency: true,
        };
        let amount = power.amount(&mut ctx, MonsterId(1));
        (amount, events)
    }

    #[test]
    fn absolute_power_is_the_raw_value() {
        let mut monsters = [
            monster("A", Element::Normal, 100, 10, 10, 10),
            monster("B", Element::Normal, 100, 10, 10, 10),
        ];
        let mut rng = ScriptedRng::constant(false);
        let (amount, _) = eval(Power::Absolute(42), Element::Normal, &mut monsters, &mut rng);
        assert_eq!(amount, 42);
    }

    #[test]
    fn relative_power_rounds_up_against_max_health() {
        let mut monsters = [
            monster("A", Element::Normal, 100, 10, 10, 10),
            monster("B", Element::Normal, 95, 10, 10, 10),
        ];
        let mut rng = ScriptedRng::constant(false);
        let (amount, _) = eval(Power::Relative(10), Element::Normal, &mut monsters, &mut rng);
        // ceil(95 * 10%) = 10
        assert_eq!(amount, 10);
    }

    #[test]
    fn basic_power_combines_the_factors() {
        let mut monsters = [
            monster("A", Element::Normal, 100, 20, 10, 10),
            monster("B", Element::Normal, 100, 10, 10, 10),
        ];
        // No crit, jitter falls back to 1.0.
        let mut rng = ScriptedRng::new([false]);
        let (amount, events) = eval(Power::Basic(50), Element::Normal, &mut monsters, &mut rng);
        // ceil(50 × 1 × (20/10) × 1 × 1 × 1 / 3) = ceil(33.33) = 34
        assert_eq!(amount, 34);
        assert!(events.is_empty());
    }

    #[test]
    fn same_element_and_effectiveness_multiply_in() {
        let mut monsters = [
            monster("A", Element::Water, 100, 10, 10, 10),
            monster("B", Element::Earth, 100, 10, 10, 10),
        ];
        let mut rng = ScriptedRng::new([false]);
        let (amount, events) = eval(Power::Basic(30), Element::Water, &mut monsters, &mut rng);
        // ceil(30 × 2 × 1 × 1 × 1.5 × 1 / 3) = 30
        assert_eq!(amount, 30);
        assert_eq!(
            events,
            vec![BattleEvent::Effectiveness {
                efficiency: Efficiency::Powerful
            }]
        );
    }

    #[test]
    fn critical_hit_doubles_and_announces() {
        let mut monsters = [
            monster("A", Element::Normal, 100, 10, 10, 10),
            monster("B", Element::Normal, 100, 10, 10, 10),
        ];
        let mut rng = ScriptedRng::new([true]);
        let (amount, events) = eval(Power::Basic(30), Element::Normal, &mut monsters, &mut rng);
        // ceil(30 × 2 / 3) = 20
        assert_eq!(amount, 20);
        assert_eq!(events, vec![BattleEvent::CriticalHit]);
    }

    #[test]
    fn display_uses_the_short_prefix_notation() {
        assert_eq!(Power::Absolute(50).to_string(), "a50");
        assert_eq!(Power::Relative(10).to_string(), "r10");
        assert_eq!(Power::Basic(70).to_string(), "b70");
    }
}
