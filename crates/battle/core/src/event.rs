//! Typed battle events.
//!
//! The engine performs no output of its own. Everything a player would
//! read scrolls out of the competition as [`BattleEvent`] values; the
//! `Display` impl renders the canonical battle text, and a frontend is
//! free to render the structured data differently instead.

use std::fmt;

use crate::condition::Condition;
use crate::element::Efficiency;
use crate::stats::StatKind;

/// One observable thing that happened during a battle.
///
/// Outbound only, hence serializable but not deserializable: events
/// describe what happened, they are never fed back in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BattleEvent {
    /// A competition started with the given number of participants.
    CompetitionStarted { participants: usize },
    /// A participant's queued action comes up for resolution.
    TurnStarted { monster: String },
    /// The participant uses a named action.
    ActionUsed { monster: String, action: String },
    /// The participant passes.
    Passed { monster: String },
    /// The lead effect of the action missed; the chain is abandoned.
    ActionFailed,
    /// Health was lost. `reason` names a constant-effect source such as
    /// burning.
    Damaged {
        monster: String,
        amount: u32,
        reason: Option<&'static str>,
    },
    /// Health was regained.
    Healed {
        monster: String,
        amount: u32,
        reason: Option<&'static str>,
    },
    /// Health reached zero.
    Fainted { monster: String },
    /// A health shield blocked the damage entirely.
    ProtectedFromDamage { monster: String },
    /// A stat shield blocked the decrease entirely.
    ProtectedFromStatChange { monster: String },
    /// A stat scale moved up.
    StatRose { monster: String, stat: StatKind },
    /// A stat scale moved down.
    StatFell { monster: String, stat: StatKind },
    /// A condition took hold.
    ConditionSet { monster: String, condition: Condition },
    /// A condition persisted through its expiry roll.
    ConditionOngoing { monster: String, condition: Condition },
    /// A condition cleared.
    ConditionCleared { monster: String, condition: Condition },
    /// A protection ran out.
    ProtectionFaded { monster: String },
    /// A stat-based power rolled a critical hit.
    CriticalHit,
    /// First elemental interaction of an action queue was non-neutral.
    Effectiveness { efficiency: Efficiency },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompetitionStarted { participants } => {
                write!(f, "The {participants} monsters enter the competition!")
            }
            Self::TurnStarted { monster } => write!(f, "It's {monster}'s turn."),
            Self::ActionUsed { monster, action } => write!(f, "{monster} uses {action}!"),
            Self::Passed { monster } => write!(f, "{monster} passes!"),
            Self::ActionFailed => write!(f, "The action failed..."),
            Self::Damaged {
                monster,
                amount,
                reason,
            } => match reason {
                Some(reason) => write!(f, "{monster} takes {amount} damage from {reason}!"),
                None => write!(f, "{monster} takes {amount} damage!"),
            },
            Self::Healed {
                monster,
                amount,
                reason,
            } => match reason {
                Some(reason) => write!(f, "{monster} gains back {amount} health from {reason}!"),
                None => write!(f, "{monster} gains back {amount} health!"),
            },
            Self::Fainted { monster } => write!(f, "{monster} faints!"),
            Self::ProtectedFromDamage { monster } => {
                write!(f, "{monster} is protected and takes no damage!")
            }
            Self::ProtectedFromStatChange { monster } => {
                write!(f, "{monster} is protected and is unaffected!")
            }
            Self::StatRose { monster, stat } => write!(f, "{monster}'s {stat} rises!"),
            Self::StatFell { monster, stat } => write!(f, "{monster}'s {stat} decreases..."),
            Self::ConditionSet { monster, condition } => {
                write!(f, "{}", condition.onset_message(monster))
            }
            Self::ConditionOngoing { monster, condition } => {
                write!(f, "{}", condition.ongoing_message(monster))
            }
            Self::ConditionCleared { monster, condition } => {
                write!(f, "{}", condition.cleared_message(monster))
            }
            Self::ProtectionFaded { monster } => {
                write!(f, "{monster}'s protection fades away...")
            }
            Self::CriticalHit => write!(f, "Critical hit!"),
            Self::Effectiveness { efficiency } => match efficiency {
                Efficiency::Powerful => write!(f, "It is very effective!"),
                Efficiency::Powerless => write!(f, "It is not very effective..."),
                Efficiency::Normal => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_canonical_battle_text() {
        let event = BattleEvent::Damaged {
            monster: "Fyrox".into(),
            amount: 12,
            reason: None,
        };
        assert_eq!(event.to_string(), "Fyrox takes 12 damage!");

        let event = BattleEvent::Damaged {
            monster: "Fyrox".into(),
            amount: 10,
            reason: Some("burning"),
        };
        assert_eq!(event.to_string(), "Fyrox takes 10 damage from burning!");

        let event = BattleEvent::ConditionCleared {
            monster: "Silvara".into(),
            condition: Condition::Sleep,
        };
        assert_eq!(event.to_string(), "Silvara woke up!");

        let event = BattleEvent::StatFell {
            monster: "Silvara".into(),
            stat: StatKind::Def,
        };
        assert_eq!(event.to_string(), "Silvara's DEF decreases...");
    }
}
