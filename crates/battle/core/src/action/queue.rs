//! Per-turn effect queues.
//!
//! An [`EffectQueue`] is the resolved form of one participant's chosen
//! action for the current round: the expanded action effects (subject
//! to the chain-abort rule) and the constant effects injected by
//! condition processing (always applied). It is created when the
//! participant selects and consumed when the round resolves.

use super::ActionDef;
use super::effect::{EffectContext, EffectInstance};
use crate::condition::Condition;
use crate::event::BattleEvent;
use crate::monster::{Monster, MonsterId};
use crate::rng::RngSource;

pub struct EffectQueue {
    user: MonsterId,
    target: Option<MonsterId>,
    action: ActionDef,
    action_effects: Vec<EffectInstance>,
    constant_effects: Vec<EffectInstance>,
}

impl EffectQueue {
    /// Resolves an action for a (user, target) pair.
    ///
    /// Expansion happens here: repeat counts are drawn and every effect
    /// becomes an owned instance with a fresh hit cache.
    pub(crate) fn new(
        user: MonsterId,
        target: Option<MonsterId>,
        action: &ActionDef,
        rng: &mut dyn RngSource,
    ) -> Self {
        let action_effects = action
            .effects()
            .iter()
            .flat_map(|effect| effect.expand(rng))
            .collect();
        Self {
            user,
            target,
            action: action.clone(),
            action_effects,
            constant_effects: Vec::new(),
        }
    }

    pub(crate) fn user(&self) -> MonsterId {
        self.user
    }

    /// Applies the queue against the roster.
    ///
    /// Order of business:
    /// 1. a user that fainted since selection does nothing at all;
    /// 2. the user's condition rolls its expiry; while asleep the
    ///    action effects are wiped, while burning a burn tick joins the
    ///    constant effects;
    /// 3. the lead action effect's hit test gates the whole chain;
    ///    on a miss the remaining action effects are abandoned;
    /// 4. surviving action effects apply in order, each re-checking
    ///    its own gate;
    /// 5. constant effects always apply.
    pub(crate) fn apply(
        &mut self,
        monsters: &mut [Monster],
        rng: &mut dyn RngSource,
        events: &mut Vec<BattleEvent>,
    ) {
        let user = self.user;
        if monsters[user.index()].fainted() {
            return;
        }

        let user_name = monsters[user.index()].name().to_owned();
        events.push(BattleEvent::TurnStarted {
            monster: user_name.clone(),
        });

        self.process_condition(monsters, rng, events);

        if self.action.is_pass() {
            events.push(BattleEvent::Passed {
                monster: user_name.clone(),
            });
        } else {
            events.push(BattleEvent::ActionUsed {
                monster: user_name.clone(),
                action: self.action.name().to_owned(),
            });
        }

        tracing::trace!(
            user = %user_name,
            action = %self.action.name(),
            effects = self.action_effects.len(),
            "applying effect queue"
        );

        let mut ctx = EffectContext {
            monsters,
            user,
            target: self.target,
            action_element: self.action.element(),
            rng,
            events,
            announce_efficiency: true,
        };

        if let Some((first, rest)) = self.action_effects.split_first_mut() {
            if first.hits(&mut ctx) {
                first.apply(&mut ctx);
                for instance in rest {
                    instance.apply(&mut ctx);
                }
            } else {
                ctx.emit(BattleEvent::ActionFailed);
            }
        }

        for instance in &mut self.constant_effects {
            instance.apply(&mut ctx);
        }
    }

    /// Steps the user's condition and translates what remains into
    /// queue adjustments.
    fn process_condition(
        &mut self,
        monsters: &mut [Monster],
        rng: &mut dyn RngSource,
        events: &mut Vec<BattleEvent>,
    ) {
        let user = &mut monsters[self.user.index()];
        let name = user.name().to_owned();
        if let Some((condition, cleared)) = user.step_condition(rng) {
            let event = if cleared {
                BattleEvent::ConditionCleared {
                    monster: name,
                    condition,
                }
            } else {
                BattleEvent::ConditionOngoing {
                    monster: name,
                    condition,
                }
            };
            events.push(event);
        }
        match user.condition() {
            Some(Condition::Sleep) => self.action_effects.clear(),
            Some(Condition::Burn) => self.constant_effects.push(EffectInstance::burn_tick()),
            _ => {}
        }
    }
}
