//! Shared mutable context for effect application.

use super::TargetSide;
use crate::element::Element;
use crate::event::BattleEvent;
use crate::monster::{Monster, MonsterId};
use crate::rng::RngSource;

/// Everything an effect needs while it resolves: the roster, the acting
/// pair, the action's element, the randomness source, and the event
/// sink.
///
/// `announce_efficiency` is the queue's one-shot flag: set before the
/// first action effect resolves and consumed by the first stat-based
/// power evaluation, so secondary and repeated effects stay silent
/// about elemental effectiveness.
pub struct EffectContext<'a> {
    pub(crate) monsters: &'a mut [Monster],
    pub(crate) user: MonsterId,
    pub(crate) target: Option<MonsterId>,
    pub(crate) action_element: Element,
    pub(crate) rng: &'a mut dyn RngSource,
    pub(crate) events: &'a mut Vec<BattleEvent>,
    pub(crate) announce_efficiency: bool,
}

impl EffectContext<'_> {
    pub(crate) fn monster(&self, id: MonsterId) -> &Monster {
        &self.monsters[id.index()]
    }

    pub(crate) fn monster_mut(&mut self, id: MonsterId) -> &mut Monster {
        &mut self.monsters[id.index()]
    }

    pub(crate) fn user(&self) -> &Monster {
        self.monster(self.user)
    }

    /// Participant an effect with the given side lands on. `None` when
    /// the effect is opponent-targeted but the queue has no target.
    pub(crate) fn recipient(&self, side: TargetSide) -> Option<MonsterId> {
        match side {
            TargetSide::User => Some(self.user),
            TargetSide::Target => self.target,
        }
    }

    pub(crate) fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }
}
