//! The turn scheduler.
//!
//! A [`Competition`] collects one action selection per living
//! participant per round, cycling through the roster in lineup order.
//! The instant the cyclic index wraps past its starting point the round
//! resolves: queues apply in descending effective-speed order (ties
//! keep selection order), then every surviving participant's
//! protection counts down in the same order. The competition is over
//! once at most one participant is left standing.
//!
//! A competition owns its roster, its pending queues, and its
//! randomness source exclusively; nothing is shared across battles.

use std::rc::Rc;

use crate::action::queue::EffectQueue;
use crate::catalog::Catalog;
use crate::error::{CatalogError, SelectionError};
use crate::event::BattleEvent;
use crate::monster::{Monster, MonsterId, MonsterSnapshot};
use crate::rng::RngSource;
use crate::stats::StatKind;

pub struct Competition {
    catalog: Catalog,
    monsters: Vec<Monster>,
    pending: Vec<EffectQueue>,
    current: usize,
    rounds_resolved: u32,
    rng: Box<dyn RngSource>,
    events: Vec<BattleEvent>,
}

impl core::fmt::Debug for Competition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Competition")
            .field("current", &self.current)
            .field("rounds_resolved", &self.rounds_resolved)
            .finish_non_exhaustive()
    }
}

impl Competition {
    /// Starts a competition between the named templates, in lineup
    /// order.
    ///
    /// Duplicate lineup entries are instantiated separately; their
    /// display names carry `#1`, `#2`, ... suffixes so each can be
    /// targeted unambiguously.
    pub fn new(
        catalog: Catalog,
        lineup: &[&str],
        rng: Box<dyn RngSource>,
    ) -> Result<Self, CatalogError> {
        let mut monsters = Vec::with_capacity(lineup.len());
        for (position, name) in lineup.iter().enumerate() {
            let template = catalog
                .template(name)
                .ok_or_else(|| CatalogError::UnknownTemplate((*name).to_owned()))?;
            let total = lineup.iter().filter(|n| *n == name).count();
            let index = lineup[..=position].iter().filter(|n| *n == name).count() as u32;
            monsters.push(Monster::new(Rc::clone(template), index, total > 1));
        }

        let events = vec![BattleEvent::CompetitionStarted {
            participants: monsters.len(),
        }];
        tracing::debug!(participants = monsters.len(), "competition started");

        Ok(Self {
            catalog,
            monsters,
            pending: Vec::new(),
            current: 0,
            rounds_resolved: 0,
            rng,
            events,
        })
    }

    /// Selects an action for the current participant.
    ///
    /// The empty action name selects the built-in pass action. On any
    /// error the selection is rejected and the scheduler state is left
    /// untouched; on success the turn index advances and, if this
    /// completed the round, the round resolves before the call
    /// returns.
    pub fn select_action(
        &mut self,
        action_name: &str,
        target_name: Option<&str>,
    ) -> Result<(), SelectionError> {
        if self.is_over() {
            return Err(SelectionError::CompetitionOver);
        }

        let action = self
            .catalog
            .action(action_name)
            .ok_or_else(|| SelectionError::UnknownAction(action_name.to_owned()))?;

        let user = MonsterId(self.current);
        let user_monster = &self.monsters[user.index()];
        if !action.is_pass() && !user_monster.template().has_action(action.name()) {
            return Err(SelectionError::ActionNotAllowed {
                monster: user_monster.name().to_owned(),
                action: action.name().to_owned(),
            });
        }

        let target = if action.needs_target() {
            Some(self.resolve_target(user, target_name)?)
        } else {
            None
        };

        tracing::debug!(
            user = %self.monsters[user.index()].name(),
            action = %action.name(),
            "action selected"
        );
        let queue = EffectQueue::new(user, target, &action, self.rng.as_mut());
        self.pending.push(queue);
        self.advance();
        Ok(())
    }

    /// Selects the pass action for the current participant.
    pub fn pass(&mut self) -> Result<(), SelectionError> {
        self.select_action("", None)
    }

    /// Picks the target: an explicit living participant by name, or
    /// the unique other living participant when no name is given.
    fn resolve_target(
        &self,
        user: MonsterId,
        target_name: Option<&str>,
    ) -> Result<MonsterId, SelectionError> {
        if let Some(name) = target_name {
            let id = self
                .find_id(name)
                .ok_or_else(|| SelectionError::MonsterNotFound(name.to_owned()))?;
            if self.monsters[id.index()].fainted() {
                return Err(SelectionError::TargetFainted(name.to_owned()));
            }
            return Ok(id);
        }

        let user_name = self.monsters[user.index()].name().to_owned();
        let mut candidates = self
            .monsters
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.fainted() && m.name() != user_name);
        match (candidates.next(), candidates.next()) {
            (Some((index, _)), None) => Ok(MonsterId(index)),
            _ => Err(SelectionError::TargetRequired),
        }
    }

    /// Moves the cyclic index to the next living participant and
    /// resolves the round when the index wraps.
    fn advance(&mut self) {
        let last = self.current;
        loop {
            self.current = (self.current + 1) % self.monsters.len();
            if !self.monsters[self.current].fainted() {
                break;
            }
        }
        if self.current <= last {
            self.resolve_round();
        }
    }

    /// Applies every pending queue in descending effective-speed order
    /// and then steps protections for the survivors in the same order.
    fn resolve_round(&mut self) {
        self.rounds_resolved += 1;
        tracing::debug!(
            round = self.rounds_resolved,
            selections = self.pending.len(),
            "resolving round"
        );

        // Order is locked in before any queue applies: speeds measured
        // now, ties keep selection order (stable sort).
        let mut queues: Vec<(f64, EffectQueue)> = std::mem::take(&mut self.pending)
            .into_iter()
            .map(|queue| {
                let speed = self.monsters[queue.user().index()].effective_stat(StatKind::Spd);
                (speed, queue)
            })
            .collect();
        queues.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        for (_, queue) in &mut queues {
            queue.apply(&mut self.monsters, self.rng.as_mut(), &mut self.events);
        }

        self.step_protections();

        // The resolution may have fainted the participant the index
        // had already moved to; skip ahead so the next selection is
        // collected from a living one.
        if !self.is_over() && self.monsters[self.current].fainted() {
            loop {
                self.current = (self.current + 1) % self.monsters.len();
                if !self.monsters[self.current].fainted() {
                    break;
                }
            }
        }
    }

    /// Counts down the protection of every still-alive participant, in
    /// descending effective-speed order.
    fn step_protections(&mut self) {
        let mut alive: Vec<usize> = (0..self.monsters.len())
            .filter(|&i| !self.monsters[i].fainted())
            .collect();
        alive.sort_by(|&a, &b| {
            self.monsters[b]
                .effective_stat(StatKind::Spd)
                .total_cmp(&self.monsters[a].effective_stat(StatKind::Spd))
        });

        for index in alive {
            if self.monsters[index].step_protection() {
                self.events.push(BattleEvent::ProtectionFaded {
                    monster: self.monsters[index].name().to_owned(),
                });
            }
        }
    }

    fn find_id(&self, name: &str) -> Option<MonsterId> {
        self.monsters
            .iter()
            .position(|m| m.name() == name)
            .map(MonsterId)
    }

    /// The participant whose selection is currently being collected.
    pub fn current_actor(&self) -> &Monster {
        &self.monsters[self.current]
    }

    /// All living participants, skipping the named ones.
    pub fn alive_participants(&self, except_names: &[&str]) -> Vec<&Monster> {
        self.monsters
            .iter()
            .filter(|m| !m.fainted() && !except_names.contains(&m.name()))
            .collect()
    }

    pub fn find_participant(&self, name: &str) -> Result<&Monster, SelectionError> {
        self.find_id(name)
            .map(|id| &self.monsters[id.index()])
            .ok_or_else(|| SelectionError::MonsterNotFound(name.to_owned()))
    }

    /// All participants in lineup order, fainted ones included.
    pub fn participants(&self) -> &[Monster] {
        &self.monsters
    }

    /// Display snapshots in lineup order.
    pub fn snapshots(&self) -> Vec<MonsterSnapshot> {
        self.monsters.iter().map(Monster::snapshot).collect()
    }

    /// Number of fully resolved rounds.
    pub fn rounds_resolved(&self) -> u32 {
        self.rounds_resolved
    }

    /// True once at most one participant is alive.
    pub fn is_over(&self) -> bool {
        self.monsters.iter().filter(|m| !m.fainted()).count() <= 1
    }

    /// The last monster standing, if the competition is over and one
    /// survived.
    pub fn winner(&self) -> Option<&Monster> {
        if !self.is_over() {
            return None;
        }
        self.monsters.iter().find(|m| !m.fainted())
    }

    /// Drains the events accumulated since the previous call.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }
}
