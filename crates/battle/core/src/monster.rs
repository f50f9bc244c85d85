//! Creature templates and live battle instances.
//!
//! A [`MonsterTemplate`] is immutable shared data produced by the
//! (external) content layer; a [`Monster`] is one live instance inside a
//! competition, owning everything that mutates during a battle: health,
//! stat scales, the active condition, and the active protection.

use std::rc::Rc;

use crate::condition::Condition;
use crate::element::Element;
use crate::protection::{Protection, ProtectionKind};
use crate::rng::RngSource;
use crate::stats::{ScaleSet, StatKind, scale_stat};

/// Base value used for the hit-chance stats, which templates do not
/// author.
const HIDDEN_STAT_BASE: u32 = 1;

/// Immutable creature definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    name: String,
    element: Element,
    max_health: u32,
    atk: u32,
    def: u32,
    spd: u32,
    actions: Vec<String>,
}

impl MonsterTemplate {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        max_health: u32,
        atk: u32,
        def: u32,
        spd: u32,
        actions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            max_health,
            atk,
            def,
            spd,
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Base value of a stat. The hit-chance stats PRC and AGL are not
    /// authored and default to 1.
    pub fn base_stat(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Atk => self.atk,
            StatKind::Def => self.def,
            StatKind::Spd => self.spd,
            StatKind::Prc | StatKind::Agl => HIDDEN_STAT_BASE,
        }
    }

    /// Names of the actions this creature may select.
    pub fn action_names(&self) -> &[String] {
        &self.actions
    }

    pub fn has_action(&self, action_name: &str) -> bool {
        self.actions.iter().any(|a| a == action_name)
    }
}

impl std::fmt::Display for MonsterTemplate {
    /// Roster-listing line with the authored numbers.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ELEMENT {}, HP {}, ATK {}, DEF {}, SPD {}",
            self.name, self.element, self.max_health, self.atk, self.def, self.spd
        )
    }
}

/// Identifies a participant within one competition's roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonsterId(pub(crate) usize);

impl MonsterId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Status label of a participant for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Fainted,
    Afflicted(Condition),
    Ok,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fainted => write!(f, "FAINTED"),
            Self::Afflicted(condition) => write!(f, "{condition}"),
            Self::Ok => write!(f, "OK"),
        }
    }
}

/// One stat row of a display snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatView {
    pub kind: StatKind,
    pub base: u32,
    pub scale: i8,
}

/// Read-only display snapshot of one participant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSnapshot {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub status: Status,
    pub stats: Vec<StatView>,
}

impl MonsterSnapshot {
    /// Remaining health as a fraction of the maximum, in [0, 1].
    pub fn health_fraction(&self) -> f64 {
        f64::from(self.health) / f64::from(self.max_health)
    }
}

impl std::fmt::Display for MonsterSnapshot {
    /// Stat-breakdown line; non-zero scales are annotated `(+n)`/`(-n)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HP {}/{}", self.health, self.max_health)?;
        for stat in &self.stats {
            write!(f, ", {} {}", stat.kind, stat.base)?;
            if stat.scale != 0 {
                write!(f, "({:+})", stat.scale)?;
            }
        }
        Ok(())
    }
}

/// A live creature instance in a battle.
#[derive(Clone, Debug)]
pub struct Monster {
    template: Rc<MonsterTemplate>,
    name: String,
    health: u32,
    scales: ScaleSet,
    condition: Option<Condition>,
    protection: Option<Protection>,
}

impl Monster {
    /// Instantiates a template at full health.
    ///
    /// `index` is the 1-based instance number for this template within
    /// the battle; when `tagged`, the display name carries a `#index`
    /// suffix to tell duplicates apart.
    pub(crate) fn new(template: Rc<MonsterTemplate>, index: u32, tagged: bool) -> Self {
        let name = if tagged {
            format!("{}#{index}", template.name())
        } else {
            template.name().to_owned()
        };
        let health = template.max_health();
        Self {
            template,
            name,
            health,
            scales: ScaleSet::new(),
            condition: None,
            protection: None,
        }
    }

    pub fn template(&self) -> &MonsterTemplate {
        &self.template
    }

    /// Display name, unique within the competition.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn element(&self) -> Element {
        self.template.element()
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.template.max_health()
    }

    pub fn fainted(&self) -> bool {
        self.health == 0
    }

    /// Effective value of a stat: base, scaled by the ladder, then by
    /// the active condition's multiplier.
    pub fn effective_stat(&self, kind: StatKind) -> f64 {
        let scaled = scale_stat(kind, self.template.base_stat(kind), self.scales.get(kind));
        let condition_factor = self.condition.map_or(1.0, |c| c.stat_factor(kind));
        scaled * condition_factor
    }

    /// Shifts health by `delta`, clamping to `[0, max_health]`.
    pub(crate) fn shift_health(&mut self, delta: i64) {
        let max = i64::from(self.template.max_health());
        self.health = (i64::from(self.health) + delta).clamp(0, max) as u32;
    }

    /// Shifts a stat scale, clamping to the ladder bounds.
    pub(crate) fn shift_scale(&mut self, kind: StatKind, delta: i8) {
        self.scales.shift(kind, delta);
    }

    pub fn scale(&self, kind: StatKind) -> i8 {
        self.scales.get(kind)
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }

    pub(crate) fn set_condition(&mut self, condition: Condition) {
        self.condition = Some(condition);
    }

    /// Runs the per-turn expiry trial of the active condition, if any.
    ///
    /// Returns the condition together with whether it cleared, so the
    /// caller can emit the matching event.
    pub(crate) fn step_condition(&mut self, rng: &mut dyn RngSource) -> Option<(Condition, bool)> {
        let condition = self.condition?;
        let cleared = condition.rolls_clear(rng);
        if cleared {
            self.condition = None;
        }
        Some((condition, cleared))
    }

    pub fn protection(&self) -> Option<&Protection> {
        self.protection.as_ref()
    }

    pub fn protection_kind(&self) -> Option<ProtectionKind> {
        self.protection.map(|p| p.kind())
    }

    /// Installs a protection, replacing any prior one.
    pub(crate) fn set_protection(&mut self, kind: ProtectionKind, duration: u32) {
        self.protection = Some(Protection::new(kind, duration));
    }

    /// Counts the active protection down one round. Returns true if it
    /// faded this step.
    pub(crate) fn step_protection(&mut self) -> bool {
        match self.protection.as_mut() {
            Some(protection) => {
                if protection.step() {
                    self.protection = None;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }

    /// Status label: `FAINTED`, the condition name, or `OK`.
    pub fn status(&self) -> Status {
        if self.fainted() {
            Status::Fainted
        } else if let Some(condition) = self.condition {
            Status::Afflicted(condition)
        } else {
            Status::Ok
        }
    }

    /// Read-only snapshot for display.
    pub fn snapshot(&self) -> MonsterSnapshot {
        MonsterSnapshot {
            name: self.name.clone(),
            health: self.health,
            max_health: self.max_health(),
            status: self.status(),
            stats: StatKind::ALL
                .iter()
                .map(|&kind| StatView {
                    kind,
                    base: self.template.base_stat(kind),
                    scale: self.scales.get(kind),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn template() -> Rc<MonsterTemplate> {
        Rc::new(MonsterTemplate::new(
            "Fyrox",
            Element::Fire,
            100,
            20,
            10,
            15,
            ["Scratch"],
        ))
    }

    #[test]
    fn health_shifts_clamp_at_both_bounds() {
        let mut monster = Monster::new(template(), 1, false);
        monster.shift_health(-250);
        assert_eq!(monster.health(), 0);
        assert!(monster.fainted());

        monster.shift_health(40);
        monster.shift_health(9999);
        assert_eq!(monster.health(), 100);
        assert!(!monster.fainted());
    }

    #[test]
    fn fainted_exactly_when_health_is_zero() {
        let mut monster = Monster::new(template(), 1, false);
        monster.shift_health(-99);
        assert!(!monster.fainted());
        monster.shift_health(-1);
        assert!(monster.fainted());
    }

    #[test]
    fn duplicate_instances_are_tagged_with_their_index() {
        let tpl = template();
        let first = Monster::new(Rc::clone(&tpl), 1, true);
        let second = Monster::new(Rc::clone(&tpl), 2, true);
        let solo = Monster::new(tpl, 1, false);
        assert_eq!(first.name(), "Fyrox#1");
        assert_eq!(second.name(), "Fyrox#2");
        assert_eq!(solo.name(), "Fyrox");
    }

    #[test]
    fn effective_stat_combines_scale_and_condition() {
        let mut monster = Monster::new(template(), 1, false);
        assert_eq!(monster.effective_stat(StatKind::Atk), 20.0);

        monster.shift_scale(StatKind::Atk, 1);
        assert_eq!(monster.effective_stat(StatKind::Atk), 30.0);

        monster.set_condition(Condition::Burn);
        assert_eq!(monster.effective_stat(StatKind::Atk), 22.5);
        // Burn leaves other stats alone.
        assert_eq!(monster.effective_stat(StatKind::Def), 10.0);
    }

    #[test]
    fn condition_step_clears_on_a_successful_trial() {
        let mut monster = Monster::new(template(), 1, false);
        monster.set_condition(Condition::Sleep);

        let mut rng = ScriptedRng::new([false, true]);
        assert_eq!(
            monster.step_condition(&mut rng),
            Some((Condition::Sleep, false))
        );
        assert_eq!(monster.condition(), Some(Condition::Sleep));

        assert_eq!(
            monster.step_condition(&mut rng),
            Some((Condition::Sleep, true))
        );
        assert_eq!(monster.condition(), None);
        assert_eq!(monster.step_condition(&mut rng), None);
    }

    #[test]
    fn status_label_prefers_fainted_over_condition() {
        let mut monster = Monster::new(template(), 1, false);
        assert_eq!(monster.status().to_string(), "OK");

        monster.set_condition(Condition::Quicksand);
        assert_eq!(monster.status().to_string(), "QUICKSAND");

        monster.shift_health(-(i64::from(monster.max_health())));
        assert_eq!(monster.status().to_string(), "FAINTED");
    }

    #[test]
    fn snapshot_reports_scales_and_health_fraction() {
        let mut monster = Monster::new(template(), 1, false);
        monster.shift_scale(StatKind::Spd, 2);
        monster.shift_health(-50);

        let snapshot = monster.snapshot();
        assert_eq!(snapshot.health_fraction(), 0.5);
        let spd = snapshot
            .stats
            .iter()
            .find(|s| s.kind == StatKind::Spd)
            .unwrap();
        assert_eq!((spd.base, spd.scale), (15, 2));
        assert_eq!(
            snapshot.to_string(),
            "HP 50/100, ATK 20, DEF 10, SPD 15(+2), PRC 1, AGL 1"
        );
    }

    #[test]
    fn template_listing_line() {
        assert_eq!(
            template().to_string(),
            "Fyrox: ELEMENT FIRE, HP 100, ATK 20, DEF 10, SPD 15"
        );
    }
}
