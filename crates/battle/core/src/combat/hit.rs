//! Hit chance calculations.

use crate::monster::Monster;
use crate::rng::RngSource;
use crate::stats::StatKind;

/// Success probability of an effect, in percent.
///
/// # Formula
///
/// ```text
/// probability = hit_rate × PRC(user) / AGL(target)
/// ```
///
/// The AGL divisor models the target's evasion and only applies when
/// the effect is aimed at the opponent; self-targeted effects divide by
/// one. Values of 100 or more always succeed at the probability source.
pub fn success_probability(hit_rate: u32, user: &Monster, evading_target: Option<&Monster>) -> f64 {
    let precision = user.effective_stat(StatKind::Prc);
    let agility = evading_target.map_or(1.0, |target| target.effective_stat(StatKind::Agl));
    f64::from(hit_rate) * precision / agility
}

/// Runs the hit trial for an effect.
pub fn check_hit(
    hit_rate: u32,
    user: &Monster,
    evading_target: Option<&Monster>,
    rng: &mut dyn RngSource,
) -> bool {
    rng.probability_percent(success_probability(hit_rate, user, evading_target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::monster::MonsterTemplate;
    use std::rc::Rc;

    fn monster() -> Monster {
        Monster::new(
            Rc::new(MonsterTemplate::new(
                "Tester",
                Element::Normal,
                50,
                10,
                10,
                10,
                ["Hit"],
            )),
            1,
            false,
        )
    }

    #[test]
    fn self_targeted_effects_keep_the_raw_hit_rate() {
        let user = monster();
        assert_eq!(success_probability(90, &user, None), 90.0);
    }

    #[test]
    fn target_agility_divides_the_probability() {
        let user = monster();
        let mut target = monster();
        // AGL +3 with factor 3 doubles agility.
        target.shift_scale(StatKind::Agl, 3);
        assert!((success_probability(100, &user, Some(&target)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn user_precision_multiplies_the_probability() {
        let mut user = monster();
        user.shift_scale(StatKind::Prc, 3);
        let target = monster();
        assert!((success_probability(60, &user, Some(&target)) - 120.0).abs() < 1e-9);
    }
}
