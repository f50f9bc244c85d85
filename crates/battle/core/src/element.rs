//! Elements and elemental effectiveness.
//!
//! Water, Fire, and Earth form a cycle: Water beats Earth, Earth beats
//! Fire, Fire beats Water. Normal sits outside the cycle with no
//! relations in either direction.

/// Elemental type of an action or a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Normal,
    Water,
    Fire,
    Earth,
}

impl Element {
    /// Effectiveness of an action of this element against a defender of
    /// the given element.
    pub fn efficiency(self, defender: Element) -> Efficiency {
        use Element::*;
        match (self, defender) {
            (Water, Earth) | (Earth, Fire) | (Fire, Water) => Efficiency::Powerful,
            (Earth, Water) | (Fire, Earth) | (Water, Fire) => Efficiency::Powerless,
            _ => Efficiency::Normal,
        }
    }
}

/// Effectiveness of one elemental interaction.
///
/// Carries the damage multiplier applied by stat-based power
/// calculations. The announcement for a non-neutral interaction is
/// emitted at most once per action queue; see the effect context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Efficiency {
    /// Standard effectiveness, no damage modification.
    Normal,
    /// Doubled damage.
    Powerful,
    /// Halved damage.
    Powerless,
}

impl Efficiency {
    /// Damage multiplier for this interaction.
    pub fn damage_scale(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Powerful => 2.0,
            Self::Powerless => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_powerful_in_one_direction() {
        assert_eq!(Element::Water.efficiency(Element::Earth), Efficiency::Powerful);
        assert_eq!(Element::Earth.efficiency(Element::Fire), Efficiency::Powerful);
        assert_eq!(Element::Fire.efficiency(Element::Water), Efficiency::Powerful);
    }

    #[test]
    fn cycle_is_powerless_in_the_other() {
        assert_eq!(Element::Water.efficiency(Element::Fire), Efficiency::Powerless);
        assert_eq!(Element::Earth.efficiency(Element::Water), Efficiency::Powerless);
        assert_eq!(Element::Fire.efficiency(Element::Earth), Efficiency::Powerless);
    }

    #[test]
    fn normal_has_no_relations() {
        for other in [Element::Normal, Element::Water, Element::Fire, Element::Earth] {
            assert_eq!(Element::Normal.efficiency(other), Efficiency::Normal);
            assert_eq!(other.efficiency(Element::Normal), Efficiency::Normal);
        }
    }

    #[test]
    fn same_element_is_neutral() {
        assert_eq!(Element::Water.efficiency(Element::Water), Efficiency::Normal);
    }

    #[test]
    fn damage_scales() {
        assert_eq!(Efficiency::Powerful.damage_scale(), 2.0);
        assert_eq!(Efficiency::Powerless.damage_scale(), 0.5);
        assert_eq!(Efficiency::Normal.damage_scale(), 1.0);
    }
}
