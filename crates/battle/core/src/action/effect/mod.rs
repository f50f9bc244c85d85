//! Action effect system.
//!
//! Effects are the building blocks of actions: an action is an ordered
//! list of effects interpreted against a (user, target) pair. The
//! module uses an enum + struct hybrid:
//!
//! - individual effect types are structs ([`DamageEffect`],
//!   [`ScaleStatEffect`], ...), each owning its gate and apply logic;
//! - [`EffectKind`] wraps them for storage inside action definitions
//!   and dispatches to the struct implementations;
//! - [`RepeatableKind`] is the subset that may nest inside a repeat
//!   node, so conditions, protections, and continue gates cannot be
//!   repeated by construction.
//!
//! At selection time definitions are expanded into owned
//! [`EffectInstance`]s. An instance caches its hit roll
//! (`Option<bool>`), scoped to that one clone: repeat expansion yields
//! fresh instances, so every repetition re-rolls independently.

mod context;
mod damage;
mod gate;
mod heal;
mod instance;
mod kinds;
mod protect;
mod scale;
mod shift;
mod status;

pub use context::EffectContext;
pub use damage::DamageEffect;
pub use gate::ContinueEffect;
pub use heal::HealEffect;
pub use instance::{EffectInstance, RuntimeEffect};
pub use kinds::{EffectKind, RepeatEffect, RepeatableKind};
pub use protect::ProtectEffect;
pub use scale::ScaleStatEffect;
pub use shift::BurnTickEffect;
pub use status::ConditionEffect;

/// Which side of a (user, target) pair an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSide {
    /// The acting monster itself.
    User,
    /// The other participant.
    Target,
}

impl TargetSide {
    /// True if the effect lands on the acting monster.
    pub fn is_user(self) -> bool {
        matches!(self, Self::User)
    }
}
