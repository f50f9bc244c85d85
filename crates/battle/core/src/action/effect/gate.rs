//! Continue gate.

/// A pure probability gate with no state mutation.
///
/// Placed ahead of an action's real effects, it lets the whole chain
/// proceed only when its hit roll succeeds: as lead effect, a miss
/// aborts the chain like any other missed lead effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinueEffect {
    pub hit_rate: u32,
}

impl ContinueEffect {
    pub fn new(hit_rate: u32) -> Self {
        Self { hit_rate }
    }
}
