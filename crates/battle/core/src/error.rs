//! Error types.
//!
//! Two concerns fail in recoverable ways: selecting an action for the
//! current participant, and assembling a catalog from externally
//! produced definitions. Everything else is normal control flow (a
//! missed hit roll is a branch, not an error) or is made impossible by
//! construction (clamped health and scales, the closed effect types).

/// Recoverable failure while selecting an action.
///
/// A rejected selection leaves the competition untouched: the turn
/// index does not advance and nothing is queued.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectionError {
    /// The action targets another monster but none could be determined.
    #[error("this action needs a target monster")]
    TargetRequired,

    /// The named monster is not part of this competition.
    #[error("monster {0} wasn't found")]
    MonsterNotFound(String),

    /// The named target has already fainted.
    #[error("monster {0} has already fainted")]
    TargetFainted(String),

    /// No action with this name exists in the catalog.
    #[error("action {0} wasn't found")]
    UnknownAction(String),

    /// The acting monster's template does not list this action.
    #[error("{monster} doesn't know the action {action}")]
    ActionNotAllowed { monster: String, action: String },

    /// The competition already has a winner; no further selections are
    /// accepted.
    #[error("the competition is already over")]
    CompetitionOver,
}

/// Consistency failure while assembling a [`crate::Catalog`].
///
/// Surfaced before any battle starts; a catalog that constructs
/// successfully cannot produce dangling references at runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CatalogError {
    /// Two actions share a name.
    #[error("duplicate action name: {0}")]
    DuplicateAction(String),

    /// The empty action name is reserved for the built-in pass action.
    #[error("the empty action name is reserved for pass")]
    ReservedActionName,

    /// Two monster templates share a name.
    #[error("duplicate monster name: {0}")]
    DuplicateTemplate(String),

    /// A template lists an action the catalog does not define.
    #[error("monster {template} references undefined action {action}")]
    UnknownActionReference { template: String, action: String },

    /// A template carries a zero max health or base stat.
    #[error("monster {template} has an invalid {field}")]
    InvalidTemplate {
        template: String,
        field: &'static str,
    },

    /// A competition lineup names a template the catalog does not
    /// define.
    #[error("unknown monster template: {0}")]
    UnknownTemplate(String),
}
