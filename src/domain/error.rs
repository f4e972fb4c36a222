use thiserror::Error;

/// Errors surfaced by the roster services and repositories
///
/// Absence is a named variant rather than a bare `Option`, so "not found"
/// can never be mistaken for a legitimately empty value. `NotFound` variants
/// are expected outcomes and are logged at warn level, not error.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("id must be greater than zero, got {0}")]
    InvalidId(i64),

    #[error("team with id {0} not found")]
    TeamNotFound(i64),

    #[error("player with id {0} not found")]
    PlayerNotFound(i64),

    #[error("a team named {0:?} already exists")]
    DuplicateTeamName(String),

    #[error("storage error: {0}")]
    Store(#[from] sqlx::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;

impl RosterError {
    /// True for the absence outcomes (`TeamNotFound` / `PlayerNotFound`)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RosterError::TeamNotFound(_) | RosterError::PlayerNotFound(_)
        )
    }
}
