use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::error::RosterResult;
use crate::domain::team::{NewTeam, Team};

/// Repository contract for the Team aggregate
///
/// Implementations handle storage-specific details. Absence on lookups is
/// `Ok(None)`, never an error; only genuine store failures are `Err`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team and return it with its store-assigned id
    async fn add(&self, team: NewTeam) -> RosterResult<Team>;

    /// Find a team by id, optionally loading its players
    async fn find_by_id(&self, id: i64, include_players: bool) -> RosterResult<Option<Team>>;

    /// Find a team by exact, case-sensitive name
    async fn find_by_name(&self, name: &str) -> RosterResult<Option<Team>>;

    /// All teams, players not loaded; empty is a valid result
    async fn find_all(&self) -> RosterResult<Vec<Team>>;

    /// Persist the mutable fields of an existing team by id
    async fn update(&self, team: &Team) -> RosterResult<()>;

    /// Delete a team and every player referencing it, as one transaction
    ///
    /// Deleting an absent id is a successful no-op.
    async fn delete(&self, id: i64) -> RosterResult<()>;
}
