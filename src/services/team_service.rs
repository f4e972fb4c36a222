use std::sync::Arc;

use crate::domain::error::{RosterError, RosterResult};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{NewTeam, Team, TeamPatch};

/// Aggregate service for teams
///
/// Orchestrates the uniqueness check on creation, presence-driven partial
/// updates, and cascading deletion. Identifier preconditions (`id > 0`) are
/// checked here before any store access; content validation of field values
/// is left to the boundary layer.
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    /// Creates a team, failing with `DuplicateTeamName` if one with the same
    /// name (exact, case-sensitive match) already exists
    ///
    /// The check is advisory: two concurrent creates with the same name can
    /// both pass it. See DESIGN.md.
    pub async fn create_team(&self, team: NewTeam) -> RosterResult<Team> {
        if self.teams.find_by_name(&team.name).await?.is_some() {
            tracing::warn!(name = %team.name, "team_service: team already exists");
            return Err(RosterError::DuplicateTeamName(team.name));
        }

        self.teams.add(team).await
    }

    /// Returns the team with the given id, optionally with its players loaded
    pub async fn team_details(&self, team_id: i64, include_players: bool) -> RosterResult<Team> {
        if team_id <= 0 {
            return Err(RosterError::InvalidId(team_id));
        }

        match self.teams.find_by_id(team_id, include_players).await? {
            Some(team) => Ok(team),
            None => {
                tracing::warn!(team_id, "team_service: team not found");
                Err(RosterError::TeamNotFound(team_id))
            }
        }
    }

    /// Returns every team; an empty roster is a valid, non-error outcome
    pub async fn all_teams(&self) -> RosterResult<Vec<Team>> {
        self.teams.find_all().await
    }

    /// Merges a sparse patch onto the existing team and persists the result
    pub async fn update_team(&self, team_id: i64, patch: TeamPatch) -> RosterResult<Team> {
        if team_id <= 0 {
            return Err(RosterError::InvalidId(team_id));
        }

        let mut team = match self.teams.find_by_id(team_id, false).await? {
            Some(team) => team,
            None => {
                tracing::warn!(team_id, "team_service: team not found for update");
                return Err(RosterError::TeamNotFound(team_id));
            }
        };

        team.apply_patch(patch);
        self.teams.update(&team).await?;

        Ok(team)
    }

    /// Deletes the team and all of its players as one atomic unit
    ///
    /// Idempotent: deleting an id that no longer exists is a success.
    pub async fn delete_team(&self, team_id: i64) -> RosterResult<()> {
        if team_id <= 0 {
            return Err(RosterError::InvalidId(team_id));
        }

        self.teams.delete(team_id).await
    }
}
