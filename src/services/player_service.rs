use std::sync::Arc;

use crate::domain::error::{RosterError, RosterResult};
use crate::domain::player::{NewPlayer, Player, PlayerPatch};
use crate::domain::repositories::{PlayerRepository, TeamRepository};

/// Aggregate service for players
///
/// Needs both repositories: adding a player requires the parent team to
/// exist, so a missing team is reported as `TeamNotFound` before anything is
/// written.
pub struct PlayerService {
    players: Arc<dyn PlayerRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl PlayerService {
    pub fn new(players: Arc<dyn PlayerRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { players, teams }
    }

    /// Creates a player under an existing team
    pub async fn add_player(&self, team_id: i64, player: NewPlayer) -> RosterResult<Player> {
        if team_id <= 0 {
            return Err(RosterError::InvalidId(team_id));
        }

        if self.teams.find_by_id(team_id, false).await?.is_none() {
            tracing::warn!(
                team_id,
                player_name = %format!("{} {}", player.first_name, player.last_name),
                "player_service: team does not exist, cannot add player"
            );
            return Err(RosterError::TeamNotFound(team_id));
        }

        let added = self.players.add(team_id, player).await?;
        tracing::info!(
            player_id = added.id,
            team_id,
            "player_service: player added"
        );

        Ok(added)
    }

    /// Returns the player with the given id
    pub async fn player_details(&self, player_id: i64) -> RosterResult<Player> {
        if player_id <= 0 {
            return Err(RosterError::InvalidId(player_id));
        }

        match self.players.find_by_id(player_id).await? {
            Some(player) => Ok(player),
            None => {
                tracing::warn!(player_id, "player_service: player not found");
                Err(RosterError::PlayerNotFound(player_id))
            }
        }
    }

    /// Merges a sparse patch onto the existing player and persists the result
    pub async fn update_player(&self, player_id: i64, patch: PlayerPatch) -> RosterResult<Player> {
        if player_id <= 0 {
            return Err(RosterError::InvalidId(player_id));
        }

        let mut player = match self.players.find_by_id(player_id).await? {
            Some(player) => player,
            None => {
                tracing::warn!(player_id, "player_service: player not found for update");
                return Err(RosterError::PlayerNotFound(player_id));
            }
        };

        player.apply_patch(patch);
        self.players.update(&player).await?;

        Ok(player)
    }

    /// Deletes a single player; idempotent
    pub async fn delete_player(&self, player_id: i64) -> RosterResult<()> {
        if player_id <= 0 {
            return Err(RosterError::InvalidId(player_id));
        }

        self.players.delete(player_id).await
    }
}
