use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::error::RosterResult;
use crate::domain::player::{NewPlayer, Player};

/// Repository contract for Player records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Insert a new player under the given team and return it with its
    /// store-assigned id
    async fn add(&self, team_id: i64, player: NewPlayer) -> RosterResult<Player>;

    /// Find a player by id
    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Player>>;

    /// Persist the mutable fields of an existing player by id
    async fn update(&self, player: &Player) -> RosterResult<()>;

    /// Delete a player; deleting an absent id is a successful no-op
    async fn delete(&self, id: i64) -> RosterResult<()>;
}
