use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};

use crate::domain::error::{RosterError, RosterResult};
use crate::domain::player::{NewPlayer, Player};
use crate::domain::repositories::PlayerRepository;

/// SQLite implementation of `PlayerRepository`
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Persistence shape of a player row
///
/// Converted to the domain type through the explicit `From` impl below; the
/// field list there is the mapping contract.
#[derive(Debug, FromRow)]
pub(super) struct PlayerRow {
    pub id: i64,
    pub team_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub height: Option<f64>,
    pub citizenship: Option<String>,
    pub place_of_birth: Option<String>,
    pub position: Option<String>,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id,
            team_id: row.team_id,
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: row.date_of_birth,
            height: row.height,
            citizenship: row.citizenship,
            place_of_birth: row.place_of_birth,
            position: row.position,
        }
    }
}

pub(super) const SELECT_PLAYER: &str = "SELECT id, team_id, first_name, last_name, \
     date_of_birth, height, citizenship, place_of_birth, position FROM players";

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn add(&self, team_id: i64, player: NewPlayer) -> RosterResult<Player> {
        let result = sqlx::query(
            "INSERT INTO players (team_id, first_name, last_name, date_of_birth, \
             height, citizenship, place_of_birth, position) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(team_id)
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.date_of_birth)
        .bind(player.height)
        .bind(&player.citizenship)
        .bind(&player.place_of_birth)
        .bind(&player.position)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(player_id = id, team_id, "player_repository: added player");

        Ok(Player {
            id,
            team_id,
            first_name: player.first_name,
            last_name: player.last_name,
            date_of_birth: player.date_of_birth,
            height: player.height,
            citizenship: player.citizenship,
            place_of_birth: player.place_of_birth,
            position: player.position,
        })
    }

    async fn find_by_id(&self, id: i64) -> RosterResult<Option<Player>> {
        let row =
            sqlx::query_as::<_, PlayerRow>(&format!("{SELECT_PLAYER} WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Player::from))
    }

    async fn update(&self, player: &Player) -> RosterResult<()> {
        let result = sqlx::query(
            "UPDATE players SET first_name = ?, last_name = ?, date_of_birth = ?, \
             height = ?, citizenship = ?, place_of_birth = ?, position = ? WHERE id = ?",
        )
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.date_of_birth)
        .bind(player.height)
        .bind(&player.citizenship)
        .bind(&player.place_of_birth)
        .bind(&player.position)
        .bind(player.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RosterError::PlayerNotFound(player.id));
        }

        tracing::info!(player_id = player.id, "player_repository: updated player");
        Ok(())
    }

    async fn delete(&self, id: i64) -> RosterResult<()> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            tracing::warn!(player_id = id, "player_repository: deleted player");
        }

        Ok(())
    }
}
