use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::error::{RosterError, RosterResult};
use crate::domain::player::Player;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{NewTeam, Team};

use super::cascade;
use super::sqlite_player_repository::{PlayerRow, SELECT_PLAYER};

/// SQLite implementation of `TeamRepository`
///
/// Single-record operations rely on per-statement atomicity; only the
/// cascading delete opens an explicit transaction.
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Persistence shape of a team row; players are loaded separately
#[derive(Debug, FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    country: String,
    description: Option<String>,
    league: Option<String>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            country: row.country,
            description: row.description,
            league: row.league,
            players: Vec::new(),
        }
    }
}

const SELECT_TEAM: &str = "SELECT id, name, country, description, league FROM teams";

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn add(&self, team: NewTeam) -> RosterResult<Team> {
        let result = sqlx::query(
            "INSERT INTO teams (name, country, description, league) VALUES (?, ?, ?, ?)",
        )
        .bind(&team.name)
        .bind(&team.country)
        .bind(&team.description)
        .bind(&team.league)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(team_id = id, "team_repository: added team");

        Ok(Team {
            id,
            name: team.name,
            country: team.country,
            description: team.description,
            league: team.league,
            players: Vec::new(),
        })
    }

    async fn find_by_id(&self, id: i64, include_players: bool) -> RosterResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut team = Team::from(row);
        if include_players {
            let players = sqlx::query_as::<_, PlayerRow>(&format!(
                "{SELECT_PLAYER} WHERE team_id = ? ORDER BY id"
            ))
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

            team.players = players.into_iter().map(Player::from).collect();
        }

        Ok(Some(team))
    }

    async fn find_by_name(&self, name: &str) -> RosterResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }

    async fn find_all(&self) -> RosterResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        tracing::info!(team_count = rows.len(), "team_repository: listing teams");
        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn update(&self, team: &Team) -> RosterResult<()> {
        let result = sqlx::query(
            "UPDATE teams SET name = ?, country = ?, description = ?, league = ? WHERE id = ?",
        )
        .bind(&team.name)
        .bind(&team.country)
        .bind(&team.description)
        .bind(&team.league)
        .bind(team.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RosterError::TeamNotFound(team.id));
        }

        tracing::info!(team_id = team.id, "team_repository: updated team");
        Ok(())
    }

    async fn delete(&self, id: i64) -> RosterResult<()> {
        let mut tx = self.pool.begin().await?;

        // Any error before the commit drops the transaction and rolls the
        // whole cascade back; no partial state is observable.
        cascade::delete_team_with_players(&mut tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
