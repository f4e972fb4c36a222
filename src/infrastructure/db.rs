//! Connection pool construction and schema initialization

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::domain::error::RosterResult;

/// Idempotent schema, mirrored by the repository queries: integer
/// autoincrement primary keys, a NOT NULL foreign key from players to teams,
/// and an index on that key.
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS teams (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        country TEXT NOT NULL,
        description TEXT,
        league TEXT
    )",
    "CREATE TABLE IF NOT EXISTS players (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        team_id INTEGER NOT NULL REFERENCES teams(id),
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        date_of_birth TEXT NOT NULL,
        height REAL,
        citizenship TEXT,
        place_of_birth TEXT,
        position TEXT
    )",
    "CREATE INDEX IF NOT EXISTS idx_players_team_id ON players (team_id)",
];

/// Opens a pool against the given SQLite URL, creating the file if needed
pub async fn connect(database_url: &str) -> RosterResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Opens a pool using `DATABASE_URL` from the environment (or `.env`)
pub async fn connect_from_env() -> RosterResult<SqlitePool> {
    dotenv::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set, using default");
        "sqlite:clubroster.db".to_string()
    });

    connect(&database_url).await
}

/// Creates the tables and indexes if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> RosterResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
