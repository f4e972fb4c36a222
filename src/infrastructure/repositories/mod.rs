mod cascade;
mod sqlite_player_repository;
mod sqlite_team_repository;

pub use sqlite_player_repository::SqlitePlayerRepository;
pub use sqlite_team_repository::SqliteTeamRepository;
