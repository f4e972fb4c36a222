//! End-to-end tests for the aggregate services wired to SQLite
//!
//! These exercise the full flows a transport layer would drive: uniqueness
//! on creation, parent checks for players, partial updates, and the atomic
//! team cascade.

use std::sync::Arc;

use chrono::NaiveDate;
use clubroster::domain::error::RosterError;
use clubroster::domain::player::{NewPlayer, PlayerPatch};
use clubroster::domain::repositories::{PlayerRepository, TeamRepository};
use clubroster::domain::team::{NewTeam, TeamPatch};
use clubroster::infrastructure::db;
use clubroster::infrastructure::repositories::{SqlitePlayerRepository, SqliteTeamRepository};
use clubroster::services::{PlayerService, TeamService};
use sqlx::sqlite::SqlitePoolOptions;

/// Wire both services over a fresh in-memory database
async fn setup_services() -> (TeamService, PlayerService) {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db::init_schema(&pool).await.expect("Failed to create schema");

    let teams: Arc<dyn TeamRepository> = Arc::new(SqliteTeamRepository::new(pool.clone()));
    let players: Arc<dyn PlayerRepository> = Arc::new(SqlitePlayerRepository::new(pool));

    (
        TeamService::new(teams.clone()),
        PlayerService::new(players, teams),
    )
}

fn lions() -> NewTeam {
    NewTeam {
        name: "Lions".to_string(),
        country: "Kenya".to_string(),
        description: None,
        league: None,
    }
}

fn amara() -> NewPlayer {
    NewPlayer {
        first_name: "Amara".to_string(),
        last_name: "Okafor".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
        height: None,
        citizenship: None,
        place_of_birth: None,
        position: None,
    }
}

#[tokio::test]
async fn team_lifecycle_with_cascading_player_removal() {
    let (team_service, player_service) = setup_services().await;

    let team = team_service.create_team(lions()).await.expect("create team");
    assert_eq!(team.id, 1);

    let player = player_service
        .add_player(team.id, amara())
        .await
        .expect("add player");
    assert_eq!(player.id, 1);
    assert_eq!(player.team_id, team.id);

    team_service.delete_team(team.id).await.expect("delete team");

    let team_err = team_service
        .team_details(team.id, false)
        .await
        .unwrap_err();
    assert!(team_err.is_not_found());
    assert!(matches!(team_err, RosterError::TeamNotFound(1)));

    let player_err = player_service.player_details(player.id).await.unwrap_err();
    assert!(player_err.is_not_found());
    assert!(matches!(player_err, RosterError::PlayerNotFound(1)));
}

#[tokio::test]
async fn duplicate_team_name_conflicts_and_writes_nothing() {
    let (team_service, _) = setup_services().await;
    team_service.create_team(lions()).await.expect("create team");

    let err = team_service.create_team(lions()).await.unwrap_err();

    assert!(matches!(err, RosterError::DuplicateTeamName(_)));
    assert!(!err.is_not_found());
    assert_eq!(team_service.all_teams().await.expect("list").len(), 1);
}

#[tokio::test]
async fn same_name_different_case_is_not_a_conflict() {
    let (team_service, _) = setup_services().await;
    team_service.create_team(lions()).await.expect("create team");

    let mut lowercase = lions();
    lowercase.name = "lions".to_string();

    team_service
        .create_team(lowercase)
        .await
        .expect("case-different name is allowed");
    assert_eq!(team_service.all_teams().await.expect("list").len(), 2);
}

#[tokio::test]
async fn adding_player_to_missing_team_writes_nothing() {
    let (team_service, player_service) = setup_services().await;

    let result = player_service.add_player(7, amara()).await;

    assert!(matches!(result, Err(RosterError::TeamNotFound(7))));
    assert!(team_service.all_teams().await.expect("list").is_empty());
}

#[tokio::test]
async fn partial_update_changes_only_patched_fields() {
    let (team_service, player_service) = setup_services().await;
    let team = team_service.create_team(lions()).await.expect("create team");

    let mut john = amara();
    john.first_name = "John".to_string();
    john.last_name = "Doe".to_string();
    let player = player_service
        .add_player(team.id, john)
        .await
        .expect("add player");

    let patch = PlayerPatch {
        last_name: Some("Smith".to_string()),
        ..Default::default()
    };
    player_service
        .update_player(player.id, patch)
        .await
        .expect("update player");

    let reloaded = player_service
        .player_details(player.id)
        .await
        .expect("fetch player");
    assert_eq!(reloaded.first_name, "John");
    assert_eq!(reloaded.last_name, "Smith");
    assert_eq!(reloaded.date_of_birth, player.date_of_birth);
    assert_eq!(reloaded.team_id, team.id);
}

#[tokio::test]
async fn team_update_persists_through_the_service() {
    let (team_service, _) = setup_services().await;
    let team = team_service.create_team(lions()).await.expect("create team");

    let patch = TeamPatch {
        description: Some("Founded 1965".to_string()),
        ..Default::default()
    };
    team_service
        .update_team(team.id, patch)
        .await
        .expect("update team");

    let reloaded = team_service
        .team_details(team.id, false)
        .await
        .expect("fetch team");
    assert_eq!(reloaded.name, "Lions");
    assert_eq!(reloaded.description.as_deref(), Some("Founded 1965"));
}

#[tokio::test]
async fn team_details_with_players_returns_exactly_its_roster() {
    let (team_service, player_service) = setup_services().await;
    let team = team_service.create_team(lions()).await.expect("create team");
    let p1 = player_service
        .add_player(team.id, amara())
        .await
        .expect("add player");
    let mut second = amara();
    second.first_name = "Jane".to_string();
    let p2 = player_service
        .add_player(team.id, second)
        .await
        .expect("add player");

    let detailed = team_service
        .team_details(team.id, true)
        .await
        .expect("fetch with players");

    assert_eq!(detailed.players.len(), 2);
    assert_eq!(detailed.players[0], p1);
    assert_eq!(detailed.players[1], p2);
}

#[tokio::test]
async fn invalid_ids_are_rejected_before_the_store() {
    let (team_service, player_service) = setup_services().await;

    assert!(matches!(
        team_service.team_details(0, false).await,
        Err(RosterError::InvalidId(0))
    ));
    assert!(matches!(
        team_service.delete_team(-1).await,
        Err(RosterError::InvalidId(-1))
    ));
    assert!(matches!(
        player_service.player_details(0).await,
        Err(RosterError::InvalidId(0))
    ));
    assert!(matches!(
        player_service
            .update_player(-3, PlayerPatch::default())
            .await,
        Err(RosterError::InvalidId(-3))
    ));
}

#[tokio::test]
async fn deletes_stay_successful_after_the_first_call() {
    let (team_service, player_service) = setup_services().await;
    let team = team_service.create_team(lions()).await.expect("create team");
    let player = player_service
        .add_player(team.id, amara())
        .await
        .expect("add player");

    player_service
        .delete_player(player.id)
        .await
        .expect("first player delete");
    player_service
        .delete_player(player.id)
        .await
        .expect("repeat player delete");

    team_service.delete_team(team.id).await.expect("first team delete");
    team_service
        .delete_team(team.id)
        .await
        .expect("repeat team delete");
}
