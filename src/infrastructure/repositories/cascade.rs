//! Cascade delete coordinator for the Team aggregate

use sqlx::{Sqlite, Transaction};

use crate::domain::error::RosterResult;

/// Deletes a team together with every player referencing it
///
/// Operates entirely inside the transaction handle passed in; the caller
/// owns the commit. If the team does not exist, nothing is touched and the
/// caller commits an empty transaction (idempotent delete). Any error
/// returned here propagates before the commit, so the dropped transaction
/// rolls the whole cascade back.
pub(crate) async fn delete_team_with_players(
    tx: &mut Transaction<'_, Sqlite>,
    team_id: i64,
) -> RosterResult<()> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM teams WHERE id = ?")
        .bind(team_id)
        .fetch_optional(&mut **tx)
        .await?;

    if existing.is_none() {
        tracing::info!(team_id, "team_repository: delete of absent team is a no-op");
        return Ok(());
    }

    let player_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players WHERE team_id = ?")
        .bind(team_id)
        .fetch_one(&mut **tx)
        .await?;

    if player_count > 0 {
        tracing::warn!(
            team_id,
            player_count,
            "team_repository: deleting team also deletes its players"
        );
    }

    sqlx::query("DELETE FROM players WHERE team_id = ?")
        .bind(team_id)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM teams WHERE id = ?")
        .bind(team_id)
        .execute(&mut **tx)
        .await?;

    Ok(())
}
