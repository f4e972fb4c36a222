use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Player entity
///
/// Every player belongs to exactly one team (`team_id`), established at
/// creation against an existing team and never changed afterward. A player
/// only ceases to exist through its own deletion or its team's cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
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

/// Fields for creating a player; the store assigns the id and the service
/// supplies the team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub height: Option<f64>,
    pub citizenship: Option<String>,
    pub place_of_birth: Option<String>,
    pub position: Option<String>,
}

/// Sparse patch for a player
///
/// Same presence semantics as [`crate::domain::team::TeamPatch`]. `id` and
/// `team_id` are not patchable; `position` is settable only at creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<f64>,
    pub citizenship: Option<String>,
    pub place_of_birth: Option<String>,
}

impl Player {
    /// Applies a sparse patch field by field, driven by presence
    pub fn apply_patch(&mut self, patch: PlayerPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(height) = patch.height {
            self.height = Some(height);
        }
        if let Some(citizenship) = patch.citizenship {
            self.citizenship = Some(citizenship);
        }
        if let Some(place_of_birth) = patch.place_of_birth {
            self.place_of_birth = Some(place_of_birth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_player() -> Player {
        Player {
            id: 1,
            team_id: 1,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            height: Some(1.84),
            citizenship: None,
            place_of_birth: None,
            position: Some("Striker".to_string()),
        }
    }

    #[test]
    fn patching_last_name_keeps_other_fields_unchanged() {
        let mut player = sample_player();

        player.apply_patch(PlayerPatch {
            last_name: Some("Smith".to_string()),
            ..Default::default()
        });

        assert_eq!(player.first_name, "John");
        assert_eq!(player.last_name, "Smith");
        assert_eq!(
            player.date_of_birth,
            NaiveDate::from_ymd_opt(1995, 3, 2).unwrap()
        );
        assert_eq!(player.height, Some(1.84));
        assert_eq!(player.position.as_deref(), Some("Striker"));
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut player = sample_player();
        let before = player.clone();

        player.apply_patch(PlayerPatch::default());

        assert_eq!(player, before);
    }

    #[test]
    fn patch_never_moves_a_player_between_teams() {
        let mut player = sample_player();

        player.apply_patch(PlayerPatch {
            first_name: Some("Jane".to_string()),
            last_name: Some("Smith".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            height: Some(1.70),
            citizenship: Some("Kenya".to_string()),
            place_of_birth: Some("Nairobi".to_string()),
        });

        assert_eq!(player.id, 1);
        assert_eq!(player.team_id, 1);
    }
}
