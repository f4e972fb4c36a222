use serde::{Deserialize, Serialize};

use crate::domain::player::Player;

/// Team aggregate root
///
/// A team owns its players one-to-many: deleting a team deletes every player
/// referencing it, atomically. `id` is assigned by the store at creation and
/// never changes afterward. `players` is populated only when a lookup
/// explicitly asks for dependents; it is empty otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub league: Option<String>,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// Fields for creating a team; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub country: String,
    pub description: Option<String>,
    pub league: Option<String>,
}

/// Sparse patch for a team
///
/// `Some` means "replace with this value", `None` means "leave unchanged".
/// A patch cannot clear an optional field back to NULL; absent and cleared
/// are deliberately not distinguishable here. Identity is not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub league: Option<String>,
}

impl Team {
    /// Applies a sparse patch field by field, driven by presence
    ///
    /// Performs no content validation; that is the boundary layer's job.
    pub fn apply_patch(&mut self, patch: TeamPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(league) = patch.league {
            self.league = Some(league);
        }
    }
}
