pub mod team;

pub use team::{NewTeam, Team, TeamPatch};
