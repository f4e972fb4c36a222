// Aggregate services: the only surface exposed to callers.
// Precondition checks and cross-aggregate rules live here; storage details
// stay behind the repository traits.

pub mod player_service;
pub mod team_service;

pub use player_service::PlayerService;
pub use team_service::TeamService;
