pub mod player;

pub use player::{NewPlayer, Player, PlayerPatch};
