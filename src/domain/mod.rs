// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod error;
pub mod player;
pub mod repositories;
pub mod team;

pub use error::{RosterError, RosterResult};
