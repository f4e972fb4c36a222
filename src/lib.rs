//! Clubroster library
//!
//! Aggregate-consistency layer for team and player rosters: name-unique team
//! creation, presence-driven partial updates, and all-or-nothing cascading
//! deletion of a team together with its players. A transport layer (HTTP or
//! otherwise) is expected to sit on top of the services exposed here.

pub mod domain;
pub mod infrastructure;
pub mod services;
