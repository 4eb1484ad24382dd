//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence logic.
//!
//! # Entity Types
//!
//! - [`User`] - An account, looked up by exact username
//! - [`Track`] - A musical composition owned by exactly one user
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewTrack` - For creating new records
//! - `UserPatch`, `TrackPatch` - For partial updates

pub mod track;
pub mod user;

pub use track::{NewTrack, Track, TrackPatch};
pub use user::{DeletedUser, NewUser, User, UserPatch};
