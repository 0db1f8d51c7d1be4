//! teamsort-core: balanced, sticky team assignment
//!
//! Assigns each user to exactly one team of a fixed roster, keeping team
//! sizes within one of each other, and persists the assignment. Used by the
//! CLI and by any chat transport that embeds it.
//!
//! # Main Entry Points
//!
//! - [`service`] - Race-safe allocate-and-record flow, counts, reset
//! - [`allocator`] - Pure minimum-bucket team selection
//! - [`store`] - Assignment persistence (memory and redb backends)
//! - [`teams`] - Team roster

pub mod allocator;
pub mod errors;
pub mod logging;
pub mod service;
pub mod store;
pub mod teams;

pub use allocator::{FirstCandidate, RandomTieBreak, SeededTieBreak, TieBreak, allocate};
pub use errors::{TeamsortError, TeamsortResult};
pub use service::{AssignmentError, Placement, StartupError, TeamService};
pub use store::{
    AssignmentRecord, AssignmentStore, MemoryStore, RecordOutcome, RedbStore, StoreError, UserId,
    UserProfile,
};
pub use teams::{RosterError, Team, TeamIndex, TeamRoster};

pub use teamsort_config::{ConfigError, StoreBackend, TeamsortConfig};

// Re-export logging initialization
pub use logging::init_logging;
