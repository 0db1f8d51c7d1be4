//! Assignment persistence.
//!
//! [`AssignmentStore`] is the capability the service depends on. Two
//! backends implement it:
//!
//! - [`MemoryStore`] - process-lifetime map, nothing survives a restart
//! - [`RedbStore`] - embedded redb database, one table keyed by user id
//!
//! Both enforce the primary-key rule themselves: [`AssignmentStore::record`]
//! is an insert-if-absent and reports the existing team when it loses.

mod errors;
mod memory;
mod redb_store;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamsort_config::{StoreBackend, StoreConfig};

use crate::teams::TeamIndex;

pub use errors::StoreError;
pub use memory::MemoryStore;
pub use redb_store::RedbStore;

/// External platform identifier of an end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Display metadata supplied by the collaborator. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub username: Option<String>,
    pub full_name: Option<String>,
}

impl UserProfile {
    pub fn new(username: Option<String>, full_name: Option<String>) -> Self {
        Self {
            username,
            full_name,
        }
    }
}

/// One persisted assignment. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub user_id: UserId,
    pub username: String,
    pub full_name: String,
    pub team_index: TeamIndex,
    pub assigned_at: DateTime<Utc>,
}

impl AssignmentRecord {
    /// Build a record stamped with the current time.
    ///
    /// A missing username is stored as `""` and the full name is trimmed.
    pub fn new(user_id: UserId, team_index: TeamIndex, profile: UserProfile) -> Self {
        Self {
            user_id,
            username: profile.username.unwrap_or_default(),
            full_name: profile.full_name.unwrap_or_default().trim().to_string(),
            team_index,
            assigned_at: Utc::now(),
        }
    }
}

/// Result of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// No record existed; the new one is now durable.
    Inserted,
    /// A record already existed and was left untouched.
    AlreadyPresent(TeamIndex),
}

/// Durable mapping from user id to team index.
///
/// Implementations must be safe to share across threads. Writes are
/// linearizable; reads need only see committed data.
pub trait AssignmentStore: Send + Sync {
    /// Team of `user_id`, if assigned. No side effects.
    fn lookup(&self, user_id: UserId) -> Result<Option<TeamIndex>, StoreError> {
        Ok(self.get(user_id)?.map(|record| record.team_index))
    }

    /// Full record of `user_id`, if assigned.
    fn get(&self, user_id: UserId) -> Result<Option<AssignmentRecord>, StoreError>;

    /// Insert `record` unless its user already has one.
    ///
    /// Never overwrites: when a record exists the call reports its team and
    /// leaves it as is.
    fn record(&self, record: AssignmentRecord) -> Result<RecordOutcome, StoreError>;

    /// Team indices of every stored record, in no particular order.
    fn team_indices(&self) -> Result<Vec<TeamIndex>, StoreError>;

    /// Number of members per team, for `team_count` teams.
    ///
    /// Teams without members report `0`. Records pointing past the roster are
    /// left out.
    fn counts(&self, team_count: usize) -> Result<Vec<usize>, StoreError> {
        Ok(tally(self.team_indices()?, team_count))
    }

    /// Remove every record in one atomic step. Returns how many were removed.
    fn reset(&self) -> Result<usize, StoreError>;

    /// Backend name for logs.
    fn backend(&self) -> StoreBackend;
}

/// Group `indices` into `team_count` buckets.
pub(crate) fn tally(indices: impl IntoIterator<Item = TeamIndex>, team_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; team_count];
    let mut out_of_range = 0usize;
    for index in indices {
        match counts.get_mut(index.get()) {
            Some(count) => *count += 1,
            None => out_of_range += 1,
        }
    }
    if out_of_range > 0 {
        tracing::warn!(
            event = "core.store.counts_out_of_range",
            records = out_of_range,
            team_count = team_count,
            "Stored assignments reference teams missing from the roster"
        );
    }
    counts
}

/// Open the backend selected by `config`.
///
/// `default_db_path` is used by the redb backend when `store.path` is unset.
pub fn open_store(
    config: &StoreConfig,
    default_db_path: &Path,
) -> Result<Arc<dyn AssignmentStore>, StoreError> {
    let store: Arc<dyn AssignmentStore> = match config.backend() {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Redb => {
            let path = config.path.as_deref().unwrap_or(default_db_path);
            Arc::new(RedbStore::open(path)?)
        }
    };

    tracing::info!(event = "core.store.opened", backend = %store.backend());

    Ok(store)
}
