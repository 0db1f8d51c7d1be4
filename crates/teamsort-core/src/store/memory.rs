use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{Mutex, MutexGuard};

use teamsort_config::StoreBackend;

use super::{AssignmentRecord, AssignmentStore, RecordOutcome, StoreError, UserId};
use crate::teams::TeamIndex;

/// In-process assignment store. Lifetime is the process; used by tests and
/// by the `memory` backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<UserId, AssignmentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<UserId, AssignmentRecord>>, StoreError> {
        self.records.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl AssignmentStore for MemoryStore {
    fn get(&self, user_id: UserId) -> Result<Option<AssignmentRecord>, StoreError> {
        Ok(self.lock()?.get(&user_id).cloned())
    }

    fn record(&self, record: AssignmentRecord) -> Result<RecordOutcome, StoreError> {
        match self.lock()?.entry(record.user_id) {
            Entry::Occupied(existing) => Ok(RecordOutcome::AlreadyPresent(existing.get().team_index)),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(RecordOutcome::Inserted)
            }
        }
    }

    fn team_indices(&self) -> Result<Vec<TeamIndex>, StoreError> {
        Ok(self.lock()?.values().map(|r| r.team_index).collect())
    }

    fn reset(&self) -> Result<usize, StoreError> {
        let mut records = self.lock()?;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
