//! redb-backed assignment store.
//!
//! One table, `assignments`, maps the user id to a JSON-encoded
//! [`AssignmentRecord`]. redb admits a single write transaction at a time,
//! so the existence check and the insert in [`RedbStore::record`] cannot
//! interleave with another writer, and [`RedbStore::reset`] commits or rolls
//! back as a whole.

use std::fs;
use std::path::{Path, PathBuf};

use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use teamsort_config::StoreBackend;

use super::{AssignmentRecord, AssignmentStore, RecordOutcome, StoreError, UserId};
use crate::teams::TeamIndex;

/// Assignments keyed by user id.
const ASSIGNMENTS: TableDefinition<i64, &[u8]> = TableDefinition::new("assignments");

pub struct RedbStore {
    db: Database,
    path: PathBuf,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").field("path", &self.path).finish()
    }
}

impl RedbStore {
    /// Open (or create) the database at `path` and make sure the
    /// assignments table exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let db = Database::create(path).map_err(|source| {
            tracing::error!(
                event = "core.store.redb.open_failed",
                path = %path.display(),
                error = %source
            );
            StoreError::Open {
                path: path.to_path_buf(),
                source: Box::new(source),
            }
        })?;

        let write_txn = db.begin_write()?;
        {
            let _table = write_txn.open_table(ASSIGNMENTS)?;
        }
        write_txn.commit()?;

        tracing::debug!(event = "core.store.redb.opened", path = %path.display());

        Ok(Self {
            db,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn decode(bytes: &[u8]) -> Result<AssignmentRecord, StoreError> {
    Ok(serde_json::from_slice(bytes)?)
}

impl AssignmentStore for RedbStore {
    fn get(&self, user_id: UserId) -> Result<Option<AssignmentRecord>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ASSIGNMENTS)?;
        let record = table
            .get(user_id.get())?
            .map(|guard| decode(guard.value()))
            .transpose()?;
        Ok(record)
    }

    fn record(&self, record: AssignmentRecord) -> Result<RecordOutcome, StoreError> {
        let write_txn = self.db.begin_write()?;
        let outcome = {
            let mut table = write_txn.open_table(ASSIGNMENTS)?;
            let existing = table
                .get(record.user_id.get())?
                .map(|guard| decode(guard.value()))
                .transpose()?;
            match existing {
                Some(existing) => RecordOutcome::AlreadyPresent(existing.team_index),
                None => {
                    let bytes = serde_json::to_vec(&record)?;
                    table.insert(record.user_id.get(), bytes.as_slice())?;
                    RecordOutcome::Inserted
                }
            }
        };

        match outcome {
            RecordOutcome::Inserted => write_txn.commit()?,
            RecordOutcome::AlreadyPresent(_) => write_txn.abort()?,
        }

        Ok(outcome)
    }

    fn team_indices(&self) -> Result<Vec<TeamIndex>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ASSIGNMENTS)?;
        let mut indices = Vec::new();
        for item in table.iter()? {
            let (_, value) = item?;
            indices.push(decode(value.value())?.team_index);
        }
        Ok(indices)
    }

    fn reset(&self) -> Result<usize, StoreError> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let table = write_txn.open_table(ASSIGNMENTS)?;
            table.len()?
        };
        write_txn.delete_table(ASSIGNMENTS)?;
        {
            let _table = write_txn.open_table(ASSIGNMENTS)?;
        }
        write_txn.commit()?;
        Ok(removed as usize)
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Redb
    }
}
