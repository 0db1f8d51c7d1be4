use std::path::PathBuf;

use super::UserId;
use crate::errors::TeamsortError;
use crate::teams::TeamIndex;

/// Persistence failures. Every variant means the store cannot serve the
/// request; none is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to open assignment database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: Box<redb::DatabaseError>,
    },

    #[error("Failed to create database directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to begin transaction: {0}")]
    Transaction(#[from] Box<redb::TransactionError>),

    #[error("Failed to open assignments table: {0}")]
    Table(#[from] Box<redb::TableError>),

    #[error("Storage read/write failed: {0}")]
    Storage(#[from] Box<redb::StorageError>),

    #[error("Failed to commit transaction: {0}")]
    Commit(#[from] Box<redb::CommitError>),

    #[error("Corrupt assignment record: {0}")]
    Codec(#[from] serde_json::Error),

    #[error(
        "User {user_id} is stored in team {team_index}, but the roster has only {team_count} teams"
    )]
    UnknownTeam {
        user_id: UserId,
        team_index: TeamIndex,
        team_count: usize,
    },

    #[error("Assignment store lock poisoned")]
    Poisoned,
}

impl From<redb::TransactionError> for StoreError {
    fn from(e: redb::TransactionError) -> Self {
        StoreError::Transaction(Box::new(e))
    }
}

impl From<redb::TableError> for StoreError {
    fn from(e: redb::TableError) -> Self {
        StoreError::Table(Box::new(e))
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(e: redb::StorageError) -> Self {
        StoreError::Storage(Box::new(e))
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(e: redb::CommitError) -> Self {
        StoreError::Commit(Box::new(e))
    }
}

impl TeamsortError for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            StoreError::Open { .. } => "STORE_OPEN_FAILED",
            StoreError::CreateDir { .. } => "STORE_DIR_CREATE_FAILED",
            StoreError::Transaction(_) => "STORE_TRANSACTION_FAILED",
            StoreError::Table(_) => "STORE_TABLE_FAILED",
            StoreError::Storage(_) => "STORE_STORAGE_FAILED",
            StoreError::Commit(_) => "STORE_COMMIT_FAILED",
            StoreError::Codec(_) => "STORE_CORRUPT_RECORD",
            StoreError::UnknownTeam { .. } => "STORE_UNKNOWN_TEAM",
            StoreError::Poisoned => "STORE_POISONED",
        }
    }
}
