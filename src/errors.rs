use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Error type that captures store mutation failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} `{id}` not found")]
    NotFound { kind: EntityKind, id: Uuid },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Names the collection an identifier was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Transaction,
    Goal,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Account => "account",
            EntityKind::Transaction => "transaction",
            EntityKind::Goal => "goal",
        };
        f.write_str(label)
    }
}
