use super::domain::{DecisionLogEntry, Train};

/// Storage abstraction over the fleet record store so the service module can
/// be exercised in isolation.
pub trait TrainRepository: Send + Sync {
    fn insert(&self, train: Train) -> Result<Train, RepositoryError>;
    fn update(&self, train: Train) -> Result<(), RepositoryError>;
    fn fetch(&self, name: &str) -> Result<Option<Train>, RepositoryError>;
    /// Consistent snapshot of the whole fleet in registration order.
    ///
    /// Order matters: score ties are broken by snapshot position, so two
    /// snapshots of the same fleet must list trains identically.
    fn snapshot(&self) -> Result<Vec<Train>, RepositoryError>;
}

/// Error enumeration for record store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("train already registered")]
    Conflict,
    #[error("train not found")]
    NotFound,
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only audit sink consuming the outcome of each plan run.
pub trait DecisionLog: Send + Sync {
    fn append(&self, entry: DecisionLogEntry) -> Result<(), DecisionLogError>;
    /// Most recent entries, newest first, capped at `limit`.
    fn recent(&self, limit: usize) -> Result<Vec<DecisionLogEntry>, DecisionLogError>;
}

/// Audit log failure.
#[derive(Debug, thiserror::Error)]
pub enum DecisionLogError {
    #[error("decision log unavailable: {0}")]
    Unavailable(String),
}
