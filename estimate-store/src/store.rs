use estimate_core::Estimate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("estimate {0} not found")]
    NotFound(Uuid),
}

/// Backing store for saved estimates.
///
/// Synchronous by design: there is exactly one writer (the active session)
/// and no I/O in scope. Saving is an atomic snapshot replace — an estimate
/// is either stored whole or not at all.
pub trait EstimateStore {
    /// Inserts a new estimate, or replaces the stored one with the same id.
    fn save(
        &mut self,
        estimate: Estimate,
    );

    /// Looks up a saved estimate by id.
    fn get(
        &self,
        id: Uuid,
    ) -> Result<Estimate, StoreError>;

    /// Deletes the estimate with the given id. Unknown ids are a no-op.
    fn remove(
        &mut self,
        id: Uuid,
    );

    /// All saved estimates, in the order they were first saved.
    fn list(&self) -> Vec<Estimate>;
}
