use estimate_core::Estimate;
use tracing::info;
use uuid::Uuid;

use crate::store::{EstimateStore, StoreError};

/// Vec-backed store, the only implementation shipped.
///
/// The Vec keeps first-saved order, which is the order the dashboard lists
/// estimates in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    estimates: Vec<Estimate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}

impl EstimateStore for MemoryStore {
    fn save(
        &mut self,
        estimate: Estimate,
    ) {
        match self.estimates.iter_mut().find(|e| e.id == estimate.id) {
            Some(slot) => {
                info!(id = %estimate.id, title = %estimate.project_title, "replacing saved estimate");
                *slot = estimate;
            }
            None => {
                info!(id = %estimate.id, title = %estimate.project_title, "saving new estimate");
                self.estimates.push(estimate);
            }
        }
    }

    fn get(
        &self,
        id: Uuid,
    ) -> Result<Estimate, StoreError> {
        self.estimates
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn remove(
        &mut self,
        id: Uuid,
    ) {
        self.estimates.retain(|e| e.id != id);
    }

    fn list(&self) -> Vec<Estimate> {
        self.estimates.clone()
    }
}
