//! In-memory storage for saved estimates.
//!
//! Contents live only for the session; there is no persistent backend.
//! [`EstimateStore`] is the seam one would plug into.

mod memory;
mod store;
mod summary;

pub use memory::MemoryStore;
pub use store::{EstimateStore, StoreError};
pub use summary::{DashboardSummary, summarize};
