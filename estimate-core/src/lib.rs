pub mod calculations;
pub mod draft;
pub mod models;
pub mod utils;

pub use calculations::{EstimateTotals, calculate_totals};
pub use draft::EstimateDraft;
pub use models::*;
