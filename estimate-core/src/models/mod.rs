mod currency;
mod estimate;
mod labor_line;
mod material_line;

pub use currency::Currency;
pub use estimate::{Estimate, EstimateStatus};
pub use labor_line::{LaborField, LaborLine};
pub use material_line::{MaterialField, MaterialLine};
