use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::EstimateTotals;
use crate::models::{Currency, LaborLine, MaterialLine};

/// A saved estimate snapshot.
///
/// Everything here was captured atomically at save time, including the
/// derived totals; nothing is recomputed on read. Line items keep their
/// insertion order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate {
    pub id: Uuid,
    pub project_title: String,
    pub client_name: String,
    pub client_address: String,
    pub brand: Option<String>,
    pub date: NaiveDate,
    pub materials: Vec<MaterialLine>,
    pub labor: Vec<LaborLine>,
    /// Tax rate in percent. `None` is the tax-less variant.
    pub tax_rate: Option<Decimal>,
    pub notes: String,
    pub currency: Currency,
    pub status: EstimateStatus,
    pub totals: EstimateTotals,
}

/// Lifecycle state shown on the dashboard badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateStatus {
    #[default]
    Draft,
    Sent,
    Accepted,
}

impl EstimateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Accepted => "Accepted",
        }
    }
}

impl fmt::Display for EstimateStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
