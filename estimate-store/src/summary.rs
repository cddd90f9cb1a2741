use estimate_core::Estimate;
use rust_decimal::Decimal;

/// Headline figures for the dashboard's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub estimate_count: usize,
    /// Combined grand total across every saved estimate.
    pub total_value: Decimal,
    /// Average grand total per estimate; zero when nothing is saved.
    pub average_value: Decimal,
}

/// Rolls the saved estimates up into the dashboard's headline figures.
pub fn summarize(estimates: &[Estimate]) -> DashboardSummary {
    let estimate_count = estimates.len();
    let total_value: Decimal = estimates.iter().map(|e| e.totals.grand_total).sum();
    let average_value = if estimate_count == 0 {
        Decimal::ZERO
    } else {
        total_value / Decimal::from(estimate_count as u64)
    };

    DashboardSummary {
        estimate_count,
        total_value,
        average_value,
    }
}
