//! The total calculator: aggregate costs derived from the line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LaborLine, MaterialLine};

/// Derived cost roll-up for one estimate.
///
/// Values keep full decimal precision; two-decimal rounding happens only
/// when an amount is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateTotals {
    pub materials_cost: Decimal,
    pub labor_cost: Decimal,
    pub subtotal: Decimal,
    /// Present only when the estimate carries a tax rate.
    pub tax_amount: Option<Decimal>,
    pub grand_total: Decimal,
}

/// Computes the cost roll-up for the given line items.
///
/// Pure and deterministic: the same inputs always produce the same totals,
/// summation order does not matter, and empty collections yield zero costs
/// rather than an error. `tax_rate` is a percentage (`8.5` means 8.5%);
/// when `None`, the grand total equals the subtotal.
pub fn calculate_totals(
    materials: &[MaterialLine],
    labor: &[LaborLine],
    tax_rate: Option<Decimal>,
) -> EstimateTotals {
    let materials_cost: Decimal = materials.iter().map(MaterialLine::total).sum();
    let labor_cost: Decimal = labor.iter().map(LaborLine::total).sum();
    let subtotal = materials_cost + labor_cost;
    let tax_amount = tax_rate.map(|rate| subtotal * rate / Decimal::ONE_HUNDRED);
    let grand_total = subtotal + tax_amount.unwrap_or(Decimal::ZERO);

    EstimateTotals {
        materials_cost,
        labor_cost,
        subtotal,
        tax_amount,
        grand_total,
    }
}
