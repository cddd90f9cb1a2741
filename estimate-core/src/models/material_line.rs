use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::common::clamp_non_negative;

/// A single material entry on an estimate.
///
/// `total` is derived from `quantity * unit_cost` and kept in sync by the
/// setters; it cannot be written directly. Snapshots deserialize the stored
/// total as-is, matching the load contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    quantity: Decimal,
    unit_cost: Decimal,
    total: Decimal,
}

impl MaterialLine {
    /// Creates an empty line with a fresh id: quantity 1, unit cost 0.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            brand: None,
            quantity: Decimal::ONE,
            unit_cost: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sets the quantity. Input below zero is clamped to zero.
    pub fn set_quantity(
        &mut self,
        quantity: Decimal,
    ) {
        self.quantity = clamp_non_negative(quantity);
        self.recalculate();
    }

    /// Sets the unit cost. Input below zero is clamped to zero.
    pub fn set_unit_cost(
        &mut self,
        unit_cost: Decimal,
    ) {
        self.unit_cost = clamp_non_negative(unit_cost);
        self.recalculate();
    }

    /// Applies one field edit, recomputing the line total when a numeric
    /// field changes.
    pub fn apply(
        &mut self,
        field: MaterialField,
    ) {
        match field {
            MaterialField::Name(name) => self.name = name,
            MaterialField::Brand(brand) => self.brand = brand,
            MaterialField::Quantity(quantity) => self.set_quantity(quantity),
            MaterialField::UnitCost(unit_cost) => self.set_unit_cost(unit_cost),
        }
    }

    fn recalculate(&mut self) {
        self.total = self.quantity * self.unit_cost;
    }
}

impl Default for MaterialLine {
    fn default() -> Self {
        Self::new()
    }
}

/// A single edit to a material line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialField {
    Name(String),
    Brand(Option<String>),
    Quantity(Decimal),
    UnitCost(Decimal),
}
