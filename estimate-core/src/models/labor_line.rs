use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::common::clamp_non_negative;

/// A single labor entry on an estimate.
///
/// Mirrors [`MaterialLine`](crate::models::MaterialLine): `total` is
/// `hours * hourly_rate`, maintained by the setters and never written
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborLine {
    pub id: Uuid,
    pub description: String,
    hours: Decimal,
    hourly_rate: Decimal,
    total: Decimal,
}

impl LaborLine {
    /// Hourly rate pre-filled on new labor lines.
    pub fn default_hourly_rate() -> Decimal {
        Decimal::from(65)
    }

    /// Creates an empty line with a fresh id: one hour at the default rate.
    pub fn new() -> Self {
        let mut line = Self {
            id: Uuid::new_v4(),
            description: String::new(),
            hours: Decimal::ONE,
            hourly_rate: Self::default_hourly_rate(),
            total: Decimal::ZERO,
        };
        line.recalculate();
        line
    }

    pub fn hours(&self) -> Decimal {
        self.hours
    }

    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sets the hours worked. Input below zero is clamped to zero.
    pub fn set_hours(
        &mut self,
        hours: Decimal,
    ) {
        self.hours = clamp_non_negative(hours);
        self.recalculate();
    }

    /// Sets the hourly rate. Input below zero is clamped to zero.
    pub fn set_hourly_rate(
        &mut self,
        hourly_rate: Decimal,
    ) {
        self.hourly_rate = clamp_non_negative(hourly_rate);
        self.recalculate();
    }

    /// Applies one field edit, recomputing the line total when a numeric
    /// field changes.
    pub fn apply(
        &mut self,
        field: LaborField,
    ) {
        match field {
            LaborField::Description(description) => self.description = description,
            LaborField::Hours(hours) => self.set_hours(hours),
            LaborField::HourlyRate(rate) => self.set_hourly_rate(rate),
        }
    }

    fn recalculate(&mut self) {
        self.total = self.hours * self.hourly_rate;
    }
}

impl Default for LaborLine {
    fn default() -> Self {
        Self::new()
    }
}

/// A single edit to a labor line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaborField {
    Description(String),
    Hours(Decimal),
    HourlyRate(Decimal),
}
