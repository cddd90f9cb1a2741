//! The working estimate being edited by the form.
//!
//! [`EstimateDraft`] holds the one piece of mutable state in the
//! application: the scalar form fields plus the material and labor
//! collections. Every mutating operation synchronously reruns the total
//! calculator, and [`EstimateDraft::build_estimate`] recomputes once more
//! before producing the snapshot, so a committed estimate is never stale
//! relative to its line items.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::calculations::{EstimateTotals, calculate_totals};
use crate::models::{
    Currency, Estimate, EstimateStatus, LaborField, LaborLine, MaterialField, MaterialLine,
};

/// Identity carried over from a loaded estimate, so that saving again
/// preserves the original id and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Provenance {
    id: Uuid,
    date: NaiveDate,
}

/// The draft behind the estimate form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateDraft {
    pub project_title: String,
    pub client_name: String,
    pub client_address: String,
    pub brand: Option<String>,
    pub notes: String,
    pub currency: Currency,
    pub status: EstimateStatus,
    materials: Vec<MaterialLine>,
    labor: Vec<LaborLine>,
    tax_rate: Option<Decimal>,
    totals: EstimateTotals,
    provenance: Option<Provenance>,
}

impl EstimateDraft {
    /// Tax rate pre-filled on a new draft, in percent.
    pub fn default_tax_rate() -> Decimal {
        Decimal::new(85, 1) // 8.5
    }

    /// Upper bound the form accepts for the tax rate, in percent.
    pub fn max_tax_rate() -> Decimal {
        Decimal::from(20)
    }

    /// Starts a fresh, empty draft.
    pub fn new() -> Self {
        let tax_rate = Some(Self::default_tax_rate());
        Self {
            project_title: String::new(),
            client_name: String::new(),
            client_address: String::new(),
            brand: None,
            notes: String::new(),
            currency: Currency::default(),
            status: EstimateStatus::default(),
            materials: Vec::new(),
            labor: Vec::new(),
            tax_rate,
            totals: calculate_totals(&[], &[], tax_rate),
            provenance: None,
        }
    }

    /// Populates the draft from a saved estimate.
    ///
    /// Field values and line items are taken verbatim and the stored totals
    /// are trusted as-is; the next mutation recomputes them. The estimate's
    /// id and date are remembered so a later save keeps them.
    pub fn load(estimate: &Estimate) -> Self {
        Self {
            project_title: estimate.project_title.clone(),
            client_name: estimate.client_name.clone(),
            client_address: estimate.client_address.clone(),
            brand: estimate.brand.clone(),
            notes: estimate.notes.clone(),
            currency: estimate.currency,
            status: estimate.status,
            materials: estimate.materials.clone(),
            labor: estimate.labor.clone(),
            tax_rate: estimate.tax_rate,
            totals: estimate.totals,
            provenance: Some(Provenance {
                id: estimate.id,
                date: estimate.date,
            }),
        }
    }

    pub fn materials(&self) -> &[MaterialLine] {
        &self.materials
    }

    pub fn labor(&self) -> &[LaborLine] {
        &self.labor
    }

    /// Tax rate in percent; `None` means the tax-less variant.
    pub fn tax_rate(&self) -> Option<Decimal> {
        self.tax_rate
    }

    /// Totals as of the last mutation.
    pub fn totals(&self) -> EstimateTotals {
        self.totals
    }

    /// True when the draft was loaded from a saved estimate.
    pub fn is_editing(&self) -> bool {
        self.provenance.is_some()
    }

    /// Appends an empty material line and returns its id.
    pub fn add_material(&mut self) -> Uuid {
        let line = MaterialLine::new();
        let id = line.id;
        self.materials.push(line);
        self.recalculate();
        id
    }

    /// Applies one field edit to the material line with the given id.
    ///
    /// An id that is not in the collection is a no-op.
    pub fn update_material(
        &mut self,
        id: Uuid,
        field: MaterialField,
    ) {
        match self.materials.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.apply(field);
                self.recalculate();
            }
            None => debug!(%id, "edit of unknown material line ignored"),
        }
    }

    /// Removes the material line with the given id, if present.
    pub fn remove_material(
        &mut self,
        id: Uuid,
    ) {
        self.materials.retain(|line| line.id != id);
        self.recalculate();
    }

    /// Appends a defaulted labor line and returns its id.
    pub fn add_labor(&mut self) -> Uuid {
        let line = LaborLine::new();
        let id = line.id;
        self.labor.push(line);
        self.recalculate();
        id
    }

    /// Applies one field edit to the labor line with the given id.
    ///
    /// An id that is not in the collection is a no-op.
    pub fn update_labor(
        &mut self,
        id: Uuid,
        field: LaborField,
    ) {
        match self.labor.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.apply(field);
                self.recalculate();
            }
            None => debug!(%id, "edit of unknown labor line ignored"),
        }
    }

    /// Removes the labor line with the given id, if present.
    pub fn remove_labor(
        &mut self,
        id: Uuid,
    ) {
        self.labor.retain(|line| line.id != id);
        self.recalculate();
    }

    /// Sets the tax rate in percent, clamped to the form's 0–20 range.
    /// `None` switches the draft to the tax-less variant.
    pub fn set_tax_rate(
        &mut self,
        rate: Option<Decimal>,
    ) {
        self.tax_rate = rate.map(|r| r.clamp(Decimal::ZERO, Self::max_tax_rate()));
        self.recalculate();
    }

    /// Assembles the snapshot to commit.
    ///
    /// Totals are recomputed here regardless of the cached value. A draft
    /// loaded from an existing estimate keeps that estimate's id and date;
    /// a new draft gets a fresh id and `today`.
    pub fn build_estimate(
        &self,
        today: NaiveDate,
    ) -> Estimate {
        let (id, date) = match self.provenance {
            Some(Provenance { id, date }) => (id, date),
            None => (Uuid::new_v4(), today),
        };

        Estimate {
            id,
            project_title: self.project_title.clone(),
            client_name: self.client_name.clone(),
            client_address: self.client_address.clone(),
            brand: self.brand.clone(),
            date,
            materials: self.materials.clone(),
            labor: self.labor.clone(),
            tax_rate: self.tax_rate,
            notes: self.notes.clone(),
            currency: self.currency,
            status: self.status,
            totals: calculate_totals(&self.materials, &self.labor, self.tax_rate),
        }
    }

    fn recalculate(&mut self) {
        self.totals = calculate_totals(&self.materials, &self.labor, self.tax_rate);
    }
}

impl Default for EstimateDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()
    }

    /// A small populated draft: 2 × 5.50 in materials, 3h × 65 in labor.
    fn sample_draft() -> EstimateDraft {
        let mut draft = EstimateDraft::new();
        draft.project_title = "Kitchen Rewiring".to_string();
        draft.client_name = "John Smith".to_string();
        draft.client_address = "123 Main Street".to_string();

        let wire = draft.add_material();
        draft.update_material(wire, MaterialField::Name("12 AWG wire".to_string()));
        draft.update_material(wire, MaterialField::Quantity(dec!(2)));
        draft.update_material(wire, MaterialField::UnitCost(dec!(5.50)));

        let install = draft.add_labor();
        draft.update_labor(install, LaborField::Description("Installation".to_string()));
        draft.update_labor(install, LaborField::Hours(dec!(3)));

        draft
    }

    // =========================================================================
    // line item editing
    // =========================================================================

    #[test]
    fn added_material_has_form_defaults() {
        let mut draft = EstimateDraft::new();

        let id = draft.add_material();

        let line = &draft.materials()[0];
        assert_eq!(line.id, id);
        assert_eq!(line.quantity(), dec!(1));
        assert_eq!(line.unit_cost(), dec!(0));
        assert_eq!(line.total(), dec!(0));
    }

    #[test]
    fn added_labor_has_form_defaults() {
        let mut draft = EstimateDraft::new();

        draft.add_labor();

        let line = &draft.labor()[0];
        assert_eq!(line.hours(), dec!(1));
        assert_eq!(line.hourly_rate(), dec!(65));
        assert_eq!(line.total(), dec!(65));
    }

    #[test]
    fn numeric_edits_keep_the_line_total_invariant() {
        let mut draft = EstimateDraft::new();
        let id = draft.add_material();

        draft.update_material(id, MaterialField::Quantity(dec!(6)));
        draft.update_material(id, MaterialField::UnitCost(dec!(0.75)));

        let line = &draft.materials()[0];
        assert_eq!(line.total(), line.quantity() * line.unit_cost());
        assert_eq!(line.total(), dec!(4.50));
    }

    #[test]
    fn editing_an_unknown_id_changes_nothing() {
        let mut draft = sample_draft();
        let before = draft.clone();

        draft.update_material(Uuid::new_v4(), MaterialField::Quantity(dec!(99)));
        draft.update_labor(Uuid::new_v4(), LaborField::Hours(dec!(99)));

        assert_eq!(draft, before);
    }

    #[test]
    fn removing_an_unknown_id_is_idempotent() {
        let mut draft = sample_draft();
        let before = draft.clone();

        draft.remove_material(Uuid::new_v4());
        draft.remove_labor(Uuid::new_v4());

        assert_eq!(draft.materials(), before.materials());
        assert_eq!(draft.labor(), before.labor());
    }

    #[test]
    fn removing_the_first_of_two_materials_leaves_the_second_untouched() {
        let mut draft = EstimateDraft::new();
        let first = draft.add_material();
        let second = draft.add_material();
        draft.update_material(second, MaterialField::Name("breaker panel".to_string()));

        draft.remove_material(first);

        assert_eq!(draft.materials().len(), 1);
        assert_eq!(draft.materials()[0].id, second);
        assert_eq!(draft.materials()[0].name, "breaker panel");
    }

    // =========================================================================
    // totals
    // =========================================================================

    #[test]
    fn totals_are_refreshed_by_every_mutation() {
        let mut draft = EstimateDraft::new();
        assert_eq!(draft.totals().subtotal, dec!(0));

        let id = draft.add_labor();
        assert_eq!(draft.totals().labor_cost, dec!(65));

        draft.update_labor(id, LaborField::Hours(dec!(2)));
        assert_eq!(draft.totals().labor_cost, dec!(130));

        draft.remove_labor(id);
        assert_eq!(draft.totals().labor_cost, dec!(0));
    }

    #[test]
    fn cached_totals_match_a_fresh_calculation() {
        let draft = sample_draft();

        let fresh = calculate_totals(draft.materials(), draft.labor(), draft.tax_rate());

        assert_eq!(draft.totals(), fresh);
    }

    #[test]
    fn worked_example_matches_the_form() {
        let draft = sample_draft();

        let totals = draft.totals();
        assert_eq!(totals.materials_cost, dec!(11.00));
        assert_eq!(totals.labor_cost, dec!(195.00));
        assert_eq!(totals.subtotal, dec!(206.00));
        assert_eq!(totals.tax_amount, Some(dec!(17.51)));
        assert_eq!(totals.grand_total, dec!(223.51));
    }

    #[test]
    fn tax_rate_clamps_to_the_form_range() {
        let mut draft = EstimateDraft::new();

        draft.set_tax_rate(Some(dec!(25)));
        assert_eq!(draft.tax_rate(), Some(dec!(20)));

        draft.set_tax_rate(Some(dec!(-3)));
        assert_eq!(draft.tax_rate(), Some(dec!(0)));
    }

    #[test]
    fn clearing_the_tax_rate_selects_the_tax_less_variant() {
        let mut draft = sample_draft();

        draft.set_tax_rate(None);

        let totals = draft.totals();
        assert_eq!(totals.tax_amount, None);
        assert_eq!(totals.grand_total, totals.subtotal);
    }

    // =========================================================================
    // save contract
    // =========================================================================

    #[test]
    fn a_new_draft_saves_with_a_fresh_id_and_todays_date() {
        let draft = sample_draft();

        let estimate = draft.build_estimate(today());

        assert_eq!(estimate.date, today());
        assert_eq!(estimate.project_title, "Kitchen Rewiring");
        assert_eq!(estimate.totals, draft.totals());
    }

    #[test]
    fn two_saves_of_a_new_draft_produce_distinct_ids() {
        let draft = sample_draft();

        let first = draft.build_estimate(today());
        let second = draft.build_estimate(today());

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn editing_a_loaded_estimate_preserves_id_and_date() {
        let original = sample_draft().build_estimate(today());
        let later = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        let mut draft = EstimateDraft::load(&original);
        assert!(draft.is_editing());
        draft.client_name = "Jane Smith".to_string();
        let resaved = draft.build_estimate(later);

        assert_eq!(resaved.id, original.id);
        assert_eq!(resaved.date, original.date);
        assert_eq!(resaved.client_name, "Jane Smith");
    }

    #[test]
    fn load_then_save_reproduces_the_snapshot() {
        let original = sample_draft().build_estimate(today());

        let reloaded = EstimateDraft::load(&original)
            .build_estimate(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        assert_eq!(reloaded, original);
    }

    #[test]
    fn load_trusts_the_stored_totals() {
        let mut estimate = sample_draft().build_estimate(today());
        // A snapshot tampered with after save: load must not repair it.
        estimate.totals.grand_total = dec!(999);

        let draft = EstimateDraft::load(&estimate);

        assert_eq!(draft.totals().grand_total, dec!(999));
    }

    #[test]
    fn the_first_mutation_after_load_recomputes_totals() {
        let mut estimate = sample_draft().build_estimate(today());
        estimate.totals.grand_total = dec!(999);

        let mut draft = EstimateDraft::load(&estimate);
        draft.add_material();

        assert_eq!(draft.totals().grand_total, dec!(223.51));
    }

    #[test]
    fn the_snapshot_is_recomputed_at_save_time() {
        let mut draft = sample_draft();
        let id = draft.add_material();
        draft.update_material(id, MaterialField::Quantity(dec!(10)));
        draft.update_material(id, MaterialField::UnitCost(dec!(1)));

        let estimate = draft.build_estimate(today());

        assert_eq!(
            estimate.totals,
            calculate_totals(&estimate.materials, &estimate.labor, estimate.tax_rate)
        );
        assert_eq!(estimate.totals.materials_cost, dec!(21.00));
    }
}
