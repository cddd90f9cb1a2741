//! Plain-text rendering of a saved estimate.
//!
//! Formatting only: everything here reads the snapshot and its captured
//! totals, nothing feeds back into the stored numbers. Two-decimal rounding
//! happens here, at the boundary, not in the model.

use std::fmt::Write;

use estimate_core::{Currency, Estimate, calculations::common::round_currency};
use rust_decimal::Decimal;

use crate::config::CompanyConfig;

const RULE: &str =
    "================================================================================";
const THIN_RULE: &str =
    "--------------------------------------------------------------------------------";

/// Formats an amount with the currency symbol and exactly two decimals.
pub fn format_amount(
    currency: Currency,
    value: Decimal,
) -> String {
    format!("{}{:.2}", currency.symbol(), round_currency(value))
}

/// Renders the printable estimate document.
pub fn render_document(
    estimate: &Estimate,
    company: &CompanyConfig,
) -> String {
    let currency = estimate.currency;
    let mut out = String::new();

    // Letterhead.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", company.name.to_uppercase());
    let _ = writeln!(out, "{}", company.tagline);
    if let Some(email) = &company.email {
        let _ = writeln!(out, "{email}");
    }
    if let Some(phone) = &company.phone {
        let _ = writeln!(out, "{phone}");
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    let _ = writeln!(out, "ESTIMATE                                    Date: {}", estimate.date);
    let _ = writeln!(out);

    // Project block.
    let _ = writeln!(out, "Project:  {}", estimate.project_title);
    let _ = writeln!(out, "Client:   {}", estimate.client_name);
    let _ = writeln!(out, "Address:  {}", estimate.client_address);
    if let Some(brand) = &estimate.brand {
        let _ = writeln!(out, "Brand:    {brand}");
    }
    let _ = writeln!(out, "Currency: {}", currency.name());
    let _ = writeln!(out, "Status:   {}", estimate.status);
    let _ = writeln!(out);

    // Materials.
    if !estimate.materials.is_empty() {
        let _ = writeln!(out, "MATERIALS");
        let _ = writeln!(out, "{THIN_RULE}");
        let _ = writeln!(
            out,
            "{:<40} {:>8} {:>13} {:>13}",
            "Name", "Qty", "Unit Cost", "Total"
        );
        for line in &estimate.materials {
            let _ = writeln!(
                out,
                "{:<40} {:>8} {:>13} {:>13}",
                line.name,
                line.quantity(),
                format_amount(currency, line.unit_cost()),
                format_amount(currency, line.total()),
            );
        }
        let _ = writeln!(
            out,
            "{:>63} {:>13}",
            "Materials Subtotal:",
            format_amount(currency, estimate.totals.materials_cost)
        );
        let _ = writeln!(out);
    }

    // Labor.
    if !estimate.labor.is_empty() {
        let _ = writeln!(out, "LABOR");
        let _ = writeln!(out, "{THIN_RULE}");
        let _ = writeln!(
            out,
            "{:<40} {:>8} {:>13} {:>13}",
            "Description", "Hours", "Rate/Hour", "Total"
        );
        for line in &estimate.labor {
            let _ = writeln!(
                out,
                "{:<40} {:>8} {:>13} {:>13}",
                line.description,
                line.hours(),
                format_amount(currency, line.hourly_rate()),
                format_amount(currency, line.total()),
            );
        }
        let _ = writeln!(
            out,
            "{:>63} {:>13}",
            "Labor Subtotal:",
            format_amount(currency, estimate.totals.labor_cost)
        );
        let _ = writeln!(out);
    }

    // Totals block.
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "{:>63} {:>13}",
        "Subtotal:",
        format_amount(currency, estimate.totals.subtotal)
    );
    if let (Some(rate), Some(tax_amount)) = (estimate.tax_rate, estimate.totals.tax_amount) {
        let _ = writeln!(
            out,
            "{:>63} {:>13}",
            format!("Tax ({rate}%):"),
            format_amount(currency, tax_amount)
        );
    }
    let _ = writeln!(
        out,
        "{:>63} {:>13}",
        "GRAND TOTAL:",
        format_amount(currency, estimate.totals.grand_total)
    );

    // Notes.
    if !estimate.notes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "NOTES");
        let _ = writeln!(out, "{THIN_RULE}");
        let _ = writeln!(out, "{}", estimate.notes);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Thank you for choosing {}.", company.name);
    let _ = writeln!(out, "This estimate is valid for 30 days from the date issued.");

    out
}

/// Composes the short text sent through messaging apps when an estimate is
/// shared.
pub fn share_message(estimate: &Estimate) -> String {
    let currency = estimate.currency;
    let mut msg = format!(
        "Estimate: {} — {}\n",
        estimate.project_title, estimate.client_name
    );
    let _ = writeln!(
        msg,
        "Materials: {}",
        format_amount(currency, estimate.totals.materials_cost)
    );
    let _ = writeln!(
        msg,
        "Labor: {}",
        format_amount(currency, estimate.totals.labor_cost)
    );
    if let Some(tax_amount) = estimate.totals.tax_amount {
        let _ = writeln!(msg, "Tax: {}", format_amount(currency, tax_amount));
    }
    let _ = write!(
        msg,
        "Total: {} ({})",
        format_amount(currency, estimate.totals.grand_total),
        currency.name()
    );
    msg
}
