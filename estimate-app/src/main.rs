use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use estimate_app::config::CompanyConfig;
use estimate_app::{logging, render};
use estimate_core::utils::parse_amount;
use estimate_core::{Currency, EstimateDraft, LaborField, MaterialField};
use estimate_store::{EstimateStore, MemoryStore, summarize};
use rust_decimal::Decimal;
use tracing::info;

/// Draft a sample electrical estimate and print the resulting document.
///
/// Everything runs in memory; nothing is persisted. The binary exercises
/// the drafting core end to end: line-item editing, total calculation,
/// saving into the session store, and document rendering.
#[derive(Parser, Debug)]
#[command(name = "estimator")]
#[command(version, about, long_about = None)]
struct Args {
    /// Currency code used for display formatting (GHS, USD, EUR, GBP)
    #[arg(short, long, default_value = "GHS")]
    currency: String,

    /// Tax rate in percent; the form clamps it to 0-20
    #[arg(short, long)]
    tax_rate: Option<Decimal>,

    /// Build the tax-less variant of the estimate
    #[arg(long, conflicts_with = "tax_rate")]
    no_tax: bool,

    /// TOML file with the company letterhead block
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the saved snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init_default_logging();
    let args = Args::parse();

    let currency = Currency::parse(&args.currency)
        .with_context(|| format!("unknown currency code '{}'", args.currency))?;

    let company = match &args.config {
        Some(path) => CompanyConfig::load(path)?,
        None => CompanyConfig::default(),
    };

    let mut draft = sample_draft(currency);
    if args.no_tax {
        draft.set_tax_rate(None);
    } else if args.tax_rate.is_some() {
        draft.set_tax_rate(args.tax_rate);
    }

    let estimate = draft.build_estimate(Local::now().date_naive());
    info!(id = %estimate.id, grand_total = %estimate.totals.grand_total, "estimate built");

    let mut store = MemoryStore::new();
    store.save(estimate.clone());

    print!("{}", render::render_document(&estimate, &company));
    println!();
    println!("Share message:");
    println!("{}", render::share_message(&estimate));

    if args.json {
        println!();
        println!(
            "{}",
            serde_json::to_string_pretty(&estimate).context("cannot serialize estimate")?
        );
    }

    let summary = summarize(&store.list());
    println!();
    println!(
        "Dashboard: {} estimate(s), total value {}, average {}",
        summary.estimate_count,
        render::format_amount(currency, summary.total_value),
        render::format_amount(currency, summary.average_value),
    );

    Ok(())
}

/// The demo session: a kitchen rewiring job with a removed spare line,
/// mirroring how the form is actually used.
fn sample_draft(currency: Currency) -> EstimateDraft {
    let mut draft = EstimateDraft::new();
    draft.project_title = "Kitchen Rewiring".to_string();
    draft.client_name = "John Smith".to_string();
    draft.client_address = "123 Main Street, Accra".to_string();
    draft.currency = currency;
    draft.notes = "Includes a 12-month workmanship warranty.".to_string();

    let wire = draft.add_material();
    draft.update_material(wire, MaterialField::Name("12 AWG copper wire (100m)".to_string()));
    draft.update_material(wire, MaterialField::Quantity(parse_amount("2")));
    draft.update_material(wire, MaterialField::UnitCost(parse_amount("5.50")));

    let sockets = draft.add_material();
    draft.update_material(sockets, MaterialField::Name("Twin socket outlets".to_string()));
    draft.update_material(sockets, MaterialField::Brand(Some("Legrand".to_string())));
    draft.update_material(sockets, MaterialField::Quantity(parse_amount("6")));
    draft.update_material(sockets, MaterialField::UnitCost(parse_amount("12.75")));

    // A line added by mistake and removed again.
    let spare = draft.add_material();
    draft.remove_material(spare);

    let install = draft.add_labor();
    draft.update_labor(
        install,
        LaborField::Description("Installation & wiring".to_string()),
    );
    draft.update_labor(install, LaborField::Hours(parse_amount("3")));

    draft
}
