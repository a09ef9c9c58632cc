//! Quote Report CLI
//!
//! Command-line interface for generating comparison report PDFs from quote
//! and customer input files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use quote_report::quote::{load_customer, load_quotes, load_quotes_csv, CustomerProfile};
use quote_report::{generate_comparison_report, render_pdf};

#[derive(Parser, Debug)]
#[command(name = "quote_report", about = "Generate a motor insurance quote comparison report")]
struct Args {
    /// Quote input file, JSON array or CSV (by extension)
    #[arg(long)]
    quotes: PathBuf,

    /// Customer profile JSON; omitted fields render as "Not specified"
    #[arg(long)]
    customer: Option<PathBuf>,

    /// Output directory for the generated PDF
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

/// Keep letters, digits, underscore and hyphen; everything else becomes '_'
fn sanitize_for_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Quote Report v{}", env!("CARGO_PKG_VERSION"));
    println!("==================\n");

    let quotes = if is_csv(&args.quotes) {
        load_quotes_csv(&args.quotes)
    } else {
        load_quotes(&args.quotes)
    }
    .map_err(|e| anyhow::anyhow!("{e}"))
    .with_context(|| format!("loading quotes from {}", args.quotes.display()))?;
    println!("Loaded {} quote(s) from {}", quotes.len(), args.quotes.display());

    let customer = match &args.customer {
        Some(path) => load_customer(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("loading customer profile from {}", path.display()))?,
        None => CustomerProfile::default(),
    };

    let document = generate_comparison_report(&quotes, &customer)?;
    let bytes = render_pdf(&document);

    let holder = customer.name.as_deref().unwrap_or("Customer");
    let filename = format!(
        "Quote_Comparison_{}_{}.pdf",
        sanitize_for_filename(holder),
        Local::now().format("%Y%m%d_%H%M%S"),
    );
    let out_path = args.out.join(filename);
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    fs::write(&out_path, &bytes)
        .with_context(|| format!("writing {}", out_path.display()))?;

    println!("\nReport: {} page(s), {} bytes", document.page_count(), bytes.len());
    println!("Written to: {}", out_path.display());

    Ok(())
}
