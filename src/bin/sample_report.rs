//! Generate a sample comparison report with a representative quote set
//!
//! This binary writes sample_report.pdf so the rendered output can be eyed
//! without wiring up real input files.

use std::collections::BTreeMap;
use std::fs;

use quote_report::quote::{AddOn, CoverageType, CustomerProfile, Quote};
use quote_report::{generate_comparison_report, render_pdf};

fn quote(
    company: &str,
    idv: f64,
    od: f64,
    ncb_pct: f64,
    third_party: f64,
    add_ons_premium: f64,
    accepted: bool,
) -> Quote {
    let ncb_amount = od * ncb_pct / 100.0;
    let od_after_ncb = od - ncb_amount;
    let taxable = od_after_ncb + third_party + add_ons_premium;
    let gst = taxable * 0.18;

    Quote {
        insurance_company: company.to_string(),
        coverage_type: CoverageType::Comprehensive,
        idv,
        od_amount: od,
        third_party_amount: third_party,
        add_ons_premium,
        gst_amount: gst,
        total_premium: taxable + gst,
        ncb_discount: ncb_pct,
        ncb_discount_amount: ncb_amount,
        od_amount_after_ncb: od_after_ncb,
        selected_add_ons: BTreeMap::new(),
        accepted,
        policy_duration: "1y".to_string(),
        policy_duration_label: "1 Year".to_string(),
    }
}

fn main() {
    env_logger::init();

    println!("Generating sample comparison report...\n");

    let mut national = quote("National Insurance", 465_000.0, 8_400.0, 25.0, 2_671.0, 1_450.0, false);
    national.selected_add_ons.insert(
        "zeroDep".to_string(),
        AddOn {
            description: "Zero Depreciation".to_string(),
            amount: 950.0,
            included: false,
        },
    );
    national.selected_add_ons.insert(
        "engineProtect".to_string(),
        AddOn {
            description: "Engine Protection".to_string(),
            amount: 500.0,
            included: false,
        },
    );
    national.selected_add_ons.insert(
        "rsa".to_string(),
        AddOn {
            description: "Roadside Assistance".to_string(),
            amount: 0.0,
            included: true,
        },
    );

    let mut digit = quote("Digit General", 452_000.0, 7_900.0, 25.0, 2_671.0, 0.0, true);
    digit.selected_add_ons.insert(
        "rsa".to_string(),
        AddOn {
            description: "Roadside Assistance".to_string(),
            amount: 0.0,
            included: true,
        },
    );
    digit.selected_add_ons.insert(
        "keyProtect".to_string(),
        AddOn {
            description: "Key Replacement".to_string(),
            amount: 0.0,
            included: true,
        },
    );

    let quotes = vec![
        national,
        digit,
        quote("ICICI Lombard", 478_000.0, 9_100.0, 20.0, 2_671.0, 800.0, false),
        quote("Bajaj Allianz", 460_000.0, 8_800.0, 25.0, 2_671.0, 0.0, false),
    ];

    let customer = CustomerProfile {
        name: Some("Asha Rao".to_string()),
        phone: Some("98400 12345".to_string()),
        vehicle_make: Some("Maruti Suzuki".to_string()),
        vehicle_model: Some("Swift".to_string()),
        vehicle_variant: Some("VXI".to_string()),
        registration_year: Some("2021".to_string()),
        vehicle_type: Some("Private Car".to_string()),
        prior_claim: Some(false),
    };

    let document = generate_comparison_report(&quotes, &customer)
        .expect("sample quotes are well formed");
    let bytes = render_pdf(&document);

    let path = "sample_report.pdf";
    fs::write(path, &bytes).expect("Unable to write sample PDF");

    println!("Quotes compared: {}", quotes.len());
    println!("Pages: {}", document.page_count());
    println!("Written to: {}", path);
}
