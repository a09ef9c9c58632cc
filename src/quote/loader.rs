//! Load quote sets and customer profiles from input files
//!
//! The JSON loaders accept the full nested quote format (including add-ons).
//! The CSV loader accepts a flat quote sheet for spreadsheet-sourced sets;
//! add-ons cannot be expressed in the flat format and load as empty.

use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use csv::Reader;

use super::{CoverageType, CustomerProfile, Quote};

/// Raw CSV row matching the flat quote sheet columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InsuranceCompany")]
    insurance_company: String,
    #[serde(rename = "CoverageType")]
    coverage_type: String,
    #[serde(rename = "IDV")]
    idv: f64,
    #[serde(rename = "ODAmount")]
    od_amount: f64,
    #[serde(rename = "ThirdPartyAmount")]
    third_party_amount: f64,
    #[serde(rename = "AddOnsPremium")]
    add_ons_premium: f64,
    #[serde(rename = "GSTAmount")]
    gst_amount: f64,
    #[serde(rename = "TotalPremium")]
    total_premium: f64,
    #[serde(rename = "NCBDiscount")]
    ncb_discount: f64,
    #[serde(rename = "NCBDiscountAmount")]
    ncb_discount_amount: f64,
    #[serde(rename = "ODAmountAfterNCB")]
    od_amount_after_ncb: f64,
    #[serde(rename = "Accepted")]
    accepted: String,
    #[serde(rename = "PolicyDuration")]
    policy_duration: String,
    #[serde(rename = "PolicyDurationLabel")]
    policy_duration_label: String,
}

impl CsvRow {
    fn to_quote(self) -> Result<Quote, Box<dyn Error>> {
        let coverage_type = match self.coverage_type.as_str() {
            "Comprehensive" => CoverageType::Comprehensive,
            "StandaloneOD" => CoverageType::StandaloneOd,
            "ThirdParty" => CoverageType::ThirdParty,
            other => return Err(format!("Unknown CoverageType: {}", other).into()),
        };

        let accepted = match self.accepted.as_str() {
            "Y" | "y" | "true" => true,
            "N" | "n" | "false" | "" => false,
            other => return Err(format!("Unknown Accepted flag: {}", other).into()),
        };

        Ok(Quote {
            insurance_company: self.insurance_company,
            coverage_type,
            idv: self.idv,
            od_amount: self.od_amount,
            third_party_amount: self.third_party_amount,
            add_ons_premium: self.add_ons_premium,
            gst_amount: self.gst_amount,
            total_premium: self.total_premium,
            ncb_discount: self.ncb_discount,
            ncb_discount_amount: self.ncb_discount_amount,
            od_amount_after_ncb: self.od_amount_after_ncb,
            selected_add_ons: BTreeMap::new(),
            accepted,
            policy_duration: self.policy_duration,
            policy_duration_label: self.policy_duration_label,
        })
    }
}

/// Load a quote set from a JSON array file
pub fn load_quotes<P: AsRef<Path>>(path: P) -> Result<Vec<Quote>, Box<dyn Error>> {
    let file = File::open(path)?;
    let quotes: Vec<Quote> = serde_json::from_reader(file)?;
    Ok(quotes)
}

/// Load a quote set from any JSON reader (e.g., string buffer)
pub fn load_quotes_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Quote>, Box<dyn Error>> {
    let quotes: Vec<Quote> = serde_json::from_reader(reader)?;
    Ok(quotes)
}

/// Load a quote set from a flat CSV sheet
pub fn load_quotes_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Quote>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut quotes = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let quote = row.to_quote()?;
        quotes.push(quote);
    }

    Ok(quotes)
}

/// Load a customer profile from a JSON file
pub fn load_customer<P: AsRef<Path>>(path: P) -> Result<CustomerProfile, Box<dyn Error>> {
    let file = File::open(path)?;
    let customer: CustomerProfile = serde_json::from_reader(file)?;
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_quotes_from_json_reader() {
        let json = r#"[{
            "insuranceCompany": "Acme General",
            "coverageType": "comprehensive",
            "idv": 450000,
            "odAmount": 8000,
            "thirdPartyAmount": 2500,
            "addOnsPremium": 1200,
            "gstAmount": 1500,
            "totalPremium": 11600,
            "ncbDiscount": 20,
            "ncbDiscountAmount": 1600,
            "odAmountAfterNcb": 6400,
            "selectedAddOns": {
                "zeroDep": { "description": "Zero Depreciation", "amount": 850 }
            },
            "accepted": true,
            "policyDuration": "1y",
            "policyDurationLabel": "1 Year"
        }]"#;

        let quotes = load_quotes_from_reader(json.as_bytes()).expect("JSON should parse");
        assert_eq!(quotes.len(), 1);
        let q = &quotes[0];
        assert_eq!(q.insurance_company, "Acme General");
        assert_eq!(q.coverage_type, CoverageType::Comprehensive);
        assert!(q.accepted);
        assert_eq!(q.selected_add_ons.len(), 1);
        assert!(!q.selected_add_ons["zeroDep"].included);
    }

    #[test]
    fn test_csv_row_rejects_unknown_coverage() {
        let row = CsvRow {
            insurance_company: "Acme General".to_string(),
            coverage_type: "FullyComp".to_string(),
            idv: 450_000.0,
            od_amount: 8_000.0,
            third_party_amount: 2_500.0,
            add_ons_premium: 0.0,
            gst_amount: 1_500.0,
            total_premium: 12_000.0,
            ncb_discount: 0.0,
            ncb_discount_amount: 0.0,
            od_amount_after_ncb: 8_000.0,
            accepted: "N".to_string(),
            policy_duration: "1y".to_string(),
            policy_duration_label: "1 Year".to_string(),
        };
        assert!(row.to_quote().is_err());
    }

    #[test]
    fn test_csv_accepted_flag_parsing() {
        for (flag, expected) in [("Y", true), ("true", true), ("N", false), ("", false)] {
            let row = CsvRow {
                insurance_company: "Acme General".to_string(),
                coverage_type: "ThirdParty".to_string(),
                idv: 0.0,
                od_amount: 0.0,
                third_party_amount: 2_500.0,
                add_ons_premium: 0.0,
                gst_amount: 450.0,
                total_premium: 2_950.0,
                ncb_discount: 0.0,
                ncb_discount_amount: 0.0,
                od_amount_after_ncb: 0.0,
                accepted: flag.to_string(),
                policy_duration: "1y".to_string(),
                policy_duration_label: "1 Year".to_string(),
            };
            let quote = row.to_quote().expect("row should convert");
            assert_eq!(quote.accepted, expected, "flag {:?}", flag);
        }
    }
}
