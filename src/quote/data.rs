//! Quote and customer data structures matching the comparison input format

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GenerationFailed;

/// Coverage type of a motor insurance quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageType {
    /// Own damage plus third-party liability
    Comprehensive,
    /// Standalone own-damage cover
    StandaloneOd,
    /// Third-party liability only
    ThirdParty,
}

impl CoverageType {
    /// Display label used in rendered tables
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Comprehensive => "Comprehensive",
            CoverageType::StandaloneOd => "Standalone OD",
            CoverageType::ThirdParty => "Third Party",
        }
    }
}

/// A single add-on cover attached to a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Human-readable description, e.g. "Zero Depreciation"
    pub description: String,

    /// Additional premium charged for this add-on
    pub amount: f64,

    /// Whether the add-on is bundled into the base premium at no extra charge
    #[serde(default)]
    pub included: bool,
}

impl AddOn {
    /// Bundled add-ons (included or zero-amount) are listed, not itemized
    /// in the premium breakdown.
    pub fn is_bundled(&self) -> bool {
        self.included || self.amount <= 0.0
    }
}

/// A single insurer quote in a comparison set
///
/// All monetary fields are trusted as provided; the engine aggregates and
/// displays them without recomputing the premium identity
/// `total_premium = od_amount_after_ncb + third_party_amount
///                  + add_ons_premium + gst_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Insurer name, e.g. "National Insurance"
    pub insurance_company: String,

    /// Coverage type of the quoted policy
    pub coverage_type: CoverageType,

    /// Insured declared value of the vehicle
    pub idv: f64,

    /// Own-damage premium before NCB
    pub od_amount: f64,

    /// Third-party liability premium
    pub third_party_amount: f64,

    /// Total premium charged for non-bundled add-ons
    pub add_ons_premium: f64,

    /// GST on the taxable subtotal
    pub gst_amount: f64,

    /// Final premium payable
    pub total_premium: f64,

    /// No-claim bonus percentage (0-50)
    pub ncb_discount: f64,

    /// Rupee amount deducted from OD for the NCB
    pub ncb_discount_amount: f64,

    /// Own-damage premium after the NCB deduction
    pub od_amount_after_ncb: f64,

    /// Add-ons keyed by add-on id; BTreeMap keeps listing order stable
    #[serde(default)]
    pub selected_add_ons: BTreeMap<String, AddOn>,

    /// Whether the customer chose this quote (at most one per set by
    /// business process; not enforced here)
    #[serde(default)]
    pub accepted: bool,

    /// Policy term identifier, e.g. "1y"
    pub policy_duration: String,

    /// Display label for the policy term, e.g. "1 Year"
    pub policy_duration_label: String,
}

impl Quote {
    /// Check every numeric field for validity.
    ///
    /// A field that is non-finite or negative (or an NCB percentage outside
    /// 0-50) marks the quote as malformed. Returns the first offending field.
    pub fn validate(&self) -> Result<(), GenerationFailed> {
        let numeric_fields: [(&'static str, f64); 8] = [
            ("idv", self.idv),
            ("odAmount", self.od_amount),
            ("thirdPartyAmount", self.third_party_amount),
            ("addOnsPremium", self.add_ons_premium),
            ("gstAmount", self.gst_amount),
            ("totalPremium", self.total_premium),
            ("ncbDiscountAmount", self.ncb_discount_amount),
            ("odAmountAfterNcb", self.od_amount_after_ncb),
        ];

        for (field, value) in numeric_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GenerationFailed::MalformedQuote {
                    provider: self.insurance_company.clone(),
                    field,
                });
            }
        }

        if !self.ncb_discount.is_finite() || !(0.0..=50.0).contains(&self.ncb_discount) {
            return Err(GenerationFailed::MalformedQuote {
                provider: self.insurance_company.clone(),
                field: "ncbDiscount",
            });
        }

        for add_on in self.selected_add_ons.values() {
            if !add_on.amount.is_finite() || add_on.amount < 0.0 {
                return Err(GenerationFailed::MalformedQuote {
                    provider: self.insurance_company.clone(),
                    field: "selectedAddOns",
                });
            }
        }

        Ok(())
    }

    /// Add-ons itemized in the premium breakdown (positive extra premium)
    pub fn premium_add_ons(&self) -> impl Iterator<Item = (&String, &AddOn)> {
        self.selected_add_ons.iter().filter(|(_, a)| !a.is_bundled())
    }

    /// Add-ons bundled into the base premium
    pub fn bundled_add_ons(&self) -> impl Iterator<Item = (&String, &AddOn)> {
        self.selected_add_ons.iter().filter(|(_, a)| a.is_bundled())
    }
}

/// Customer and vehicle profile printed in the report header block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_variant: Option<String>,
    pub registration_year: Option<String>,
    pub vehicle_type: Option<String>,
    pub prior_claim: Option<bool>,
}

impl CustomerProfile {
    /// Label/value pairs in display order; `None` values render as
    /// "Not specified" downstream.
    pub fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("Customer Name", self.name.clone()),
            ("Phone", self.phone.clone()),
            ("Vehicle Make", self.vehicle_make.clone()),
            ("Vehicle Model", self.vehicle_model.clone()),
            ("Variant", self.vehicle_variant.clone()),
            ("Registration Year", self.registration_year.clone()),
            ("Vehicle Type", self.vehicle_type.clone()),
            (
                "Prior Claim",
                self.prior_claim.map(|c| if c { "Yes" } else { "No" }.to_string()),
            ),
        ]
    }
}
