//! Fill company details from a registry-confirmed VAT number.

use serde::{Deserialize, Serialize};

use super::registry::RegistryRecord;
use super::validator::Verdict;

/// Company fields of an account that a registry answer can supply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: Option<String>,
    pub company_details: Option<String>,
    pub country: Option<String>,
    pub company_vat: Option<String>,
}

impl CompanyProfile {
    /// Fill empty fields from `record`. Fields already set are kept.
    ///
    /// Returns the names of the fields that were filled.
    pub fn prefill(&mut self, record: &RegistryRecord) -> Vec<&'static str> {
        let mut filled = Vec::new();
        if fill(&mut self.company_name, record.name.as_deref()) {
            filled.push("company_name");
        }
        if fill(&mut self.company_details, record.address.as_deref()) {
            filled.push("company_details");
        }
        if fill(&mut self.country, Some(record.country_code.as_str())) {
            filled.push("country");
        }
        filled
    }

    /// Store the validated number and prefill from the registry, if it
    /// was consulted. An absent verdict clears the stored number.
    pub fn apply(&mut self, verdict: &Verdict) -> Vec<&'static str> {
        self.company_vat = verdict.number().map(|n| n.as_str().to_string());
        match verdict.record() {
            Some(record) => self.prefill(record),
            None => Vec::new(),
        }
    }
}

fn fill(slot: &mut Option<String>, value: Option<&str>) -> bool {
    let empty = slot.as_deref().is_none_or(str::is_empty);
    match value {
        Some(v) if empty && !v.is_empty() => {
            *slot = Some(v.to_string());
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::number::VatNumber;

    fn record() -> RegistryRecord {
        RegistryRecord {
            valid: true,
            name: Some("ACME GMBH".into()),
            address: Some("MUSTERSTR 1\n10115 BERLIN".into()),
            country_code: "DE".into(),
            request_date: None,
        }
    }

    #[test]
    fn fills_empty_profile() {
        let mut profile = CompanyProfile::default();
        let filled = profile.prefill(&record());
        assert_eq!(filled, ["company_name", "company_details", "country"]);
        assert_eq!(profile.company_name.as_deref(), Some("ACME GMBH"));
        assert_eq!(profile.country.as_deref(), Some("DE"));
    }

    #[test]
    fn keeps_existing_values() {
        let mut profile = CompanyProfile {
            company_name: Some("Acme".into()),
            country: Some("AT".into()),
            ..CompanyProfile::default()
        };
        let filled = profile.prefill(&record());
        assert_eq!(filled, ["company_details"]);
        assert_eq!(profile.company_name.as_deref(), Some("Acme"));
        assert_eq!(profile.country.as_deref(), Some("AT"));
    }

    #[test]
    fn undisclosed_name_is_skipped() {
        let mut profile = CompanyProfile::default();
        let mut rec = record();
        rec.name = None;
        profile.prefill(&rec);
        assert!(profile.company_name.is_none());
    }

    #[test]
    fn apply_structural_verdict_sets_number_only() {
        let mut profile = CompanyProfile::default();
        let verdict = Verdict::Structural(VatNumber::parse("de 123456789").unwrap());
        assert!(profile.apply(&verdict).is_empty());
        assert_eq!(profile.company_vat.as_deref(), Some("DE123456789"));
        assert!(profile.company_name.is_none());
    }

    #[test]
    fn apply_registered_verdict_prefills() {
        let mut profile = CompanyProfile::default();
        let verdict = Verdict::Registered {
            number: VatNumber::parse("DE123456789").unwrap(),
            record: record(),
        };
        assert_eq!(profile.apply(&verdict).len(), 3);
    }
}
