//! The seam to an external VAT registry (VIES or equivalent).
//!
//! The validator never performs I/O itself: callers inject a
//! [`VatRegistry`] and the validator makes at most one lookup per call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::RegistryError;

/// What the registry knows about a VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryRecord {
    /// Whether the number is currently registered.
    pub valid: bool,
    /// Registered company name, if disclosed.
    pub name: Option<String>,
    /// Registered address, if disclosed.
    pub address: Option<String>,
    /// Country code as reported by the registry.
    pub country_code: String,
    /// Date the registry answered.
    pub request_date: Option<NaiveDate>,
}

/// An external VAT registry.
///
/// Implementations receive the full normalized number (`"DE123456789"`).
/// Timeouts and transport failures are reported as [`RegistryError`];
/// `Ok` with `valid == false` means the registry answered "not registered".
pub trait VatRegistry: Send + Sync {
    fn lookup(&self, vat_number: &str) -> Result<RegistryRecord, RegistryError>;
}

impl<F> VatRegistry for F
where
    F: Fn(&str) -> Result<RegistryRecord, RegistryError> + Send + Sync,
{
    fn lookup(&self, vat_number: &str) -> Result<RegistryRecord, RegistryError> {
        self(vat_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_registries() {
        let registry = |vat: &str| -> Result<RegistryRecord, RegistryError> {
            Ok(RegistryRecord {
                valid: vat.starts_with("DE"),
                name: None,
                address: None,
                country_code: vat[..2].to_string(),
                request_date: None,
            })
        };
        assert!(registry.lookup("DE123456789").unwrap().valid);
        assert!(!registry.lookup("AT123456789").unwrap().valid);
    }

    #[test]
    fn record_json_is_camel_case() {
        let record = RegistryRecord {
            valid: true,
            name: Some("ACME GMBH".into()),
            address: None,
            country_code: "DE".into(),
            request_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["countryCode"], "DE");
        assert_eq!(json["requestDate"], "2024-06-15");
    }
}
