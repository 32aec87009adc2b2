//! Normalization and the validated [`VatNumber`] type.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::countries::Country;
use super::error::VatError;
use super::rules;

/// Uppercase `raw` and drop whitespace, hyphens and periods.
///
/// ```
/// assert_eq!(vatform::normalize(" be 0123.456-789 "), "BE0123456789");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}

/// A normalized VAT number that passed its country's grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VatNumber {
    country: Country,
    #[serde(rename = "vat")]
    normalized: String,
}

impl VatNumber {
    /// Normalize `raw` and check it against its country's grammar.
    ///
    /// No registry is consulted.
    pub fn parse(raw: &str) -> Result<Self, VatError> {
        let normalized = normalize(raw);
        let chars: Vec<char> = normalized.chars().collect();

        let prefix: String = chars.iter().take(2).collect();
        // Inputs shorter than two characters never match a code.
        let Some(country) = Country::from_code(&prefix) else {
            return Err(VatError::UnknownCountry(prefix));
        };

        let rule = rules::rule(country);
        if !rule.matches(&chars) {
            return Err(VatError::StructuralMismatch {
                country,
                expected: rule.expected,
            });
        }

        Ok(Self {
            country,
            normalized,
        })
    }

    pub fn country(&self) -> Country {
        self.country
    }

    /// The full normalized number, prefix included.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The part after the country prefix.
    pub fn number(&self) -> &str {
        // The prefix is two ASCII letters.
        &self.normalized[2..]
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for VatNumber {
    type Err = VatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for VatNumber {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

/// Validate a VAT number by format only (no network call, no country match).
///
/// Returns the normalized number on success.
pub fn validate_vat_format(raw: &str) -> Result<VatNumber, VatError> {
    VatNumber::parse(raw)
}
