//! Jurisdictions with a known VAT number grammar.
//!
//! Greece uses its VAT prefix `EL`, not the ISO code `GR`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A jurisdiction whose VAT numbers this crate can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Country {
    Austria,
    Belgium,
    Bulgaria,
    Cyprus,
    CzechRepublic,
    Denmark,
    Estonia,
    Finland,
    France,
    Germany,
    Greece,
    Hungary,
    Ireland,
    Italy,
    Latvia,
    Lithuania,
    Luxembourg,
    Malta,
    Netherlands,
    Poland,
    Portugal,
    Slovakia,
    Slovenia,
    Spain,
    Sweden,
    UnitedKingdom,
    Romania,
    Croatia,
}

impl Country {
    /// Every supported jurisdiction.
    pub const ALL: [Country; 28] = [
        Country::Austria,
        Country::Belgium,
        Country::Bulgaria,
        Country::Cyprus,
        Country::CzechRepublic,
        Country::Denmark,
        Country::Estonia,
        Country::Finland,
        Country::France,
        Country::Germany,
        Country::Greece,
        Country::Hungary,
        Country::Ireland,
        Country::Italy,
        Country::Latvia,
        Country::Lithuania,
        Country::Luxembourg,
        Country::Malta,
        Country::Netherlands,
        Country::Poland,
        Country::Portugal,
        Country::Slovakia,
        Country::Slovenia,
        Country::Spain,
        Country::Sweden,
        Country::UnitedKingdom,
        Country::Romania,
        Country::Croatia,
    ];

    /// Two-letter VAT prefix.
    pub const fn code(self) -> &'static str {
        match self {
            Country::Austria => "AT",
            Country::Belgium => "BE",
            Country::Bulgaria => "BG",
            Country::Cyprus => "CY",
            Country::CzechRepublic => "CZ",
            Country::Denmark => "DK",
            Country::Estonia => "EE",
            Country::Finland => "FI",
            Country::France => "FR",
            Country::Germany => "DE",
            Country::Greece => "EL",
            Country::Hungary => "HU",
            Country::Ireland => "IE",
            Country::Italy => "IT",
            Country::Latvia => "LV",
            Country::Lithuania => "LT",
            Country::Luxembourg => "LU",
            Country::Malta => "MT",
            Country::Netherlands => "NL",
            Country::Poland => "PL",
            Country::Portugal => "PT",
            Country::Slovakia => "SK",
            Country::Slovenia => "SI",
            Country::Spain => "ES",
            Country::Sweden => "SE",
            Country::UnitedKingdom => "GB",
            Country::Romania => "RO",
            Country::Croatia => "HR",
        }
    }

    /// Look up a VAT prefix, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Country> {
        if code.len() != 2 {
            return None;
        }
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a supported VAT prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported VAT country code '{0}'")]
pub struct UnknownCountryCode(pub String);

impl FromStr for Country {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::from_code(s).ok_or_else(|| UnknownCountryCode(s.to_string()))
    }
}

impl TryFrom<String> for Country {
    type Error = UnknownCountryCode;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Country> for String {
    fn from(c: Country) -> Self {
        c.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(Country::from_code("AT"), Some(Country::Austria));
        assert_eq!(Country::from_code("EL"), Some(Country::Greece));
        assert_eq!(Country::from_code("GB"), Some(Country::UnitedKingdom));
        assert_eq!(Country::from_code("hr"), Some(Country::Croatia));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(Country::from_code("XX"), None);
        assert_eq!(Country::from_code("GR"), None);
        assert_eq!(Country::from_code(""), None);
        assert_eq!(Country::from_code("DEU"), None);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = Country::ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Country::ALL.len());
    }

    #[test]
    fn serde_uses_code() {
        let json = serde_json::to_string(&Country::Netherlands).unwrap();
        assert_eq!(json, "\"NL\"");
        let back: Country = serde_json::from_str("\"nl\"").unwrap();
        assert_eq!(back, Country::Netherlands);
        assert!(serde_json::from_str::<Country>("\"XX\"").is_err());
    }
}
