use thiserror::Error;

use super::countries::Country;

/// Why a VAT number was rejected.
///
/// `Display` renders the message shown to the user next to the form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// The declared billing country differs from the number's prefix.
    #[error("The VAT number does not match the selected country.")]
    CountryMismatch {
        /// Country supplied alongside the number.
        declared: String,
        /// First two characters of the raw number.
        prefix: String,
    },

    /// The prefix is not a supported VAT country code.
    #[error("Invalid country code.")]
    UnknownCountry(String),

    /// The prefix is known but the number does not follow its grammar.
    #[error("{expected}")]
    StructuralMismatch {
        country: Country,
        expected: &'static str,
    },

    /// The registry answered and does not know the number.
    #[error("Invalid VAT Number provided")]
    RegistryRejected,

    /// The registry could not be consulted.
    #[error(transparent)]
    RegistryUnavailable(#[from] RegistryError),
}

/// Failure of the external registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// Connection or transport failure.
    #[error("VAT registry network error: {0}")]
    Network(String),

    /// The lookup did not finish within the configured timeout.
    #[error("VAT registry timed out: {0}")]
    Timeout(String),

    /// The service answered with an error (e.g. member state unavailable).
    #[error("VAT registry error: {0}")]
    Api(String),

    /// The response could not be understood.
    #[error("VAT registry parse error: {0}")]
    Parse(String),

    /// Registry checking is enabled but no registry was supplied.
    #[error("no VAT registry configured")]
    NotConfigured,
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_carries_underlying_message() {
        let err = VatError::from(RegistryError::Timeout("operation timed out".into()));
        assert_eq!(err.to_string(), "VAT registry timed out: operation timed out");
    }

    #[test]
    fn unavailable_does_not_repeat_itself_in_source_chain() {
        use std::error::Error as _;

        let err = VatError::from(RegistryError::NotConfigured);
        assert_eq!(err.to_string(), "no VAT registry configured");
        assert!(err.source().is_none());
    }

    #[test]
    fn structural_message_is_rule_message() {
        let err = VatError::StructuralMismatch {
            country: Country::Germany,
            expected: "German VAT numbers must be 'DE' followed by 9 digits.",
        };
        assert_eq!(
            err.to_string(),
            "German VAT numbers must be 'DE' followed by 9 digits."
        );
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(
            VatError::UnknownCountry("XX".into()).to_string(),
            "Invalid country code."
        );
        assert_eq!(
            VatError::RegistryRejected.to_string(),
            "Invalid VAT Number provided"
        );
    }
}
