//! VAT number validation as performed by the account forms.
//!
//! A single pass over the input:
//!
//! 1. Absent input (`None`, empty, whitespace) is not validated.
//! 2. The declared country is compared with the first two characters of the
//!    **raw** input, before normalization. `"fr"` does not match `"FR..."`
//!    here even though the grammar check below is case-insensitive.
//! 3. The input is normalized and dispatched on its prefix to the country's
//!    grammar (see [`rules`](super::rules)).
//! 4. Optionally, the registry confirms the number exists.

use tracing::{debug, info, warn};

use super::config::ValidatorConfig;
use super::error::{RegistryError, VatError};
use super::number::VatNumber;
use super::registry::{RegistryRecord, VatRegistry};

/// Outcome of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No value was supplied; nothing to validate.
    Absent,
    /// The number follows its country's grammar; the registry was not asked.
    Structural(VatNumber),
    /// The registry confirmed the number.
    Registered {
        number: VatNumber,
        record: RegistryRecord,
    },
}

impl Verdict {
    /// The validated number, unless the input was absent.
    pub fn number(&self) -> Option<&VatNumber> {
        match self {
            Verdict::Absent => None,
            Verdict::Structural(number) | Verdict::Registered { number, .. } => Some(number),
        }
    }

    /// The registry's answer, if it was consulted.
    pub fn record(&self) -> Option<&RegistryRecord> {
        match self {
            Verdict::Registered { record, .. } => Some(record),
            _ => None,
        }
    }
}

/// Validates VAT numbers, optionally against an injected registry.
///
/// Holds no state between calls and can be shared across threads.
///
/// # Example
///
/// ```
/// use vatform::{VatValidator, Verdict};
///
/// let validator = VatValidator::new().check_registry(false);
/// let verdict = validator.validate(Some(" be 0123456789 "), None).unwrap();
/// assert_eq!(verdict.number().unwrap().as_str(), "BE0123456789");
///
/// assert_eq!(validator.validate(None, None).unwrap(), Verdict::Absent);
/// assert!(validator.validate(Some("DE123456789"), Some("FR")).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct VatValidator<'r> {
    check_country_match: bool,
    check_registry: bool,
    registry: Option<&'r dyn VatRegistry>,
}

impl Default for VatValidator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VatValidator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VatValidator")
            .field("check_country_match", &self.check_country_match)
            .field("check_registry", &self.check_registry)
            .field("registry", &self.registry.is_some())
            .finish()
    }
}

impl<'r> VatValidator<'r> {
    /// Country matching and registry checking both enabled, no registry yet.
    pub fn new() -> Self {
        Self {
            check_country_match: true,
            check_registry: true,
            registry: None,
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            check_country_match: config.check_country_match,
            check_registry: config.check_registry,
            registry: None,
        }
    }

    pub fn with_registry(mut self, registry: &'r dyn VatRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn check_country_match(mut self, enabled: bool) -> Self {
        self.check_country_match = enabled;
        self
    }

    pub fn check_registry(mut self, enabled: bool) -> Self {
        self.check_registry = enabled;
        self
    }

    /// Validate `raw`, optionally against a `declared_country` from a
    /// sibling form field.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`VatError`]. A registry failure
    /// is [`VatError::RegistryUnavailable`], never a silent pass.
    pub fn validate(
        &self,
        raw: Option<&str>,
        declared_country: Option<&str>,
    ) -> Result<Verdict, VatError> {
        let raw = match raw {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Verdict::Absent),
        };

        if self.check_country_match {
            check_declared_country(raw, declared_country)?;
        }

        let number = VatNumber::parse(raw).inspect_err(|e| {
            debug!(error = %e, "VAT number failed structural check");
        })?;
        debug!(country = %number.country(), "VAT number passed structural check");

        if !self.check_registry {
            return Ok(Verdict::Structural(number));
        }

        let registry = self.registry.ok_or(RegistryError::NotConfigured)?;
        let record = registry.lookup(number.as_str()).map_err(|e| {
            warn!(country = %number.country(), error = %e, "VAT registry lookup failed");
            VatError::RegistryUnavailable(e)
        })?;

        if !record.valid {
            info!(country = %number.country(), "VAT registry rejected number");
            return Err(VatError::RegistryRejected);
        }

        Ok(Verdict::Registered { number, record })
    }
}

fn check_declared_country(raw: &str, declared: Option<&str>) -> Result<(), VatError> {
    let Some(declared) = declared.filter(|d| !d.is_empty()) else {
        return Ok(());
    };
    let prefix: String = raw.chars().take(2).collect();
    if declared != prefix {
        debug!(declared, "VAT number does not match declared country");
        return Err(VatError::CountryMismatch {
            declared: declared.to_string(),
            prefix,
        });
    }
    Ok(())
}
