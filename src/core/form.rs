//! Form-layer adapter for the company VAT field.
//!
//! Turns a submitted `{value, declaredCountry}` pair into a [`Verdict`] or
//! into per-field error messages the caller can return as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{MAX_VAT_LENGTH, ValidatorConfig};
use super::error::VatError;
use super::registry::VatRegistry;
use super::validator::{VatValidator, Verdict};

/// Form field holding the VAT number.
pub const VAT_FIELD: &str = "company_vat";

/// Form field holding the declared billing country.
pub const COUNTRY_FIELD: &str = "country";

/// Submitted form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatInput {
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub declared_country: Option<String>,
}

impl VatInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            declared_country: None,
        }
    }

    pub fn declared_country(mut self, country: impl Into<String>) -> Self {
        self.declared_country = Some(country.into());
        self
    }
}

/// Error messages for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub field: String,
    pub messages: Vec<String>,
}

impl From<VatError> for FieldErrors {
    fn from(e: VatError) -> Self {
        Self {
            field: VAT_FIELD.to_string(),
            messages: vec![e.to_string()],
        }
    }
}

/// All field errors of a rejected submission, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(Vec<FieldErrors>);

impl FormErrors {
    /// Append `message` to `field`, creating the entry if needed.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|e| e.field == field) {
            Some(entry) => entry.messages.push(message),
            None => self.0.push(FieldErrors {
                field: field.to_string(),
                messages: vec![message],
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.messages.as_slice())
    }

    pub fn fields(&self) -> &[FieldErrors] {
        &self.0
    }

    pub fn to_json(&self) -> serde_json::Value {
        // A Vec of plain structs always serializes.
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl From<VatError> for FormErrors {
    fn from(e: VatError) -> Self {
        Self(vec![e.into()])
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", entry.field, entry.messages.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// The company VAT field together with its sibling country field.
///
/// The account forms accept an empty VAT number; the dedicated VAT check
/// form marks it `required` and skips the registry.
#[derive(Debug, Clone, Copy)]
pub struct VatForm<'r> {
    validator: VatValidator<'r>,
    required: bool,
    max_length: usize,
}

impl<'r> VatForm<'r> {
    pub fn new(validator: VatValidator<'r>) -> Self {
        Self {
            validator,
            required: false,
            max_length: MAX_VAT_LENGTH,
        }
    }

    pub fn from_config(config: &ValidatorConfig, registry: Option<&'r dyn VatRegistry>) -> Self {
        let mut validator = VatValidator::from_config(config);
        if let Some(registry) = registry {
            validator = validator.with_registry(registry);
        }
        Self {
            validator,
            required: false,
            max_length: config.max_length,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Validate a submission.
    ///
    /// # Errors
    ///
    /// Returns every field error found. Errors from the VAT validator are
    /// reported on [`VAT_FIELD`]; a malformed country on [`COUNTRY_FIELD`].
    pub fn validate(&self, input: &VatInput) -> Result<Verdict, FormErrors> {
        let mut errors = FormErrors::default();

        let declared = input.declared_country.as_deref().filter(|c| !c.is_empty());
        if let Some(country) = declared {
            if country.chars().count() != 2 {
                errors.add(COUNTRY_FIELD, "Field must be exactly 2 characters long.");
            }
        }

        let value = input.value.as_deref().filter(|v| !v.trim().is_empty());
        let verdict = match value {
            None if self.required => {
                errors.add(VAT_FIELD, "This field is required.");
                None
            }
            None => Some(Verdict::Absent),
            Some(v) if v.chars().count() > self.max_length => {
                errors.add(
                    VAT_FIELD,
                    format!("Field cannot be longer than {} characters.", self.max_length),
                );
                None
            }
            Some(v) => match self.validator.validate(Some(v), declared) {
                Ok(verdict) => Some(verdict),
                Err(e) => {
                    errors.add(VAT_FIELD, e.to_string());
                    None
                }
            },
        };

        match verdict {
            Some(verdict) if errors.is_empty() => Ok(verdict),
            _ => Err(errors),
        }
    }
}
