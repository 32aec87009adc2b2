//! # vatform
//!
//! EU VAT identification number validation for account and billing forms:
//! normalization, per-country structural grammars, declared-country
//! matching, and an optional registry (VIES) existence check.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatform::*;
//!
//! // Format only: no registry configured.
//! let validator = VatValidator::new().check_registry(false);
//!
//! let verdict = validator.validate(Some("FRX2345678901"), Some("FR")).unwrap();
//! assert_eq!(verdict.number().unwrap().country(), Country::France);
//!
//! let err = validator.validate(Some("XX123456789"), None).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid country code.");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Grammars, validator, registry trait, form adapter |
//! | `vies` | Blocking client for the EU VIES REST API |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "vies")]
pub mod vies;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
