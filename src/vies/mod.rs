//! EU VIES registry client.
//!
//! # Example
//!
//! ```ignore
//! use vatform::{VatValidator, ValidatorConfig};
//! use vatform::vies::ViesClient;
//!
//! let config = ValidatorConfig::default();
//! let vies = ViesClient::from_config(&config.registry)?;
//! let verdict = VatValidator::from_config(&config)
//!     .with_registry(&vies)
//!     .validate(Some("DE123456789"), Some("DE"))?;
//! ```

mod client;

pub use client::{ViesClient, parse_response};
