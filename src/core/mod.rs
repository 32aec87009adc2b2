//! VAT number normalization, per-country grammars, and validation.
//!
//! This module has no I/O. Registry lookups go through the injected
//! [`VatRegistry`] trait; a VIES client lives behind the `vies` feature.

mod config;
mod countries;
mod error;
mod form;
mod number;
mod profile;
mod registry;
pub mod rules;
mod validator;

pub use config::*;
pub use countries::*;
pub use error::*;
pub use form::*;
pub use number::*;
pub use profile::*;
pub use registry::*;
pub use validator::*;
