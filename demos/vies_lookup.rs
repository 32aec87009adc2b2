//! Check VAT numbers against the live VIES service.
//!
//! ```sh
//! RUST_LOG=vatform=debug cargo run --example vies_lookup --features vies -- DE123456789
//! ```

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vatform::vies::ViesClient;
use vatform::*;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ValidatorConfig::default();
    let vies = match ViesClient::from_config(&config.registry) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("cannot build VIES client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let validator = VatValidator::from_config(&config).with_registry(&vies);

    let mut failed = false;
    for arg in std::env::args().skip(1) {
        match validator.validate(Some(arg.as_str()), None) {
            Ok(verdict) => {
                let mut profile = CompanyProfile::default();
                profile.apply(&verdict);
                println!("{arg}: registered");
                println!("  name:    {}", profile.company_name.as_deref().unwrap_or("-"));
                println!("  address: {}", profile.company_details.as_deref().unwrap_or("-"));
                println!("  country: {}", profile.country.as_deref().unwrap_or("-"));
            }
            Err(e) => {
                failed = true;
                println!("{arg}: {e}");
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
