use tracing_subscriber::EnvFilter;
use vatform::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Format validation (no network required)
    println!("=== VAT Number Format Validation ===\n");

    let validator = VatValidator::new().check_registry(false);

    let test_ids = [
        "DE123456789",
        " be 0123456789 ",
        "ATU12345678",
        "FRX2345678901",
        "NL123456789B01",
        "GB1234567",
        "DE12345678",  // too short
        "XX999999999", // unknown country
    ];

    for id in &test_ids {
        match validator.validate(Some(*id), None) {
            Ok(verdict) => match verdict.number() {
                Some(n) => println!("  {id:?} => valid (country={}, number={})", n.country(), n.number()),
                None => println!("  {id:?} => absent"),
            },
            Err(e) => println!("  {id:?} => INVALID: {e}"),
        }
    }

    // Declared country check
    println!("\n=== Declared Country ===\n");

    let pairs = [("DE123456789", "DE"), ("DE123456789", "FR"), ("de123456789", "DE")];
    for (id, country) in &pairs {
        match validator.validate(Some(*id), Some(*country)) {
            Ok(_) => println!("  {id} / {country} => valid"),
            Err(e) => println!("  {id} / {country} => INVALID: {e}"),
        }
    }

    // Form errors as returned to the client
    println!("\n=== Form Errors (JSON) ===\n");

    let form = VatForm::new(validator).required(true);
    for input in [
        VatInput::default(),
        VatInput::new("ESXX234567X"),
        VatInput::new("DE123456789").declared_country("Germany"),
    ] {
        match form.validate(&input) {
            Ok(verdict) => println!("  {input:?} => {verdict:?}"),
            Err(errors) => println!("  {}", errors.to_json()),
        }
    }
}
