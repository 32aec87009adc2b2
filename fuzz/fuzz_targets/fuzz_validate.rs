#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        let validator = vatform::VatValidator::new().check_registry(false);
        if let Ok(verdict) = validator.validate(Some(s), None) {
            if let Some(number) = verdict.number() {
                // A passing number re-validates from its normalized form.
                assert!(vatform::validate_vat_format(number.as_str()).is_ok());
            }
        }
    }
});
