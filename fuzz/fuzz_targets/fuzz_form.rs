#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Split into value and declared country on the first NUL.
        let (value, country) = s.split_once('\0').unwrap_or((s, ""));
        let input = vatform::VatInput::new(value).declared_country(country);
        let form = vatform::VatForm::new(vatform::VatValidator::new().check_registry(false));
        if let Err(errors) = form.validate(&input) {
            assert!(!errors.is_empty());
        }
    }
});
