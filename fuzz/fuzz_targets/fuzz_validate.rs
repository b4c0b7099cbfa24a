#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; any answer is fine as long as local implies format.
        let format_ok = euvat::validate_format(s);
        let local_ok = euvat::validate_local(s);
        assert!(format_ok || !local_ok, "local passed without format: {s:?}");
        let _ = euvat::modulus_outcome(s);
    }
});
