#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    // Arbitrary text must either decode or produce a structured error; when
    // it decodes, the text was canonical and must re-encode verbatim.
    if let Ok(bytes) = base985161::decode(text) {
        if !text.is_empty() {
            assert_eq!(base985161::encode(&bytes), text);
        }
    }
});
