#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = base985161::encode(data);
    let decoded = base985161::decode(&text).expect("encoder output is always valid text");
    assert_eq!(decoded, data);
});
