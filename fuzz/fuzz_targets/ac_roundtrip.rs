#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = ac::encode(data);
    let decoded = ac::decode(&encoded).expect("own output must decode");
    assert_eq!(data, &decoded[..]);

    // Arbitrary bytes may decode to anything, but must not panic.
    let _ = ac::decode(data);
});
