#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_codec::{Decode, Encode, VarArray, VarOpaque, XdrString};

// Decoding untrusted bytes must never panic, and any value that decodes must
// re-encode to the identical bytes (canonical padding makes decode/encode a
// bijection on well-formed input).
macro_rules! check {
    ($ty:ty, $data:expr) => {
        if let Ok(value) = <$ty>::decode($data) {
            assert_eq!(value.encode().as_ref(), $data);
        }
    };
}

fuzz_target!(|data: &[u8]| {
    check!(u32, data);
    check!(i32, data);
    check!(u64, data);
    check!(i64, data);
    check!(bool, data);
    check!(Option<u64>, data);
    check!(XdrString<64>, data);
    check!(VarOpaque<64>, data);
    check!(VarArray<u32, 16>, data);
    check!(VarArray<VarOpaque<8>, 8>, data);
    check!(Option<VarArray<Option<u32>, 4>>, data);
});
