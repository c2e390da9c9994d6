#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_xdr::{
    Decode, Encode, LedgerCloseMeta, LedgerEntry, LedgerKey, ScSpecEntry, ScVal,
    TransactionEnvelope, TransactionResult,
};

// The top-level types API consumers actually decode from untrusted payloads.
// Decoding must never panic; anything that decodes must re-encode to the
// identical bytes.
macro_rules! check {
    ($ty:ty, $data:expr) => {
        if let Ok(value) = <$ty>::decode($data) {
            assert_eq!(value.encode().as_ref(), $data);
        }
    };
}

fuzz_target!(|data: &[u8]| {
    check!(TransactionEnvelope, data);
    check!(TransactionResult, data);
    check!(ScVal, data);
    check!(LedgerEntry, data);
    check!(LedgerKey, data);
    check!(LedgerCloseMeta, data);
    check!(ScSpecEntry, data);
});
