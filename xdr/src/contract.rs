//! Soroban smart-contract values, host functions, and authorization.
//!
//! [`ScVal`] is the deepest type in the graph: vectors and maps hold further
//! `ScVal`s by direct recursive delegation, so decode runs under the
//! reader's depth budget.

use crate::base::{AccountId, Asset, ContractId, ExtensionPoint, Hash, Uint256};
use crate::ledger::LedgerKey;
use crate::macros::{xdr_enum, xdr_struct, xdr_union};
use crate::{VarArray, VarOpaque, XdrString};

xdr_enum! {
    pub enum ScValType {
        Bool = 0,
        Void = 1,
        Error = 2,
        U32 = 3,
        I32 = 4,
        U64 = 5,
        I64 = 6,
        Timepoint = 7,
        Duration = 8,
        U128 = 9,
        I128 = 10,
        U256 = 11,
        I256 = 12,
        Bytes = 13,
        String = 14,
        Symbol = 15,
        Vec = 16,
        Map = 17,
        Address = 18,
        ContractInstance = 19,
        LedgerKeyContractInstance = 20,
        LedgerKeyNonce = 21,
    }
}

xdr_enum! {
    pub enum ScErrorType {
        Contract = 0,
        WasmVm = 1,
        Context = 2,
        Storage = 3,
        Object = 4,
        Crypto = 5,
        Events = 6,
        Budget = 7,
        Value = 8,
        Auth = 9,
    }
}

xdr_enum! {
    pub enum ScErrorCode {
        ArithDomain = 0,
        IndexBounds = 1,
        InvalidInput = 2,
        MissingValue = 3,
        ExistingValue = 4,
        ExceededLimit = 5,
        InvalidAction = 6,
        InternalError = 7,
        UnexpectedType = 8,
        UnexpectedSize = 9,
    }
}

xdr_union! {
    /// A host or contract error. Contract errors carry the contract's own
    /// code; host subsystems carry an [`ScErrorCode`] or nothing.
    pub enum ScError : ScErrorType {
        ScErrorType::Contract => Contract(u32),
        ScErrorType::WasmVm => WasmVm,
        ScErrorType::Context => Context,
        ScErrorType::Storage => Storage,
        ScErrorType::Object => Object,
        ScErrorType::Crypto => Crypto,
        ScErrorType::Events => Events,
        ScErrorType::Budget => Budget,
        ScErrorType::Value => Value(ScErrorCode),
        ScErrorType::Auth => Auth(ScErrorCode),
    }
}

xdr_struct! {
    /// A 128-bit unsigned integer as two 64-bit words, high part first.
    pub struct UInt128Parts {
        pub hi: u64,
        pub lo: u64,
    }
}

xdr_struct! {
    /// A 128-bit signed integer as two 64-bit words, high part first.
    pub struct Int128Parts {
        pub hi: i64,
        pub lo: u64,
    }
}

xdr_struct! {
    /// A 256-bit unsigned integer as four 64-bit words, high part first.
    pub struct UInt256Parts {
        pub hi_hi: u64,
        pub hi_lo: u64,
        pub lo_hi: u64,
        pub lo_lo: u64,
    }
}

xdr_struct! {
    /// A 256-bit signed integer as four 64-bit words, high part first.
    pub struct Int256Parts {
        pub hi_hi: i64,
        pub hi_lo: u64,
        pub lo_hi: u64,
        pub lo_lo: u64,
    }
}

pub type ScBytes = VarOpaque;
pub type ScString = XdrString;
pub type ScSymbol = XdrString<32>;
pub type ScVec = VarArray<ScVal>;
pub type ScMap = VarArray<ScMapEntry>;

xdr_struct! {
    pub struct ScMapEntry {
        pub key: ScVal,
        pub val: ScVal,
    }
}

xdr_enum! {
    pub enum ScAddressType {
        Account = 0,
        Contract = 1,
    }
}

xdr_union! {
    pub enum ScAddress : ScAddressType {
        ScAddressType::Account => Account(AccountId),
        ScAddressType::Contract => Contract(ContractId),
    }
}

xdr_struct! {
    pub struct ScNonceKey {
        pub nonce: i64,
    }
}

xdr_enum! {
    pub enum ContractExecutableType {
        Wasm = 0,
        StellarAsset = 1,
    }
}

xdr_union! {
    pub enum ContractExecutable : ContractExecutableType {
        ContractExecutableType::Wasm => Wasm(Hash),
        ContractExecutableType::StellarAsset => StellarAsset,
    }
}

xdr_struct! {
    pub struct ScContractInstance {
        pub executable: ContractExecutable,
        pub storage: Option<ScMap>,
    }
}

xdr_union! {
    /// Any value a Soroban contract can hold or pass: the sum of scalars,
    /// wide integers as parts, byte strings, recursive vectors and maps,
    /// addresses, and instance/ledger-key markers.
    pub enum ScVal : ScValType {
        ScValType::Bool => Bool(bool),
        ScValType::Void => Void,
        ScValType::Error => Error(ScError),
        ScValType::U32 => U32(u32),
        ScValType::I32 => I32(i32),
        ScValType::U64 => U64(u64),
        ScValType::I64 => I64(i64),
        ScValType::Timepoint => Timepoint(crate::base::TimePoint),
        ScValType::Duration => Duration(crate::base::Duration),
        ScValType::U128 => U128(UInt128Parts),
        ScValType::I128 => I128(Int128Parts),
        ScValType::U256 => U256(UInt256Parts),
        ScValType::I256 => I256(Int256Parts),
        ScValType::Bytes => Bytes(ScBytes),
        ScValType::String => String(ScString),
        ScValType::Symbol => Symbol(ScSymbol),
        ScValType::Vec => Vec(Option<ScVec>),
        ScValType::Map => Map(Option<ScMap>),
        ScValType::Address => Address(ScAddress),
        ScValType::ContractInstance => ContractInstance(ScContractInstance),
        ScValType::LedgerKeyContractInstance => LedgerKeyContractInstance,
        ScValType::LedgerKeyNonce => LedgerKeyNonce(ScNonceKey),
    }
}

xdr_struct! {
    pub struct InvokeContractArgs {
        pub contract_address: ScAddress,
        pub function_name: ScSymbol,
        pub args: VarArray<ScVal>,
    }
}

xdr_enum! {
    pub enum ContractIdPreimageType {
        Address = 0,
        Asset = 1,
    }
}

xdr_struct! {
    pub struct ContractIdPreimageFromAddress {
        pub address: ScAddress,
        pub salt: Uint256,
    }
}

xdr_union! {
    pub enum ContractIdPreimage : ContractIdPreimageType {
        ContractIdPreimageType::Address => Address(ContractIdPreimageFromAddress),
        ContractIdPreimageType::Asset => Asset(Asset),
    }
}

xdr_struct! {
    pub struct CreateContractArgs {
        pub contract_id_preimage: ContractIdPreimage,
        pub executable: ContractExecutable,
    }
}

xdr_struct! {
    pub struct CreateContractArgsV2 {
        pub contract_id_preimage: ContractIdPreimage,
        pub executable: ContractExecutable,
        pub constructor_args: VarArray<ScVal>,
    }
}

xdr_enum! {
    pub enum HostFunctionType {
        InvokeContract = 0,
        CreateContract = 1,
        UploadContractWasm = 2,
        CreateContractV2 = 3,
    }
}

xdr_union! {
    pub enum HostFunction : HostFunctionType {
        HostFunctionType::InvokeContract => InvokeContract(InvokeContractArgs),
        HostFunctionType::CreateContract => CreateContract(CreateContractArgs),
        HostFunctionType::UploadContractWasm => UploadContractWasm(VarOpaque),
        HostFunctionType::CreateContractV2 => CreateContractV2(CreateContractArgsV2),
    }
}

xdr_enum! {
    pub enum SorobanAuthorizedFunctionType {
        ContractFn = 0,
        CreateContractHostFn = 1,
        CreateContractV2HostFn = 2,
    }
}

xdr_union! {
    pub enum SorobanAuthorizedFunction : SorobanAuthorizedFunctionType {
        SorobanAuthorizedFunctionType::ContractFn => ContractFn(InvokeContractArgs),
        SorobanAuthorizedFunctionType::CreateContractHostFn => CreateContractHostFn(CreateContractArgs),
        SorobanAuthorizedFunctionType::CreateContractV2HostFn => CreateContractV2HostFn(CreateContractArgsV2),
    }
}

xdr_struct! {
    /// A call tree being authorized: the function itself plus every nested
    /// call made on the signer's behalf.
    pub struct SorobanAuthorizedInvocation {
        pub function: SorobanAuthorizedFunction,
        pub sub_invocations: VarArray<SorobanAuthorizedInvocation>,
    }
}

xdr_struct! {
    pub struct SorobanAddressCredentials {
        pub address: ScAddress,
        pub nonce: i64,
        pub signature_expiration_ledger: u32,
        pub signature: ScVal,
    }
}

xdr_enum! {
    pub enum SorobanCredentialsType {
        SourceAccount = 0,
        Address = 1,
    }
}

xdr_union! {
    pub enum SorobanCredentials : SorobanCredentialsType {
        SorobanCredentialsType::SourceAccount => SourceAccount,
        SorobanCredentialsType::Address => Address(SorobanAddressCredentials),
    }
}

xdr_struct! {
    pub struct SorobanAuthorizationEntry {
        pub credentials: SorobanCredentials,
        pub root_invocation: SorobanAuthorizedInvocation,
    }
}

xdr_struct! {
    /// The ledger entries a Soroban transaction may read and write.
    pub struct LedgerFootprint {
        pub read_only: VarArray<LedgerKey>,
        pub read_write: VarArray<LedgerKey>,
    }
}

xdr_struct! {
    pub struct SorobanResources {
        pub footprint: LedgerFootprint,
        pub instructions: u32,
        pub read_bytes: u32,
        pub write_bytes: u32,
    }
}

xdr_struct! {
    pub struct SorobanTransactionData {
        pub ext: ExtensionPoint,
        pub resources: SorobanResources,
        pub resource_fee: i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::PublicKey;
    use crate::{Decode, Encode, Error};

    #[test]
    fn test_scalar_vals_round_trip() {
        let values = [
            ScVal::Bool(true),
            ScVal::Void,
            ScVal::Error(ScError::Value(ScErrorCode::UnexpectedSize)),
            ScVal::U32(u32::MAX),
            ScVal::I32(-1),
            ScVal::U64(0),
            ScVal::I64(i64::MIN),
            ScVal::Timepoint(1_700_000_000),
            ScVal::Duration(60),
            ScVal::LedgerKeyContractInstance,
            ScVal::LedgerKeyNonce(ScNonceKey { nonce: -7 }),
        ];
        for value in values {
            let encoded = value.encode();
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(ScVal::decode(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_i128_parts_round_trip() {
        let value = ScVal::I128(Int128Parts { hi: 0, lo: 100 });
        let encoded = value.encode();
        // Discriminant word plus two 64-bit words, high first.
        assert_eq!(
            encoded.as_ref(),
            &[
                0x00, 0x00, 0x00, 0x0A, //
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64,
            ]
        );
        assert_eq!(ScVal::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn test_u256_parts_round_trip() {
        let value = ScVal::U256(UInt256Parts {
            hi_hi: 1,
            hi_lo: 2,
            lo_hi: 3,
            lo_lo: 4,
        });
        let encoded = value.encode();
        assert_eq!(encoded.len(), 4 + 32);
        assert_eq!(ScVal::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn test_nested_collections_round_trip() {
        // A vec of maps of addresses: three levels of recursion.
        let address = ScVal::Address(ScAddress::Account(PublicKey::Ed25519(Uint256([1; 32]))));
        let map = ScMap::try_from(vec![ScMapEntry {
            key: ScVal::Symbol(ScSymbol::try_from("owner").unwrap()),
            val: address,
        }])
        .unwrap();
        let value = ScVal::Vec(Some(
            ScVec::try_from(vec![ScVal::Map(Some(map)), ScVal::Map(None)]).unwrap(),
        ));
        let encoded = value.encode();
        assert_eq!(ScVal::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn test_unknown_val_type_fails() {
        let wire = [0x00, 0x00, 0x00, 0x40];
        assert_eq!(
            ScVal::decode(&wire),
            Err(Error::InvalidDiscriminant {
                offset: 0,
                ty: "ScValType",
                value: 64,
            })
        );
    }

    #[test]
    fn test_depth_bomb_rejected() {
        // SCV_VEC(present, count 1) repeated far past the depth budget, then
        // a terminal void. Must fail with the depth error, not a stack
        // overflow.
        let mut wire = Vec::new();
        for _ in 0..600 {
            wire.extend_from_slice(&[0, 0, 0, 16]); // SCV_VEC
            wire.extend_from_slice(&[0, 0, 0, 1]); // present
            wire.extend_from_slice(&[0, 0, 0, 1]); // one element
        }
        wire.extend_from_slice(&[0, 0, 0, 1]); // SCV_VOID
        assert!(matches!(
            ScVal::decode(&wire),
            Err(Error::DepthLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_moderate_nesting_accepted() {
        let mut value = ScVal::U32(7);
        for _ in 0..50 {
            value = ScVal::Vec(Some(ScVec::try_from(vec![value]).unwrap()));
        }
        let encoded = value.encode();
        assert_eq!(ScVal::decode(&encoded).unwrap(), value);
    }

    #[test]
    fn test_authorization_round_trip() {
        let invocation = SorobanAuthorizedInvocation {
            function: SorobanAuthorizedFunction::ContractFn(InvokeContractArgs {
                contract_address: ScAddress::Contract(Hash([2; 32])),
                function_name: ScSymbol::try_from("transfer").unwrap(),
                args: VarArray::try_from(vec![ScVal::U32(1)]).unwrap(),
            }),
            sub_invocations: VarArray::try_from(vec![SorobanAuthorizedInvocation {
                function: SorobanAuthorizedFunction::CreateContractHostFn(CreateContractArgs {
                    contract_id_preimage: ContractIdPreimage::Asset(Asset::Native),
                    executable: ContractExecutable::StellarAsset,
                }),
                sub_invocations: VarArray::new(),
            }])
            .unwrap(),
        };
        let entry = SorobanAuthorizationEntry {
            credentials: SorobanCredentials::Address(SorobanAddressCredentials {
                address: ScAddress::Account(PublicKey::Ed25519(Uint256([3; 32]))),
                nonce: 99,
                signature_expiration_ledger: 1_000,
                signature: ScVal::Void,
            }),
            root_invocation: invocation,
        };
        let encoded = entry.encode();
        assert_eq!(SorobanAuthorizationEntry::decode(&encoded).unwrap(), entry);
    }

    #[test]
    fn test_transaction_data_round_trip() {
        let data = SorobanTransactionData {
            ext: ExtensionPoint::V0,
            resources: SorobanResources {
                footprint: LedgerFootprint {
                    read_only: VarArray::try_from(vec![LedgerKey::ContractCode(
                        crate::ledger::LedgerKeyContractCode { hash: Hash([1; 32]) },
                    )])
                    .unwrap(),
                    read_write: VarArray::new(),
                },
                instructions: 1_000_000,
                read_bytes: 4096,
                write_bytes: 1024,
            },
            resource_fee: 500,
        };
        let encoded = data.encode();
        assert_eq!(SorobanTransactionData::decode(&encoded).unwrap(), data);
    }
}
