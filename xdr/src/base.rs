//! Basic schema types shared across the ledger, transaction, and contract
//! graphs: keys, hashes, assets, signers, and the small fixed-width opaques.
//!
//! Field order and discriminant values mirror the network schema and are
//! normative: reordering a field or renumbering a variant changes the wire
//! format.

use crate::macros::{xdr_enum, xdr_fixed_opaque, xdr_struct, xdr_union, xdr_union_int};
use crate::{VarOpaque, XdrString};

/// Ledger close time, seconds since the Unix epoch.
pub type TimePoint = u64;

/// A span of time in seconds.
pub type Duration = u64;

/// Account sequence number.
pub type SequenceNumber = i64;

xdr_fixed_opaque! {
    /// A SHA-256 digest.
    pub struct Hash([u8; 32]);
}

xdr_fixed_opaque! {
    /// A 256-bit value, most commonly an Ed25519 public key.
    pub struct Uint256([u8; 32]);
}

xdr_fixed_opaque! {
    /// A 1–4 character asset code, zero-padded on the right.
    pub struct AssetCode4([u8; 4]);
}

xdr_fixed_opaque! {
    /// A 5–12 character asset code, zero-padded on the right.
    pub struct AssetCode12([u8; 12]);
}

xdr_fixed_opaque! {
    /// Master weight and low/medium/high operation thresholds.
    pub struct Thresholds([u8; 4]);
}

xdr_fixed_opaque! {
    /// The last four bytes of a signer's public key, used to pick the key a
    /// signature belongs to.
    pub struct SignatureHint([u8; 4]);
}

/// An Ed25519 signature.
pub type Signature = VarOpaque<64>;

pub type String32 = XdrString<32>;
pub type String64 = XdrString<64>;

/// The value of a managed-data entry.
pub type DataValue = VarOpaque<64>;

/// A liquidity pool identifier.
pub type PoolId = Hash;

/// A contract identifier.
pub type ContractId = Hash;

xdr_enum! {
    pub enum PublicKeyType {
        Ed25519 = 0,
    }
}

xdr_union! {
    /// A network public key. Ed25519 is the only declared kind.
    pub enum PublicKey : PublicKeyType {
        PublicKeyType::Ed25519 => Ed25519(Uint256),
    }
}

pub type AccountId = PublicKey;
pub type NodeId = PublicKey;

xdr_enum! {
    pub enum CryptoKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
        MuxedEd25519 = 0x100,
    }
}

xdr_struct! {
    pub struct MuxedAccountMed25519 {
        pub id: u64,
        pub ed25519: Uint256,
    }
}

xdr_union! {
    /// An account address, optionally carrying a 64-bit multiplexing id that
    /// lets one ledger account serve many logical customers.
    pub enum MuxedAccount : CryptoKeyType {
        CryptoKeyType::Ed25519 => Ed25519(Uint256),
        CryptoKeyType::MuxedEd25519 => MuxedEd25519(MuxedAccountMed25519),
    }
}

xdr_enum! {
    pub enum SignerKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
    }
}

xdr_struct! {
    pub struct SignerKeyEd25519SignedPayload {
        pub ed25519: Uint256,
        pub payload: VarOpaque<64>,
    }
}

xdr_union! {
    pub enum SignerKey : SignerKeyType {
        SignerKeyType::Ed25519 => Ed25519(Uint256),
        SignerKeyType::PreAuthTx => PreAuthTx(Uint256),
        SignerKeyType::HashX => HashX(Uint256),
        SignerKeyType::Ed25519SignedPayload => Ed25519SignedPayload(SignerKeyEd25519SignedPayload),
    }
}

xdr_struct! {
    pub struct Signer {
        pub key: SignerKey,
        pub weight: u32,
    }
}

xdr_struct! {
    /// A price ratio: `n` over `d`.
    pub struct Price {
        pub n: i32,
        pub d: i32,
    }
}

xdr_struct! {
    pub struct Liabilities {
        pub buying: i64,
        pub selling: i64,
    }
}

xdr_enum! {
    pub enum AssetType {
        Native = 0,
        CreditAlphanum4 = 1,
        CreditAlphanum12 = 2,
        PoolShare = 3,
    }
}

xdr_struct! {
    pub struct AlphaNum4 {
        pub asset_code: AssetCode4,
        pub issuer: AccountId,
    }
}

xdr_struct! {
    pub struct AlphaNum12 {
        pub asset_code: AssetCode12,
        pub issuer: AccountId,
    }
}

xdr_union! {
    /// The native lumen or an issued credit asset.
    pub enum Asset : AssetType {
        AssetType::Native => Native,
        AssetType::CreditAlphanum4 => CreditAlphanum4(AlphaNum4),
        AssetType::CreditAlphanum12 => CreditAlphanum12(AlphaNum12),
    }
}

xdr_union! {
    /// An asset as held on a trust line, which may also be a pool share.
    pub enum TrustLineAsset : AssetType {
        AssetType::Native => Native,
        AssetType::CreditAlphanum4 => CreditAlphanum4(AlphaNum4),
        AssetType::CreditAlphanum12 => CreditAlphanum12(AlphaNum12),
        AssetType::PoolShare => PoolShare(PoolId),
    }
}

xdr_enum! {
    pub enum LiquidityPoolType {
        ConstantProduct = 0,
    }
}

xdr_struct! {
    pub struct LiquidityPoolConstantProductParameters {
        pub asset_a: Asset,
        pub asset_b: Asset,
        pub fee: i32,
    }
}

xdr_union! {
    pub enum LiquidityPoolParameters : LiquidityPoolType {
        LiquidityPoolType::ConstantProduct => ConstantProduct(LiquidityPoolConstantProductParameters),
    }
}

xdr_union! {
    /// An asset as named by a change-trust operation; pool shares are
    /// identified by their full parameters rather than a pool id.
    pub enum ChangeTrustAsset : AssetType {
        AssetType::Native => Native,
        AssetType::CreditAlphanum4 => CreditAlphanum4(AlphaNum4),
        AssetType::CreditAlphanum12 => CreditAlphanum12(AlphaNum12),
        AssetType::PoolShare => PoolShare(LiquidityPoolParameters),
    }
}

xdr_enum! {
    pub enum ClaimableBalanceIdType {
        V0 = 0,
    }
}

xdr_union! {
    pub enum ClaimableBalanceId : ClaimableBalanceIdType {
        ClaimableBalanceIdType::V0 => V0(Hash),
    }
}

xdr_union_int! {
    /// Reserved extension slot: only the empty case is defined today.
    pub enum ExtensionPoint {
        0 => V0,
    }
}
