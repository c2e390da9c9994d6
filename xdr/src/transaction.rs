//! Transactions: the 27 operation kinds, preconditions, memos, envelopes,
//! and the payloads that get hashed for signing.

use crate::base::{
    AccountId, Asset, AssetCode12, AssetCode4, AssetType, ChangeTrustAsset, ClaimableBalanceId,
    DataValue, Duration, ExtensionPoint, Hash, MuxedAccount, PoolId, Price, SequenceNumber,
    Signature, SignatureHint, Signer, SignerKey, String32, String64, TimePoint, Uint256,
};
use crate::contract::{
    ContractIdPreimage, HostFunction, SorobanAuthorizationEntry, SorobanAuthorizedInvocation,
    SorobanTransactionData,
};
use crate::ledger::{Claimant, LedgerKey};
use crate::macros::{xdr_enum, xdr_struct, xdr_union, xdr_union_int};
use crate::{VarArray, XdrString};

/// A transaction carries at most this many operations.
pub const MAX_OPS_PER_TX: u32 = 100;

xdr_enum! {
    pub enum OperationType {
        CreateAccount = 0,
        Payment = 1,
        PathPaymentStrictReceive = 2,
        ManageSellOffer = 3,
        CreatePassiveSellOffer = 4,
        SetOptions = 5,
        ChangeTrust = 6,
        AllowTrust = 7,
        AccountMerge = 8,
        Inflation = 9,
        ManageData = 10,
        BumpSequence = 11,
        ManageBuyOffer = 12,
        PathPaymentStrictSend = 13,
        CreateClaimableBalance = 14,
        ClaimClaimableBalance = 15,
        BeginSponsoringFutureReserves = 16,
        EndSponsoringFutureReserves = 17,
        RevokeSponsorship = 18,
        Clawback = 19,
        ClawbackClaimableBalance = 20,
        SetTrustLineFlags = 21,
        LiquidityPoolDeposit = 22,
        LiquidityPoolWithdraw = 23,
        InvokeHostFunction = 24,
        ExtendFootprintTtl = 25,
        RestoreFootprint = 26,
    }
}

xdr_struct! {
    pub struct CreateAccountOp {
        pub destination: AccountId,
        pub starting_balance: i64,
    }
}

xdr_struct! {
    pub struct PaymentOp {
        pub destination: MuxedAccount,
        pub asset: Asset,
        pub amount: i64,
    }
}

xdr_struct! {
    pub struct PathPaymentStrictReceiveOp {
        pub send_asset: Asset,
        pub send_max: i64,
        pub destination: MuxedAccount,
        pub dest_asset: Asset,
        pub dest_amount: i64,
        pub path: VarArray<Asset, 5>,
    }
}

xdr_struct! {
    pub struct PathPaymentStrictSendOp {
        pub send_asset: Asset,
        pub send_amount: i64,
        pub destination: MuxedAccount,
        pub dest_asset: Asset,
        pub dest_min: i64,
        pub path: VarArray<Asset, 5>,
    }
}

xdr_struct! {
    pub struct ManageSellOfferOp {
        pub selling: Asset,
        pub buying: Asset,
        pub amount: i64,
        pub price: Price,
        pub offer_id: i64,
    }
}

xdr_struct! {
    pub struct ManageBuyOfferOp {
        pub selling: Asset,
        pub buying: Asset,
        pub buy_amount: i64,
        pub price: Price,
        pub offer_id: i64,
    }
}

xdr_struct! {
    pub struct CreatePassiveSellOfferOp {
        pub selling: Asset,
        pub buying: Asset,
        pub amount: i64,
        pub price: Price,
    }
}

xdr_struct! {
    /// Every field is optional; only the set ones change account state.
    pub struct SetOptionsOp {
        pub inflation_dest: Option<AccountId>,
        pub clear_flags: Option<u32>,
        pub set_flags: Option<u32>,
        pub master_weight: Option<u32>,
        pub low_threshold: Option<u32>,
        pub med_threshold: Option<u32>,
        pub high_threshold: Option<u32>,
        pub home_domain: Option<String32>,
        pub signer: Option<Signer>,
    }
}

xdr_struct! {
    pub struct ChangeTrustOp {
        pub line: ChangeTrustAsset,
        pub limit: i64,
    }
}

xdr_union! {
    /// An asset code alone, without its issuer (the trustor identifies the
    /// issuer in context).
    pub enum AssetCode : AssetType {
        AssetType::CreditAlphanum4 => CreditAlphanum4(AssetCode4),
        AssetType::CreditAlphanum12 => CreditAlphanum12(AssetCode12),
    }
}

xdr_struct! {
    pub struct AllowTrustOp {
        pub trustor: AccountId,
        pub asset: AssetCode,
        pub authorize: u32,
    }
}

xdr_struct! {
    pub struct ManageDataOp {
        pub data_name: String64,
        pub data_value: Option<DataValue>,
    }
}

xdr_struct! {
    pub struct BumpSequenceOp {
        pub bump_to: SequenceNumber,
    }
}

xdr_struct! {
    pub struct CreateClaimableBalanceOp {
        pub asset: Asset,
        pub amount: i64,
        pub claimants: VarArray<Claimant, 10>,
    }
}

xdr_struct! {
    pub struct ClaimClaimableBalanceOp {
        pub balance_id: ClaimableBalanceId,
    }
}

xdr_struct! {
    pub struct BeginSponsoringFutureReservesOp {
        pub sponsored_id: AccountId,
    }
}

xdr_enum! {
    pub enum RevokeSponsorshipType {
        LedgerEntry = 0,
        Signer = 1,
    }
}

xdr_struct! {
    pub struct RevokeSponsorshipOpSigner {
        pub account_id: AccountId,
        pub signer_key: SignerKey,
    }
}

xdr_union! {
    pub enum RevokeSponsorshipOp : RevokeSponsorshipType {
        RevokeSponsorshipType::LedgerEntry => LedgerEntry(LedgerKey),
        RevokeSponsorshipType::Signer => Signer(RevokeSponsorshipOpSigner),
    }
}

xdr_struct! {
    pub struct ClawbackOp {
        pub asset: Asset,
        pub from: MuxedAccount,
        pub amount: i64,
    }
}

xdr_struct! {
    pub struct ClawbackClaimableBalanceOp {
        pub balance_id: ClaimableBalanceId,
    }
}

xdr_struct! {
    pub struct SetTrustLineFlagsOp {
        pub trustor: AccountId,
        pub asset: Asset,
        pub clear_flags: u32,
        pub set_flags: u32,
    }
}

xdr_struct! {
    pub struct LiquidityPoolDepositOp {
        pub liquidity_pool_id: PoolId,
        pub max_amount_a: i64,
        pub max_amount_b: i64,
        pub min_price: Price,
        pub max_price: Price,
    }
}

xdr_struct! {
    pub struct LiquidityPoolWithdrawOp {
        pub liquidity_pool_id: PoolId,
        pub amount: i64,
        pub min_amount_a: i64,
        pub min_amount_b: i64,
    }
}

xdr_struct! {
    pub struct InvokeHostFunctionOp {
        pub host_function: HostFunction,
        pub auth: VarArray<SorobanAuthorizationEntry>,
    }
}

xdr_struct! {
    pub struct ExtendFootprintTtlOp {
        pub ext: ExtensionPoint,
        pub extend_to: u32,
    }
}

xdr_struct! {
    pub struct RestoreFootprintOp {
        pub ext: ExtensionPoint,
    }
}

xdr_union! {
    /// The per-kind payload of an operation. Arm order and numbering follow
    /// [`OperationType`] exactly.
    pub enum OperationBody : OperationType {
        OperationType::CreateAccount => CreateAccount(CreateAccountOp),
        OperationType::Payment => Payment(PaymentOp),
        OperationType::PathPaymentStrictReceive => PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
        OperationType::ManageSellOffer => ManageSellOffer(ManageSellOfferOp),
        OperationType::CreatePassiveSellOffer => CreatePassiveSellOffer(CreatePassiveSellOfferOp),
        OperationType::SetOptions => SetOptions(SetOptionsOp),
        OperationType::ChangeTrust => ChangeTrust(ChangeTrustOp),
        OperationType::AllowTrust => AllowTrust(AllowTrustOp),
        OperationType::AccountMerge => AccountMerge(MuxedAccount),
        OperationType::Inflation => Inflation,
        OperationType::ManageData => ManageData(ManageDataOp),
        OperationType::BumpSequence => BumpSequence(BumpSequenceOp),
        OperationType::ManageBuyOffer => ManageBuyOffer(ManageBuyOfferOp),
        OperationType::PathPaymentStrictSend => PathPaymentStrictSend(PathPaymentStrictSendOp),
        OperationType::CreateClaimableBalance => CreateClaimableBalance(CreateClaimableBalanceOp),
        OperationType::ClaimClaimableBalance => ClaimClaimableBalance(ClaimClaimableBalanceOp),
        OperationType::BeginSponsoringFutureReserves => BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp),
        OperationType::EndSponsoringFutureReserves => EndSponsoringFutureReserves,
        OperationType::RevokeSponsorship => RevokeSponsorship(RevokeSponsorshipOp),
        OperationType::Clawback => Clawback(ClawbackOp),
        OperationType::ClawbackClaimableBalance => ClawbackClaimableBalance(ClawbackClaimableBalanceOp),
        OperationType::SetTrustLineFlags => SetTrustLineFlags(SetTrustLineFlagsOp),
        OperationType::LiquidityPoolDeposit => LiquidityPoolDeposit(LiquidityPoolDepositOp),
        OperationType::LiquidityPoolWithdraw => LiquidityPoolWithdraw(LiquidityPoolWithdrawOp),
        OperationType::InvokeHostFunction => InvokeHostFunction(InvokeHostFunctionOp),
        OperationType::ExtendFootprintTtl => ExtendFootprintTtl(ExtendFootprintTtlOp),
        OperationType::RestoreFootprint => RestoreFootprint(RestoreFootprintOp),
    }
}

xdr_struct! {
    pub struct Operation {
        pub source_account: Option<MuxedAccount>,
        pub body: OperationBody,
    }
}

xdr_enum! {
    pub enum MemoType {
        None = 0,
        Text = 1,
        Id = 2,
        Hash = 3,
        Return = 4,
    }
}

xdr_union! {
    pub enum Memo : MemoType {
        MemoType::None => None,
        MemoType::Text => Text(XdrString<28>),
        MemoType::Id => Id(u64),
        MemoType::Hash => Hash(Hash),
        MemoType::Return => Return(Hash),
    }
}

xdr_struct! {
    pub struct TimeBounds {
        pub min_time: TimePoint,
        pub max_time: TimePoint,
    }
}

xdr_struct! {
    pub struct LedgerBounds {
        pub min_ledger: u32,
        pub max_ledger: u32,
    }
}

xdr_struct! {
    pub struct PreconditionsV2 {
        pub time_bounds: Option<TimeBounds>,
        pub ledger_bounds: Option<LedgerBounds>,
        pub min_seq_num: Option<SequenceNumber>,
        pub min_seq_age: Duration,
        pub min_seq_ledger_gap: u32,
        pub extra_signers: VarArray<SignerKey, 2>,
    }
}

xdr_enum! {
    pub enum PreconditionType {
        None = 0,
        Time = 1,
        V2 = 2,
    }
}

xdr_union! {
    pub enum Preconditions : PreconditionType {
        PreconditionType::None => None,
        PreconditionType::Time => Time(TimeBounds),
        PreconditionType::V2 => V2(PreconditionsV2),
    }
}

xdr_union_int! {
    pub enum TransactionExt {
        0 => V0,
        1 => V1(SorobanTransactionData),
    }
}

xdr_struct! {
    /// The interior of a v1 envelope: what gets hashed (inside
    /// [`TransactionSignaturePayload`]) and signed.
    pub struct Transaction {
        pub source_account: MuxedAccount,
        pub fee: u32,
        pub seq_num: SequenceNumber,
        pub cond: Preconditions,
        pub memo: Memo,
        pub operations: VarArray<Operation, MAX_OPS_PER_TX>,
        pub ext: TransactionExt,
    }
}

xdr_struct! {
    pub struct DecoratedSignature {
        pub hint: SignatureHint,
        pub signature: Signature,
    }
}

xdr_struct! {
    pub struct TransactionV1Envelope {
        pub tx: Transaction,
        pub signatures: VarArray<DecoratedSignature, 20>,
    }
}

xdr_union_int! {
    pub enum TransactionV0Ext {
        0 => V0,
    }
}

xdr_struct! {
    /// The legacy transaction form: the source key is a bare Ed25519 key and
    /// preconditions are only time bounds.
    pub struct TransactionV0 {
        pub source_account_ed25519: Uint256,
        pub fee: u32,
        pub seq_num: SequenceNumber,
        pub time_bounds: Option<TimeBounds>,
        pub memo: Memo,
        pub operations: VarArray<Operation, MAX_OPS_PER_TX>,
        pub ext: TransactionV0Ext,
    }
}

xdr_struct! {
    pub struct TransactionV0Envelope {
        pub tx: TransactionV0,
        pub signatures: VarArray<DecoratedSignature, 20>,
    }
}

xdr_enum! {
    pub enum EnvelopeType {
        TxV0 = 0,
        Scp = 1,
        Tx = 2,
        Auth = 3,
        ScpValue = 4,
        TxFeeBump = 5,
        OpId = 6,
        PoolRevokeOpId = 7,
        ContractId = 8,
        SorobanAuthorization = 9,
    }
}

xdr_union! {
    pub enum FeeBumpTransactionInnerTx : EnvelopeType {
        EnvelopeType::Tx => Tx(TransactionV1Envelope),
    }
}

xdr_union_int! {
    pub enum FeeBumpTransactionExt {
        0 => V0,
    }
}

xdr_struct! {
    pub struct FeeBumpTransaction {
        pub fee_source: MuxedAccount,
        pub fee: i64,
        pub inner_tx: FeeBumpTransactionInnerTx,
        pub ext: FeeBumpTransactionExt,
    }
}

xdr_struct! {
    pub struct FeeBumpTransactionEnvelope {
        pub tx: FeeBumpTransaction,
        pub signatures: VarArray<DecoratedSignature, 20>,
    }
}

xdr_union! {
    /// A signed transaction ready for submission. Only the three transaction
    /// envelope kinds are valid here; other [`EnvelopeType`] values fail
    /// decode.
    pub enum TransactionEnvelope : EnvelopeType {
        EnvelopeType::TxV0 => TxV0(TransactionV0Envelope),
        EnvelopeType::Tx => Tx(TransactionV1Envelope),
        EnvelopeType::TxFeeBump => TxFeeBump(FeeBumpTransactionEnvelope),
    }
}

xdr_union! {
    pub enum TransactionSignaturePayloadTaggedTransaction : EnvelopeType {
        EnvelopeType::Tx => Tx(Transaction),
        EnvelopeType::TxFeeBump => TxFeeBump(FeeBumpTransaction),
    }
}

xdr_struct! {
    /// The byte preimage that is SHA-256 hashed and signed: the network id
    /// followed by the tagged transaction.
    pub struct TransactionSignaturePayload {
        pub network_id: Hash,
        pub tagged_transaction: TransactionSignaturePayloadTaggedTransaction,
    }
}

xdr_struct! {
    pub struct HashIdPreimageOperationId {
        pub source_account: AccountId,
        pub seq_num: SequenceNumber,
        pub op_num: u32,
    }
}

xdr_struct! {
    pub struct HashIdPreimageRevokeId {
        pub source_account: AccountId,
        pub seq_num: SequenceNumber,
        pub op_num: u32,
        pub liquidity_pool_id: PoolId,
        pub asset: Asset,
    }
}

xdr_struct! {
    pub struct HashIdPreimageContractId {
        pub network_id: Hash,
        pub contract_id_preimage: ContractIdPreimage,
    }
}

xdr_struct! {
    pub struct HashIdPreimageSorobanAuthorization {
        pub network_id: Hash,
        pub nonce: i64,
        pub signature_expiration_ledger: u32,
        pub invocation: SorobanAuthorizedInvocation,
    }
}

xdr_union! {
    /// Preimages for derived identifiers (claimable balance ids, contract
    /// ids, Soroban authorization signatures).
    pub enum HashIdPreimage : EnvelopeType {
        EnvelopeType::OpId => OpId(HashIdPreimageOperationId),
        EnvelopeType::PoolRevokeOpId => PoolRevokeOpId(HashIdPreimageRevokeId),
        EnvelopeType::ContractId => ContractId(HashIdPreimageContractId),
        EnvelopeType::SorobanAuthorization => SorobanAuthorization(HashIdPreimageSorobanAuthorization),
    }
}
