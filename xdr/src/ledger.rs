//! Ledger entries, ledger keys, and the ledger header.
//!
//! Entry extension chains (`ext` fields) are `switch (int v)` unions in the
//! schema; each version adds fields without disturbing the wire form of the
//! versions before it.

use crate::base::{
    AccountId, Asset, ClaimableBalanceId, ContractId, DataValue, ExtensionPoint, Hash,
    Liabilities, LiquidityPoolConstantProductParameters, LiquidityPoolType, NodeId, PoolId, Price,
    Signature, Signer, String32, String64, Thresholds, TimePoint, TrustLineAsset,
};
use crate::contract::{ScAddress, ScVal};
use crate::macros::{xdr_enum, xdr_struct, xdr_union, xdr_union_int};
use crate::{VarArray, VarOpaque};

/// An account entry can carry at most this many signers.
pub const MAX_SIGNERS: u32 = 20;

/// A sponsoring account, when the entry's reserve is sponsored.
pub type SponsorshipDescriptor = Option<AccountId>;

xdr_struct! {
    pub struct AccountEntryExtensionV3 {
        pub ext: ExtensionPoint,
        pub seq_ledger: u32,
        pub seq_time: TimePoint,
    }
}

xdr_union_int! {
    pub enum AccountEntryExtensionV2Ext {
        0 => V0,
        3 => V3(AccountEntryExtensionV3),
    }
}

xdr_struct! {
    pub struct AccountEntryExtensionV2 {
        pub num_sponsored: u32,
        pub num_sponsoring: u32,
        pub signer_sponsoring_ids: VarArray<SponsorshipDescriptor, MAX_SIGNERS>,
        pub ext: AccountEntryExtensionV2Ext,
    }
}

xdr_union_int! {
    pub enum AccountEntryExtensionV1Ext {
        0 => V0,
        2 => V2(AccountEntryExtensionV2),
    }
}

xdr_struct! {
    pub struct AccountEntryExtensionV1 {
        pub liabilities: Liabilities,
        pub ext: AccountEntryExtensionV1Ext,
    }
}

xdr_union_int! {
    pub enum AccountEntryExt {
        0 => V0,
        1 => V1(AccountEntryExtensionV1),
    }
}

xdr_struct! {
    /// The primary entry for an account: balance, sequence number, signers,
    /// and flags.
    pub struct AccountEntry {
        pub account_id: AccountId,
        pub balance: i64,
        pub seq_num: crate::base::SequenceNumber,
        pub num_sub_entries: u32,
        pub inflation_dest: Option<AccountId>,
        pub flags: u32,
        pub home_domain: String32,
        pub thresholds: Thresholds,
        pub signers: VarArray<Signer, MAX_SIGNERS>,
        pub ext: AccountEntryExt,
    }
}

xdr_union_int! {
    pub enum TrustLineEntryExtensionV2Ext {
        0 => V0,
    }
}

xdr_struct! {
    pub struct TrustLineEntryExtensionV2 {
        pub liquidity_pool_use_count: i32,
        pub ext: TrustLineEntryExtensionV2Ext,
    }
}

xdr_union_int! {
    pub enum TrustLineEntryV1Ext {
        0 => V0,
        2 => V2(TrustLineEntryExtensionV2),
    }
}

xdr_struct! {
    pub struct TrustLineEntryV1 {
        pub liabilities: Liabilities,
        pub ext: TrustLineEntryV1Ext,
    }
}

xdr_union_int! {
    pub enum TrustLineEntryExt {
        0 => V0,
        1 => V1(TrustLineEntryV1),
    }
}

xdr_struct! {
    pub struct TrustLineEntry {
        pub account_id: AccountId,
        pub asset: TrustLineAsset,
        pub balance: i64,
        pub limit: i64,
        pub flags: u32,
        pub ext: TrustLineEntryExt,
    }
}

xdr_union_int! {
    pub enum OfferEntryExt {
        0 => V0,
    }
}

xdr_struct! {
    pub struct OfferEntry {
        pub seller_id: AccountId,
        pub offer_id: i64,
        pub selling: Asset,
        pub buying: Asset,
        pub amount: i64,
        pub price: Price,
        pub flags: u32,
        pub ext: OfferEntryExt,
    }
}

xdr_union_int! {
    pub enum DataEntryExt {
        0 => V0,
    }
}

xdr_struct! {
    pub struct DataEntry {
        pub account_id: AccountId,
        pub data_name: String64,
        pub data_value: DataValue,
        pub ext: DataEntryExt,
    }
}

xdr_enum! {
    pub enum ClaimPredicateType {
        Unconditional = 0,
        And = 1,
        Or = 2,
        Not = 3,
        BeforeAbsoluteTime = 4,
        BeforeRelativeTime = 5,
    }
}

xdr_union! {
    /// A recursive claim condition. `And`/`Or` nest through arrays and `Not`
    /// through an optional boxed predicate; decode depth is bounded by the
    /// reader.
    pub enum ClaimPredicate : ClaimPredicateType {
        ClaimPredicateType::Unconditional => Unconditional,
        ClaimPredicateType::And => And(VarArray<ClaimPredicate, 2>),
        ClaimPredicateType::Or => Or(VarArray<ClaimPredicate, 2>),
        ClaimPredicateType::Not => Not(Option<Box<ClaimPredicate>>),
        ClaimPredicateType::BeforeAbsoluteTime => BeforeAbsoluteTime(i64),
        ClaimPredicateType::BeforeRelativeTime => BeforeRelativeTime(i64),
    }
}

xdr_enum! {
    pub enum ClaimantType {
        V0 = 0,
    }
}

xdr_struct! {
    pub struct ClaimantV0 {
        pub destination: AccountId,
        pub predicate: ClaimPredicate,
    }
}

xdr_union! {
    pub enum Claimant : ClaimantType {
        ClaimantType::V0 => V0(ClaimantV0),
    }
}

xdr_union_int! {
    pub enum ClaimableBalanceEntryExtensionV1Ext {
        0 => V0,
    }
}

xdr_struct! {
    pub struct ClaimableBalanceEntryExtensionV1 {
        pub ext: ClaimableBalanceEntryExtensionV1Ext,
        pub flags: u32,
    }
}

xdr_union_int! {
    pub enum ClaimableBalanceEntryExt {
        0 => V0,
        1 => V1(ClaimableBalanceEntryExtensionV1),
    }
}

xdr_struct! {
    pub struct ClaimableBalanceEntry {
        pub balance_id: ClaimableBalanceId,
        pub claimants: VarArray<Claimant, 10>,
        pub asset: Asset,
        pub amount: i64,
        pub ext: ClaimableBalanceEntryExt,
    }
}

xdr_struct! {
    pub struct LiquidityPoolEntryConstantProduct {
        pub params: LiquidityPoolConstantProductParameters,
        pub reserve_a: i64,
        pub reserve_b: i64,
        pub total_pool_shares: i64,
        pub pool_shares_trust_line_count: i64,
    }
}

xdr_union! {
    pub enum LiquidityPoolEntryBody : LiquidityPoolType {
        LiquidityPoolType::ConstantProduct => ConstantProduct(LiquidityPoolEntryConstantProduct),
    }
}

xdr_struct! {
    pub struct LiquidityPoolEntry {
        pub liquidity_pool_id: PoolId,
        pub body: LiquidityPoolEntryBody,
    }
}

xdr_enum! {
    pub enum ContractDataDurability {
        Temporary = 0,
        Persistent = 1,
    }
}

xdr_struct! {
    pub struct ContractDataEntry {
        pub ext: ExtensionPoint,
        pub contract: ScAddress,
        pub key: ScVal,
        pub durability: ContractDataDurability,
        pub val: ScVal,
    }
}

xdr_struct! {
    pub struct ContractCodeCostInputs {
        pub ext: ExtensionPoint,
        pub n_instructions: u32,
        pub n_functions: u32,
        pub n_globals: u32,
        pub n_table_entries: u32,
        pub n_types: u32,
        pub n_data_segments: u32,
        pub n_elem_segments: u32,
        pub n_imports: u32,
        pub n_exports: u32,
        pub n_data_segment_bytes: u32,
    }
}

xdr_struct! {
    pub struct ContractCodeEntryV1 {
        pub ext: ExtensionPoint,
        pub cost_inputs: ContractCodeCostInputs,
    }
}

xdr_union_int! {
    pub enum ContractCodeEntryExt {
        0 => V0,
        1 => V1(ContractCodeEntryV1),
    }
}

xdr_struct! {
    pub struct ContractCodeEntry {
        pub ext: ContractCodeEntryExt,
        pub hash: Hash,
        pub code: VarOpaque,
    }
}

xdr_struct! {
    /// Time-to-live marker for a Soroban entry, keyed by the hash of the
    /// entry's ledger key.
    pub struct TtlEntry {
        pub key_hash: Hash,
        pub live_until_ledger_seq: u32,
    }
}

xdr_enum! {
    pub enum ConfigSettingId {
        ContractMaxSizeBytes = 0,
        ContractComputeV0 = 1,
        ContractLedgerCostV0 = 2,
        ContractHistoricalDataV0 = 3,
        ContractEventsV0 = 4,
        ContractBandwidthV0 = 5,
        ContractCostParamsCpuInstructions = 6,
        ContractCostParamsMemoryBytes = 7,
        ContractDataKeySizeBytes = 8,
        ContractDataEntrySizeBytes = 9,
        StateArchival = 10,
        ContractExecutionLanes = 11,
        BucketlistSizeWindow = 12,
        EvictionIterator = 13,
    }
}

xdr_struct! {
    pub struct ConfigSettingContractComputeV0 {
        pub ledger_max_instructions: i64,
        pub tx_max_instructions: i64,
        pub fee_rate_per_instructions_increment: i64,
        pub tx_memory_limit: u32,
    }
}

xdr_struct! {
    pub struct ConfigSettingContractLedgerCostV0 {
        pub ledger_max_read_ledger_entries: u32,
        pub ledger_max_read_bytes: u32,
        pub ledger_max_write_ledger_entries: u32,
        pub ledger_max_write_bytes: u32,
        pub tx_max_read_ledger_entries: u32,
        pub tx_max_read_bytes: u32,
        pub tx_max_write_ledger_entries: u32,
        pub tx_max_write_bytes: u32,
        pub fee_read_ledger_entry: i64,
        pub fee_write_ledger_entry: i64,
        pub fee_read1_kb: i64,
        pub bucket_list_target_size_bytes: i64,
        pub write_fee1_kb_bucket_list_low: i64,
        pub write_fee1_kb_bucket_list_high: i64,
        pub bucket_list_write_fee_growth_factor: u32,
    }
}

xdr_struct! {
    pub struct ConfigSettingContractHistoricalDataV0 {
        pub fee_historical1_kb: i64,
    }
}

xdr_struct! {
    pub struct ConfigSettingContractEventsV0 {
        pub tx_max_contract_events_size_bytes: u32,
        pub fee_contract_events1_kb: i64,
    }
}

xdr_struct! {
    pub struct ConfigSettingContractBandwidthV0 {
        pub ledger_max_txs_size_bytes: u32,
        pub tx_max_size_bytes: u32,
        pub fee_tx_size1_kb: i64,
    }
}

xdr_struct! {
    pub struct ContractCostParamEntry {
        pub ext: ExtensionPoint,
        pub const_term: i64,
        pub linear_term: i64,
    }
}

pub type ContractCostParams = VarArray<ContractCostParamEntry, 1024>;

xdr_struct! {
    pub struct StateArchivalSettings {
        pub max_entry_ttl: u32,
        pub min_temporary_ttl: u32,
        pub min_persistent_ttl: u32,
        pub persistent_rent_rate_denominator: i64,
        pub temp_rent_rate_denominator: i64,
        pub max_entries_to_archive: u32,
        pub bucket_list_size_window_sample_size: u32,
        pub bucket_list_window_sample_period: u32,
        pub eviction_scan_size: u32,
        pub starting_eviction_scan_level: u32,
    }
}

xdr_struct! {
    pub struct ConfigSettingContractExecutionLanesV0 {
        pub ledger_max_tx_count: u32,
    }
}

xdr_struct! {
    pub struct EvictionIterator {
        pub bucket_list_level: u32,
        pub is_curr_bucket: bool,
        pub bucket_file_offset: u64,
    }
}

xdr_union! {
    pub enum ConfigSettingEntry : ConfigSettingId {
        ConfigSettingId::ContractMaxSizeBytes => ContractMaxSizeBytes(u32),
        ConfigSettingId::ContractComputeV0 => ContractComputeV0(ConfigSettingContractComputeV0),
        ConfigSettingId::ContractLedgerCostV0 => ContractLedgerCostV0(ConfigSettingContractLedgerCostV0),
        ConfigSettingId::ContractHistoricalDataV0 => ContractHistoricalDataV0(ConfigSettingContractHistoricalDataV0),
        ConfigSettingId::ContractEventsV0 => ContractEventsV0(ConfigSettingContractEventsV0),
        ConfigSettingId::ContractBandwidthV0 => ContractBandwidthV0(ConfigSettingContractBandwidthV0),
        ConfigSettingId::ContractCostParamsCpuInstructions => ContractCostParamsCpuInstructions(ContractCostParams),
        ConfigSettingId::ContractCostParamsMemoryBytes => ContractCostParamsMemoryBytes(ContractCostParams),
        ConfigSettingId::ContractDataKeySizeBytes => ContractDataKeySizeBytes(u32),
        ConfigSettingId::ContractDataEntrySizeBytes => ContractDataEntrySizeBytes(u32),
        ConfigSettingId::StateArchival => StateArchival(StateArchivalSettings),
        ConfigSettingId::ContractExecutionLanes => ContractExecutionLanes(ConfigSettingContractExecutionLanesV0),
        ConfigSettingId::BucketlistSizeWindow => BucketlistSizeWindow(VarArray<u64>),
        ConfigSettingId::EvictionIterator => EvictionIterator(EvictionIterator),
    }
}

xdr_enum! {
    pub enum LedgerEntryType {
        Account = 0,
        Trustline = 1,
        Offer = 2,
        Data = 3,
        ClaimableBalance = 4,
        LiquidityPool = 5,
        ContractData = 6,
        ContractCode = 7,
        ConfigSetting = 8,
        Ttl = 9,
    }
}

xdr_union! {
    pub enum LedgerEntryData : LedgerEntryType {
        LedgerEntryType::Account => Account(AccountEntry),
        LedgerEntryType::Trustline => Trustline(TrustLineEntry),
        LedgerEntryType::Offer => Offer(OfferEntry),
        LedgerEntryType::Data => Data(DataEntry),
        LedgerEntryType::ClaimableBalance => ClaimableBalance(ClaimableBalanceEntry),
        LedgerEntryType::LiquidityPool => LiquidityPool(LiquidityPoolEntry),
        LedgerEntryType::ContractData => ContractData(ContractDataEntry),
        LedgerEntryType::ContractCode => ContractCode(ContractCodeEntry),
        LedgerEntryType::ConfigSetting => ConfigSetting(ConfigSettingEntry),
        LedgerEntryType::Ttl => Ttl(TtlEntry),
    }
}

xdr_union_int! {
    pub enum LedgerEntryExtensionV1Ext {
        0 => V0,
    }
}

xdr_struct! {
    pub struct LedgerEntryExtensionV1 {
        pub sponsoring_id: SponsorshipDescriptor,
        pub ext: LedgerEntryExtensionV1Ext,
    }
}

xdr_union_int! {
    pub enum LedgerEntryExt {
        0 => V0,
        1 => V1(LedgerEntryExtensionV1),
    }
}

xdr_struct! {
    pub struct LedgerEntry {
        pub last_modified_ledger_seq: u32,
        pub data: LedgerEntryData,
        pub ext: LedgerEntryExt,
    }
}

xdr_struct! {
    pub struct LedgerKeyAccount {
        pub account_id: AccountId,
    }
}

xdr_struct! {
    pub struct LedgerKeyTrustLine {
        pub account_id: AccountId,
        pub asset: TrustLineAsset,
    }
}

xdr_struct! {
    pub struct LedgerKeyOffer {
        pub seller_id: AccountId,
        pub offer_id: i64,
    }
}

xdr_struct! {
    pub struct LedgerKeyData {
        pub account_id: AccountId,
        pub data_name: String64,
    }
}

xdr_struct! {
    pub struct LedgerKeyClaimableBalance {
        pub balance_id: ClaimableBalanceId,
    }
}

xdr_struct! {
    pub struct LedgerKeyLiquidityPool {
        pub liquidity_pool_id: PoolId,
    }
}

xdr_struct! {
    pub struct LedgerKeyContractData {
        pub contract: ScAddress,
        pub key: ScVal,
        pub durability: ContractDataDurability,
    }
}

xdr_struct! {
    pub struct LedgerKeyContractCode {
        pub hash: Hash,
    }
}

xdr_struct! {
    pub struct LedgerKeyConfigSetting {
        pub config_setting_id: ConfigSettingId,
    }
}

xdr_struct! {
    pub struct LedgerKeyTtl {
        pub key_hash: Hash,
    }
}

xdr_union! {
    /// The lookup key for any ledger entry, e.g. in a Soroban footprint or a
    /// `getLedgerEntries` request.
    pub enum LedgerKey : LedgerEntryType {
        LedgerEntryType::Account => Account(LedgerKeyAccount),
        LedgerEntryType::Trustline => Trustline(LedgerKeyTrustLine),
        LedgerEntryType::Offer => Offer(LedgerKeyOffer),
        LedgerEntryType::Data => Data(LedgerKeyData),
        LedgerEntryType::ClaimableBalance => ClaimableBalance(LedgerKeyClaimableBalance),
        LedgerEntryType::LiquidityPool => LiquidityPool(LedgerKeyLiquidityPool),
        LedgerEntryType::ContractData => ContractData(LedgerKeyContractData),
        LedgerEntryType::ContractCode => ContractCode(LedgerKeyContractCode),
        LedgerEntryType::ConfigSetting => ConfigSetting(LedgerKeyConfigSetting),
        LedgerEntryType::Ttl => Ttl(LedgerKeyTtl),
    }
}

/// An upgrade vote carried in the ledger header, opaque until applied.
pub type UpgradeType = VarOpaque<128>;

xdr_enum! {
    pub enum StellarValueType {
        Basic = 0,
        Signed = 1,
    }
}

xdr_struct! {
    pub struct LedgerCloseValueSignature {
        pub node_id: NodeId,
        pub signature: Signature,
    }
}

xdr_union! {
    pub enum StellarValueExt : StellarValueType {
        StellarValueType::Basic => Basic,
        StellarValueType::Signed => Signed(LedgerCloseValueSignature),
    }
}

xdr_struct! {
    /// The value consensus agreed on for a ledger close.
    pub struct StellarValue {
        pub tx_set_hash: Hash,
        pub close_time: TimePoint,
        pub upgrades: VarArray<UpgradeType, 6>,
        pub ext: StellarValueExt,
    }
}

xdr_struct! {
    pub struct LedgerHeaderExtensionV1 {
        pub flags: u32,
        pub ext: ExtensionPoint,
    }
}

xdr_union_int! {
    pub enum LedgerHeaderExt {
        0 => V0,
        1 => V1(LedgerHeaderExtensionV1),
    }
}

xdr_struct! {
    pub struct LedgerHeader {
        pub ledger_version: u32,
        pub previous_ledger_hash: Hash,
        pub scp_value: StellarValue,
        pub tx_set_result_hash: Hash,
        pub bucket_list_hash: Hash,
        pub ledger_seq: u32,
        pub total_coins: i64,
        pub fee_pool: i64,
        pub inflation_seq: u32,
        pub id_pool: u64,
        pub base_fee: u32,
        pub base_reserve: u32,
        pub max_tx_set_size: u32,
        pub skip_list: [Hash; 4],
        pub ext: LedgerHeaderExt,
    }
}

xdr_enum! {
    pub enum LedgerUpgradeType {
        Version = 1,
        BaseFee = 2,
        MaxTxSetSize = 3,
        BaseReserve = 4,
        Flags = 5,
        Config = 6,
        MaxSorobanTxSetSize = 7,
    }
}

xdr_struct! {
    pub struct ConfigUpgradeSetKey {
        pub contract_id: ContractId,
        pub content_hash: Hash,
    }
}

xdr_union! {
    pub enum LedgerUpgrade : LedgerUpgradeType {
        LedgerUpgradeType::Version => Version(u32),
        LedgerUpgradeType::BaseFee => BaseFee(u32),
        LedgerUpgradeType::MaxTxSetSize => MaxTxSetSize(u32),
        LedgerUpgradeType::BaseReserve => BaseReserve(u32),
        LedgerUpgradeType::Flags => Flags(u32),
        LedgerUpgradeType::Config => Config(ConfigUpgradeSetKey),
        LedgerUpgradeType::MaxSorobanTxSetSize => MaxSorobanTxSetSize(u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{PublicKey, Uint256};
    use crate::{Decode, Encode, Error};

    fn account(seed: u8) -> AccountId {
        PublicKey::Ed25519(Uint256([seed; 32]))
    }

    fn sample_account_entry() -> AccountEntry {
        AccountEntry {
            account_id: account(1),
            balance: 9_999_999_999,
            seq_num: 0x0000_04D2_0000_0001,
            num_sub_entries: 2,
            inflation_dest: None,
            flags: 0x1,
            home_domain: String32::try_from("example.com").unwrap(),
            thresholds: Thresholds([1, 0, 1, 2]),
            signers: VarArray::try_from(vec![Signer {
                key: crate::base::SignerKey::Ed25519(Uint256([2; 32])),
                weight: 5,
            }])
            .unwrap(),
            ext: AccountEntryExt::V1(AccountEntryExtensionV1 {
                liabilities: Liabilities {
                    buying: 10,
                    selling: 20,
                },
                ext: AccountEntryExtensionV1Ext::V2(AccountEntryExtensionV2 {
                    num_sponsored: 1,
                    num_sponsoring: 0,
                    signer_sponsoring_ids: VarArray::try_from(vec![Some(account(3))]).unwrap(),
                    ext: AccountEntryExtensionV2Ext::V0,
                }),
            }),
        }
    }

    #[test]
    fn test_account_entry_round_trip() {
        let entry = sample_account_entry();
        let encoded = entry.encode();
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(AccountEntry::decode(&encoded).unwrap(), entry);
    }

    #[test]
    fn test_ledger_entry_round_trip() {
        let entry = LedgerEntry {
            last_modified_ledger_seq: 123,
            data: LedgerEntryData::Account(sample_account_entry()),
            ext: LedgerEntryExt::V1(LedgerEntryExtensionV1 {
                sponsoring_id: Some(account(9)),
                ext: LedgerEntryExtensionV1Ext::V0,
            }),
        };
        let encoded = entry.encode();
        assert_eq!(LedgerEntry::decode(&encoded).unwrap(), entry);
    }

    #[test]
    fn test_claim_predicate_recursion() {
        let predicate = ClaimPredicate::And(
            VarArray::try_from(vec![
                ClaimPredicate::Not(Some(Box::new(ClaimPredicate::BeforeAbsoluteTime(100)))),
                ClaimPredicate::Or(
                    VarArray::try_from(vec![
                        ClaimPredicate::Unconditional,
                        ClaimPredicate::BeforeRelativeTime(3600),
                    ])
                    .unwrap(),
                ),
            ])
            .unwrap(),
        );
        let encoded = predicate.encode();
        assert_eq!(ClaimPredicate::decode(&encoded).unwrap(), predicate);
    }

    #[test]
    fn test_ledger_key_round_trip() {
        let keys = [
            LedgerKey::Account(LedgerKeyAccount {
                account_id: account(4),
            }),
            LedgerKey::Trustline(LedgerKeyTrustLine {
                account_id: account(4),
                asset: TrustLineAsset::PoolShare(Hash([8; 32])),
            }),
            LedgerKey::Ttl(LedgerKeyTtl {
                key_hash: Hash([6; 32]),
            }),
        ];
        for key in keys {
            let encoded = key.encode();
            assert_eq!(LedgerKey::decode(&encoded).unwrap(), key);
        }
    }

    #[test]
    fn test_ledger_key_rejects_unknown_entry_type() {
        let wire = [0x00, 0x00, 0x00, 0x0A];
        assert_eq!(
            LedgerKey::decode(&wire),
            Err(Error::InvalidDiscriminant {
                offset: 0,
                ty: "LedgerEntryType",
                value: 10,
            })
        );
    }

    #[test]
    fn test_unknown_extension_version_fails() {
        // An account entry whose ext discriminant is 7: not a declared
        // version, so the whole decode fails rather than guessing.
        let mut encoded = sample_account_entry().encode().to_vec();
        let tail = encoded.len();
        // ext discriminant for AccountEntryExt::V1 is the word right after
        // the fixed prefix; easier to corrupt the last V2 ext word (0 => V0).
        encoded[tail - 4..].copy_from_slice(&[0, 0, 0, 7]);
        assert!(matches!(
            AccountEntry::decode(&encoded),
            Err(Error::InvalidDiscriminant { value: 7, .. })
        ));
    }

    #[test]
    fn test_ledger_header_round_trip() {
        let header = LedgerHeader {
            ledger_version: 21,
            previous_ledger_hash: Hash([1; 32]),
            scp_value: StellarValue {
                tx_set_hash: Hash([2; 32]),
                close_time: 1_700_000_000,
                upgrades: VarArray::new(),
                ext: StellarValueExt::Signed(LedgerCloseValueSignature {
                    node_id: account(7),
                    signature: Signature::try_from(&[9u8; 64][..]).unwrap(),
                }),
            },
            tx_set_result_hash: Hash([3; 32]),
            bucket_list_hash: Hash([4; 32]),
            ledger_seq: 100_000,
            total_coins: 105_443_902_087_000_000,
            fee_pool: 500,
            inflation_seq: 0,
            id_pool: 42,
            base_fee: 100,
            base_reserve: 5_000_000,
            max_tx_set_size: 1000,
            skip_list: [Hash([10; 32]), Hash([11; 32]), Hash([12; 32]), Hash([13; 32])],
            ext: LedgerHeaderExt::V0,
        };
        let encoded = header.encode();
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(LedgerHeader::decode(&encoded).unwrap(), header);
    }

    #[test]
    fn test_config_setting_round_trip() {
        let settings = [
            ConfigSettingEntry::ContractMaxSizeBytes(65_536),
            ConfigSettingEntry::EvictionIterator(EvictionIterator {
                bucket_list_level: 6,
                is_curr_bucket: true,
                bucket_file_offset: 0xDEAD,
            }),
            ConfigSettingEntry::BucketlistSizeWindow(
                VarArray::try_from(vec![1u64, 2, 3]).unwrap(),
            ),
        ];
        for setting in settings {
            let encoded = setting.encode();
            assert_eq!(ConfigSettingEntry::decode(&encoded).unwrap(), setting);
        }
    }
}
