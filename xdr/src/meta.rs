//! What changed when transactions applied and ledgers closed: entry change
//! sets, transaction meta versions, contract events, transaction sets, SCP
//! history, and the versioned ledger-close-meta envelope used by history
//! archives.

use crate::base::{ContractId, ExtensionPoint, Hash, NodeId, Signature};
use crate::contract::ScVal;
use crate::ledger::{LedgerEntry, LedgerHeader, LedgerKey, LedgerUpgrade};
use crate::macros::{xdr_enum, xdr_struct, xdr_union, xdr_union_int};
use crate::result::TransactionResultPair;
use crate::transaction::TransactionEnvelope;
use crate::{VarArray, VarOpaque};

xdr_enum! {
    pub enum LedgerEntryChangeType {
        Created = 0,
        Updated = 1,
        Removed = 2,
        State = 3,
    }
}

xdr_union! {
    /// One effect on one ledger entry. `State` snapshots the entry before
    /// the change that follows it.
    pub enum LedgerEntryChange : LedgerEntryChangeType {
        LedgerEntryChangeType::Created => Created(LedgerEntry),
        LedgerEntryChangeType::Updated => Updated(LedgerEntry),
        LedgerEntryChangeType::Removed => Removed(LedgerKey),
        LedgerEntryChangeType::State => State(LedgerEntry),
    }
}

pub type LedgerEntryChanges = VarArray<LedgerEntryChange>;

xdr_struct! {
    pub struct OperationMeta {
        pub changes: LedgerEntryChanges,
    }
}

xdr_struct! {
    pub struct TransactionMetaV1 {
        pub tx_changes: LedgerEntryChanges,
        pub operations: VarArray<OperationMeta>,
    }
}

xdr_struct! {
    pub struct TransactionMetaV2 {
        pub tx_changes_before: LedgerEntryChanges,
        pub operations: VarArray<OperationMeta>,
        pub tx_changes_after: LedgerEntryChanges,
    }
}

xdr_enum! {
    pub enum ContractEventType {
        System = 0,
        Contract = 1,
        Diagnostic = 2,
    }
}

xdr_struct! {
    pub struct ContractEventV0 {
        pub topics: VarArray<ScVal>,
        pub data: ScVal,
    }
}

xdr_union_int! {
    pub enum ContractEventBody {
        0 => V0(ContractEventV0),
    }
}

xdr_struct! {
    /// An event emitted by the Soroban host or a contract.
    pub struct ContractEvent {
        pub ext: ExtensionPoint,
        pub contract_id: Option<ContractId>,
        pub type_: ContractEventType,
        pub body: ContractEventBody,
    }
}

xdr_struct! {
    pub struct DiagnosticEvent {
        pub in_successful_contract_call: bool,
        pub event: ContractEvent,
    }
}

xdr_struct! {
    pub struct SorobanTransactionMetaExtV1 {
        pub ext: ExtensionPoint,
        pub total_non_refundable_resource_fee_charged: i64,
        pub total_refundable_resource_fee_charged: i64,
        pub rent_fee_charged: i64,
    }
}

xdr_union_int! {
    pub enum SorobanTransactionMetaExt {
        0 => V0,
        1 => V1(SorobanTransactionMetaExtV1),
    }
}

xdr_struct! {
    pub struct SorobanTransactionMeta {
        pub ext: SorobanTransactionMetaExt,
        pub events: VarArray<ContractEvent>,
        pub return_value: ScVal,
        pub diagnostic_events: VarArray<DiagnosticEvent>,
    }
}

xdr_struct! {
    pub struct TransactionMetaV3 {
        pub ext: ExtensionPoint,
        pub tx_changes_before: LedgerEntryChanges,
        pub operations: VarArray<OperationMeta>,
        pub tx_changes_after: LedgerEntryChanges,
        pub soroban_meta: Option<SorobanTransactionMeta>,
    }
}

xdr_union_int! {
    /// Versioned per-transaction application meta. V0 is a bare list of
    /// per-operation changes.
    pub enum TransactionMeta {
        0 => V0(VarArray<OperationMeta>),
        1 => V1(TransactionMetaV1),
        2 => V2(TransactionMetaV2),
        3 => V3(TransactionMetaV3),
    }
}

xdr_struct! {
    pub struct TransactionResultMeta {
        pub result: TransactionResultPair,
        pub fee_processing: LedgerEntryChanges,
        pub tx_apply_processing: TransactionMeta,
    }
}

xdr_struct! {
    pub struct UpgradeEntryMeta {
        pub upgrade: LedgerUpgrade,
        pub changes: LedgerEntryChanges,
    }
}

xdr_struct! {
    pub struct TransactionSet {
        pub previous_ledger_hash: Hash,
        pub txs: VarArray<TransactionEnvelope>,
    }
}

xdr_struct! {
    pub struct TxSetComponentTxsMaybeDiscountedFee {
        pub base_fee: Option<i64>,
        pub txs: VarArray<TransactionEnvelope>,
    }
}

xdr_enum! {
    pub enum TxSetComponentType {
        TxsetCompTxsMaybeDiscountedFee = 0,
    }
}

xdr_union! {
    pub enum TxSetComponent : TxSetComponentType {
        TxSetComponentType::TxsetCompTxsMaybeDiscountedFee => TxsMaybeDiscountedFee(TxSetComponentTxsMaybeDiscountedFee),
    }
}

xdr_union_int! {
    pub enum TransactionPhase {
        0 => V0(VarArray<TxSetComponent>),
    }
}

xdr_struct! {
    pub struct TransactionSetV1 {
        pub previous_ledger_hash: Hash,
        pub phases: VarArray<TransactionPhase>,
    }
}

xdr_union_int! {
    /// The generalized transaction set introduced with surge pricing; only
    /// version 1 is defined.
    pub enum GeneralizedTransactionSet {
        1 => V1(TransactionSetV1),
    }
}

/// An opaque consensus value (the serialized [`crate::ledger::StellarValue`]).
pub type Value = VarOpaque;

xdr_struct! {
    pub struct ScpBallot {
        pub counter: u32,
        pub value: Value,
    }
}

xdr_enum! {
    pub enum ScpStatementType {
        Prepare = 0,
        Confirm = 1,
        Externalize = 2,
        Nominate = 3,
    }
}

xdr_struct! {
    pub struct ScpNomination {
        pub quorum_set_hash: Hash,
        pub votes: VarArray<Value>,
        pub accepted: VarArray<Value>,
    }
}

xdr_struct! {
    pub struct ScpStatementPrepare {
        pub quorum_set_hash: Hash,
        pub ballot: ScpBallot,
        pub prepared: Option<ScpBallot>,
        pub prepared_prime: Option<ScpBallot>,
        pub n_c: u32,
        pub n_h: u32,
    }
}

xdr_struct! {
    pub struct ScpStatementConfirm {
        pub ballot: ScpBallot,
        pub n_prepared: u32,
        pub n_commit: u32,
        pub n_h: u32,
        pub quorum_set_hash: Hash,
    }
}

xdr_struct! {
    pub struct ScpStatementExternalize {
        pub commit: ScpBallot,
        pub n_h: u32,
        pub commit_quorum_set_hash: Hash,
    }
}

xdr_union! {
    pub enum ScpStatementPledges : ScpStatementType {
        ScpStatementType::Prepare => Prepare(ScpStatementPrepare),
        ScpStatementType::Confirm => Confirm(ScpStatementConfirm),
        ScpStatementType::Externalize => Externalize(ScpStatementExternalize),
        ScpStatementType::Nominate => Nominate(ScpNomination),
    }
}

xdr_struct! {
    pub struct ScpStatement {
        pub node_id: NodeId,
        pub slot_index: u64,
        pub pledges: ScpStatementPledges,
    }
}

xdr_struct! {
    pub struct ScpEnvelope {
        pub statement: ScpStatement,
        pub signature: Signature,
    }
}

xdr_struct! {
    /// A quorum set; inner sets nest recursively.
    pub struct ScpQuorumSet {
        pub threshold: u32,
        pub validators: VarArray<NodeId>,
        pub inner_sets: VarArray<ScpQuorumSet>,
    }
}

xdr_struct! {
    pub struct LedgerScpMessages {
        pub ledger_seq: u32,
        pub messages: VarArray<ScpEnvelope>,
    }
}

xdr_struct! {
    pub struct ScpHistoryEntryV0 {
        pub quorum_sets: VarArray<ScpQuorumSet>,
        pub ledger_messages: LedgerScpMessages,
    }
}

xdr_union_int! {
    pub enum ScpHistoryEntry {
        0 => V0(ScpHistoryEntryV0),
    }
}

xdr_union_int! {
    pub enum LedgerHeaderHistoryEntryExt {
        0 => V0,
    }
}

xdr_struct! {
    pub struct LedgerHeaderHistoryEntry {
        pub hash: Hash,
        pub header: LedgerHeader,
        pub ext: LedgerHeaderHistoryEntryExt,
    }
}

xdr_struct! {
    pub struct LedgerCloseMetaV0 {
        pub ledger_header: LedgerHeaderHistoryEntry,
        pub tx_set: TransactionSet,
        pub tx_processing: VarArray<TransactionResultMeta>,
        pub upgrades_processing: VarArray<UpgradeEntryMeta>,
        pub scp_info: VarArray<ScpHistoryEntry>,
    }
}

xdr_struct! {
    pub struct LedgerCloseMetaExtV1 {
        pub ext: ExtensionPoint,
        pub soroban_fee_write1_kb: i64,
    }
}

xdr_union_int! {
    pub enum LedgerCloseMetaExt {
        0 => V0,
        1 => V1(LedgerCloseMetaExtV1),
    }
}

xdr_struct! {
    pub struct LedgerCloseMetaV1 {
        pub ext: LedgerCloseMetaExt,
        pub ledger_header: LedgerHeaderHistoryEntry,
        pub tx_set: GeneralizedTransactionSet,
        pub tx_processing: VarArray<TransactionResultMeta>,
        pub upgrades_processing: VarArray<UpgradeEntryMeta>,
        pub scp_info: VarArray<ScpHistoryEntry>,
        pub total_byte_size_of_bucket_list: u64,
        pub evicted_temporary_ledger_keys: VarArray<LedgerKey>,
        pub evicted_persistent_ledger_entries: VarArray<LedgerEntry>,
    }
}

xdr_struct! {
    pub struct LedgerCloseMetaV2 {
        pub ext: LedgerCloseMetaExt,
        pub ledger_header: LedgerHeaderHistoryEntry,
        pub tx_set: GeneralizedTransactionSet,
        pub tx_processing: VarArray<TransactionResultMeta>,
        pub upgrades_processing: VarArray<UpgradeEntryMeta>,
        pub scp_info: VarArray<ScpHistoryEntry>,
        pub total_byte_size_of_live_soroban_state: u64,
        pub evicted_keys: VarArray<LedgerKey>,
    }
}

xdr_union_int! {
    /// Everything that happened when a ledger closed, as archived to
    /// history. Versioned so archives remain readable across protocol
    /// upgrades.
    pub enum LedgerCloseMeta {
        0 => V0(LedgerCloseMetaV0),
        1 => V1(LedgerCloseMetaV1),
        2 => V2(LedgerCloseMetaV2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{PublicKey, Uint256};
    use crate::ledger::{
        DataEntry, DataEntryExt, LedgerEntryData, LedgerEntryExt, LedgerCloseValueSignature,
        LedgerHeaderExt, StellarValue, StellarValueExt,
    };
    use crate::result::{
        OperationResult, OperationResultTr, PaymentResult, TransactionResult,
        TransactionResultExt, TransactionResultResult,
    };
    use crate::{Decode, Encode, Error};

    fn account(seed: u8) -> PublicKey {
        PublicKey::Ed25519(Uint256([seed; 32]))
    }

    fn sample_entry() -> LedgerEntry {
        LedgerEntry {
            last_modified_ledger_seq: 7,
            data: LedgerEntryData::Data(DataEntry {
                account_id: account(1),
                data_name: crate::base::String64::try_from("name").unwrap(),
                data_value: crate::base::DataValue::try_from(&[1, 2][..]).unwrap(),
                ext: DataEntryExt::V0,
            }),
            ext: LedgerEntryExt::V0,
        }
    }

    fn sample_header() -> LedgerHeader {
        LedgerHeader {
            ledger_version: 21,
            previous_ledger_hash: Hash([1; 32]),
            scp_value: StellarValue {
                tx_set_hash: Hash([2; 32]),
                close_time: 1_700_000_000,
                upgrades: VarArray::new(),
                ext: StellarValueExt::Signed(LedgerCloseValueSignature {
                    node_id: account(3),
                    signature: Signature::try_from(&[4u8; 64][..]).unwrap(),
                }),
            },
            tx_set_result_hash: Hash([5; 32]),
            bucket_list_hash: Hash([6; 32]),
            ledger_seq: 1000,
            total_coins: 1,
            fee_pool: 2,
            inflation_seq: 3,
            id_pool: 4,
            base_fee: 100,
            base_reserve: 5_000_000,
            max_tx_set_size: 500,
            skip_list: [Hash([7; 32]), Hash([8; 32]), Hash([9; 32]), Hash([10; 32])],
            ext: LedgerHeaderExt::V0,
        }
    }

    fn sample_result_meta() -> TransactionResultMeta {
        TransactionResultMeta {
            result: crate::result::TransactionResultPair {
                transaction_hash: Hash([0xEE; 32]),
                result: TransactionResult {
                    fee_charged: 100,
                    result: TransactionResultResult::Success(
                        VarArray::try_from(vec![OperationResult::Tr(
                            OperationResultTr::Payment(PaymentResult::Success),
                        )])
                        .unwrap(),
                    ),
                    ext: TransactionResultExt::V0,
                },
            },
            fee_processing: VarArray::try_from(vec![LedgerEntryChange::State(sample_entry())])
                .unwrap(),
            tx_apply_processing: TransactionMeta::V2(TransactionMetaV2 {
                tx_changes_before: VarArray::new(),
                operations: VarArray::try_from(vec![OperationMeta {
                    changes: VarArray::try_from(vec![LedgerEntryChange::Updated(sample_entry())])
                        .unwrap(),
                }])
                .unwrap(),
                tx_changes_after: VarArray::new(),
            }),
        }
    }

    #[test]
    fn test_entry_changes_round_trip() {
        let changes: LedgerEntryChanges = VarArray::try_from(vec![
            LedgerEntryChange::Created(sample_entry()),
            LedgerEntryChange::Removed(LedgerKey::Ttl(crate::ledger::LedgerKeyTtl {
                key_hash: Hash([2; 32]),
            })),
        ])
        .unwrap();
        let encoded = changes.encode();
        assert_eq!(LedgerEntryChanges::decode(&encoded).unwrap(), changes);
    }

    #[test]
    fn test_contract_event_round_trip() {
        let event = ContractEvent {
            ext: ExtensionPoint::V0,
            contract_id: Some(Hash([3; 32])),
            type_: ContractEventType::Contract,
            body: ContractEventBody::V0(ContractEventV0 {
                topics: VarArray::try_from(vec![ScVal::Symbol(
                    crate::contract::ScSymbol::try_from("transfer").unwrap(),
                )])
                .unwrap(),
                data: ScVal::I64(42),
            }),
        };
        let encoded = event.encode();
        assert_eq!(ContractEvent::decode(&encoded).unwrap(), event);
    }

    #[test]
    fn test_close_meta_v0_round_trip() {
        let meta = LedgerCloseMeta::V0(LedgerCloseMetaV0 {
            ledger_header: LedgerHeaderHistoryEntry {
                hash: Hash([0xAB; 32]),
                header: sample_header(),
                ext: LedgerHeaderHistoryEntryExt::V0,
            },
            tx_set: TransactionSet {
                previous_ledger_hash: Hash([1; 32]),
                txs: VarArray::new(),
            },
            tx_processing: VarArray::try_from(vec![sample_result_meta()]).unwrap(),
            upgrades_processing: VarArray::try_from(vec![UpgradeEntryMeta {
                upgrade: LedgerUpgrade::BaseFee(200),
                changes: VarArray::new(),
            }])
            .unwrap(),
            scp_info: VarArray::new(),
        });
        let encoded = meta.encode();
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(LedgerCloseMeta::decode(&encoded).unwrap(), meta);
    }

    #[test]
    fn test_close_meta_v1_round_trip() {
        let meta = LedgerCloseMeta::V1(LedgerCloseMetaV1 {
            ext: LedgerCloseMetaExt::V1(LedgerCloseMetaExtV1 {
                ext: ExtensionPoint::V0,
                soroban_fee_write1_kb: 11,
            }),
            ledger_header: LedgerHeaderHistoryEntry {
                hash: Hash([0xCD; 32]),
                header: sample_header(),
                ext: LedgerHeaderHistoryEntryExt::V0,
            },
            tx_set: GeneralizedTransactionSet::V1(TransactionSetV1 {
                previous_ledger_hash: Hash([1; 32]),
                phases: VarArray::try_from(vec![TransactionPhase::V0(
                    VarArray::try_from(vec![TxSetComponent::TxsMaybeDiscountedFee(
                        TxSetComponentTxsMaybeDiscountedFee {
                            base_fee: Some(100),
                            txs: VarArray::new(),
                        },
                    )])
                    .unwrap(),
                )])
                .unwrap(),
            }),
            tx_processing: VarArray::new(),
            upgrades_processing: VarArray::new(),
            scp_info: VarArray::try_from(vec![ScpHistoryEntry::V0(ScpHistoryEntryV0 {
                quorum_sets: VarArray::try_from(vec![ScpQuorumSet {
                    threshold: 2,
                    validators: VarArray::try_from(vec![account(1), account(2)]).unwrap(),
                    inner_sets: VarArray::try_from(vec![ScpQuorumSet {
                        threshold: 1,
                        validators: VarArray::try_from(vec![account(3)]).unwrap(),
                        inner_sets: VarArray::new(),
                    }])
                    .unwrap(),
                }])
                .unwrap(),
                ledger_messages: LedgerScpMessages {
                    ledger_seq: 1000,
                    messages: VarArray::try_from(vec![ScpEnvelope {
                        statement: ScpStatement {
                            node_id: account(4),
                            slot_index: 1000,
                            pledges: ScpStatementPledges::Externalize(ScpStatementExternalize {
                                commit: ScpBallot {
                                    counter: 1,
                                    value: Value::try_from(&[1, 2, 3][..]).unwrap(),
                                },
                                n_h: 1,
                                commit_quorum_set_hash: Hash([9; 32]),
                            }),
                        },
                        signature: Signature::try_from(&[7u8; 64][..]).unwrap(),
                    }])
                    .unwrap(),
                },
            })])
            .unwrap(),
            total_byte_size_of_bucket_list: 123_456,
            evicted_temporary_ledger_keys: VarArray::new(),
            evicted_persistent_ledger_entries: VarArray::try_from(vec![sample_entry()]).unwrap(),
        });
        let encoded = meta.encode();
        assert_eq!(LedgerCloseMeta::decode(&encoded).unwrap(), meta);
    }

    #[test]
    fn test_close_meta_v2_round_trip() {
        let meta = LedgerCloseMeta::V2(LedgerCloseMetaV2 {
            ext: LedgerCloseMetaExt::V0,
            ledger_header: LedgerHeaderHistoryEntry {
                hash: Hash([0xEF; 32]),
                header: sample_header(),
                ext: LedgerHeaderHistoryEntryExt::V0,
            },
            tx_set: GeneralizedTransactionSet::V1(TransactionSetV1 {
                previous_ledger_hash: Hash([1; 32]),
                phases: VarArray::new(),
            }),
            tx_processing: VarArray::new(),
            upgrades_processing: VarArray::new(),
            scp_info: VarArray::new(),
            total_byte_size_of_live_soroban_state: 999,
            evicted_keys: VarArray::try_from(vec![LedgerKey::ContractCode(
                crate::ledger::LedgerKeyContractCode { hash: Hash([8; 32]) },
            )])
            .unwrap(),
        });
        let encoded = meta.encode();
        assert_eq!(LedgerCloseMeta::decode(&encoded).unwrap(), meta);
    }

    #[test]
    fn test_close_meta_unknown_version_fails() {
        assert_eq!(
            LedgerCloseMeta::decode(&[0, 0, 0, 3]),
            Err(Error::InvalidDiscriminant {
                offset: 0,
                ty: "LedgerCloseMeta",
                value: 3,
            })
        );
    }

    #[test]
    fn test_generalized_tx_set_rejects_version_zero() {
        assert_eq!(
            GeneralizedTransactionSet::decode(&[0, 0, 0, 0]),
            Err(Error::InvalidDiscriminant {
                offset: 0,
                ty: "GeneralizedTransactionSet",
                value: 0,
            })
        );
    }
}
