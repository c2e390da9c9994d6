//! Cross-module integration tests: whole-envelope round trips, re-encode
//! idempotence, truncation robustness, and discriminant sweeps over the
//! public API.

use lumen_xdr::{
    AccountEntry, AccountEntryExt, Asset, ContractDataDurability, ContractDataEntry, Decode,
    DecoratedSignature, Encode, Error, ExtensionPoint, FeeBumpTransaction,
    FeeBumpTransactionEnvelope, FeeBumpTransactionExt, FeeBumpTransactionInnerTx, Hash,
    HostFunction, InvokeContractArgs, InvokeHostFunctionOp, LedgerEntry, LedgerEntryData,
    LedgerEntryExt, Memo, MuxedAccount, MuxedAccountMed25519, Operation, OperationBody,
    Preconditions, PublicKey, ScAddress, ScMap, ScMapEntry, ScSymbol, ScVal, ScVec,
    Signature, SignatureHint, Signer, SignerKey, String32, Thresholds, Transaction,
    TransactionEnvelope, TransactionExt, TransactionV1Envelope, Uint256, VarArray, XdrString,
};

fn muxed(seed: u8) -> MuxedAccount {
    MuxedAccount::Ed25519(Uint256([seed; 32]))
}

fn account(seed: u8) -> PublicKey {
    PublicKey::Ed25519(Uint256([seed; 32]))
}

fn soroban_tx() -> Transaction {
    Transaction {
        source_account: MuxedAccount::MuxedEd25519(MuxedAccountMed25519 {
            id: 77,
            ed25519: Uint256([0x44; 32]),
        }),
        fee: 10_000,
        seq_num: 555,
        cond: Preconditions::None,
        memo: Memo::Text(XdrString::try_from("invoke").unwrap()),
        operations: VarArray::try_from(vec![Operation {
            source_account: None,
            body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                host_function: HostFunction::InvokeContract(InvokeContractArgs {
                    contract_address: ScAddress::Contract(Hash([0x55; 32])),
                    function_name: ScSymbol::try_from("swap").unwrap(),
                    args: VarArray::try_from(vec![
                        ScVal::Address(ScAddress::Account(account(0x66))),
                        ScVal::Vec(Some(
                            ScVec::try_from(vec![ScVal::U32(1), ScVal::Void]).unwrap(),
                        )),
                        ScVal::Map(Some(
                            ScMap::try_from(vec![ScMapEntry {
                                key: ScVal::Symbol(ScSymbol::try_from("min_out").unwrap()),
                                val: ScVal::I64(12345),
                            }])
                            .unwrap(),
                        )),
                    ])
                    .unwrap(),
                }),
                auth: VarArray::new(),
            }),
        }])
        .unwrap(),
        ext: TransactionExt::V0,
    }
}

fn envelopes() -> Vec<TransactionEnvelope> {
    let signed = TransactionV1Envelope {
        tx: soroban_tx(),
        signatures: VarArray::try_from(vec![DecoratedSignature {
            hint: SignatureHint([0xDE, 0xAD, 0xBE, 0xEF]),
            signature: Signature::try_from(&[0x77; 64][..]).unwrap(),
        }])
        .unwrap(),
    };
    vec![
        TransactionEnvelope::Tx(signed.clone()),
        TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope {
            tx: FeeBumpTransaction {
                fee_source: muxed(0x88),
                fee: 20_000,
                inner_tx: FeeBumpTransactionInnerTx::Tx(signed),
                ext: FeeBumpTransactionExt::V0,
            },
            signatures: VarArray::new(),
        }),
    ]
}

#[test]
fn envelope_round_trip_and_alignment() {
    for envelope in envelopes() {
        let encoded = envelope.encode();
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(TransactionEnvelope::decode(&encoded).unwrap(), envelope);
    }
}

#[test]
fn reencoding_is_idempotent() {
    // encode(decode(b)) == b for well-formed input with canonical padding.
    for envelope in envelopes() {
        let encoded = envelope.encode();
        let decoded = TransactionEnvelope::decode(&encoded).unwrap();
        assert_eq!(decoded.encode(), encoded);
    }
}

#[test]
fn truncation_always_fails() {
    for envelope in envelopes() {
        let encoded = envelope.encode();
        for len in 0..encoded.len() {
            let result = TransactionEnvelope::decode(&encoded[..len]);
            assert!(result.is_err(), "prefix of {len} bytes decoded");
        }
    }
}

#[test]
fn trailing_bytes_always_fail() {
    for envelope in envelopes() {
        let mut encoded = envelope.encode().to_vec();
        encoded.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(
            TransactionEnvelope::decode(&encoded),
            Err(Error::ExtraData(4))
        );
    }
}

#[test]
fn discriminant_sweep_never_panics() {
    // Every discriminant word either dispatches to a declared arm or
    // returns a typed error. Probe the declared values, their neighbors,
    // and the extremes.
    let probes: Vec<i32> = (-40..40)
        .chain([0xFF, 0x100, 0x101, i32::MIN, i32::MAX, 1000, 2000])
        .collect();
    for value in probes {
        let word = value.to_be_bytes();
        let _ = TransactionEnvelope::decode(&word);
        let _ = ScVal::decode(&word);
        let _ = Asset::decode(&word);
        let _ = Memo::decode(&word);
        let _ = lumen_xdr::LedgerCloseMeta::decode(&word);
        let _ = lumen_xdr::OperationResult::decode(&word);
        let _ = lumen_xdr::ScSpecEntry::decode(&word);
    }
}

#[test]
fn ledger_entry_with_contract_data_round_trips() {
    let entry = LedgerEntry {
        last_modified_ledger_seq: 42,
        data: LedgerEntryData::ContractData(ContractDataEntry {
            ext: ExtensionPoint::V0,
            contract: ScAddress::Contract(Hash([0x99; 32])),
            key: ScVal::Symbol(ScSymbol::try_from("COUNTER").unwrap()),
            durability: ContractDataDurability::Persistent,
            val: ScVal::U32(7),
        }),
        ext: LedgerEntryExt::V0,
    };
    let encoded = entry.encode();
    assert_eq!(LedgerEntry::decode(&encoded).unwrap(), entry);
}

#[test]
fn account_entry_survives_signer_chain() {
    let entry = AccountEntry {
        account_id: account(1),
        balance: 1_000_000,
        seq_num: 9,
        num_sub_entries: 1,
        inflation_dest: Some(account(2)),
        flags: 0,
        home_domain: String32::try_from("home").unwrap(),
        thresholds: Thresholds([1, 1, 1, 1]),
        signers: VarArray::try_from(vec![Signer {
            key: SignerKey::Ed25519(Uint256([3; 32])),
            weight: 10,
        }])
        .unwrap(),
        ext: AccountEntryExt::V0,
    };
    let encoded = entry.encode();
    assert_eq!(AccountEntry::decode(&encoded).unwrap(), entry);
}

#[test]
fn signature_payload_matches_known_layout() {
    use lumen_xdr::{TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction};

    let payload = TransactionSignaturePayload {
        network_id: Hash([0x01; 32]),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(soroban_tx()),
    };
    let encoded = payload.encode();
    // Network id, then ENVELOPE_TYPE_TX, then the muxed source key type.
    assert_eq!(&encoded[..32], &[0x01; 32]);
    assert_eq!(&encoded[32..36], &[0, 0, 0, 2]);
    assert_eq!(&encoded[36..40], &[0, 0, 1, 0]);
    assert_eq!(
        TransactionSignaturePayload::decode(&encoded).unwrap(),
        payload
    );
}

#[test]
fn depth_limit_is_configurable() {
    let mut value = ScVal::Bool(true);
    for _ in 0..10 {
        value = ScVal::Vec(Some(ScVec::try_from(vec![value]).unwrap()));
    }
    let encoded = value.encode();
    // Ten vec levels cost two nest units each (union + array), plus one for
    // the innermost scalar's union.
    assert!(ScVal::decode_with_depth_limit(&encoded, 21).is_ok());
    assert!(matches!(
        ScVal::decode_with_depth_limit(&encoded, 20),
        Err(Error::DepthLimitExceeded { .. })
    ));
}
