//! # Integration Test Flows
//!
//! Drives `EthAnteHandler` the way a host would: decode the raw bytes, build
//! a context, run the handler, then commit or discard the store writes.
//!
//! ## Flows Tested:
//!
//! 1. **Reference vector**: EIP-155 example bytes decode, re-encode and recover
//! 2. **Outer routing**: plain transfers, carriers, and each rejection kind
//! 3. **Commit boundary**: rejected batches leave the parent store untouched
//! 4. **Sequence progression**: signers re-sign at their new sequence
//! 5. **Shared handler**: one handler serving several threads

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use eb_02_wire_transaction::{
        EmbeddedBatch, EmbeddedMsg, MsgMultiSend, MultiSendEntry, WireTransaction,
    };
    use eb_03_ante_handler::{
        AccountStore, AnteConfig, AnteError, AnteHandler, AnteStage, CachedAccountStore, Context,
        EthAnteHandler, InMemoryAccountStore,
    };
    use eb_types::{Address, ChainId, StoreError, U256};
    use std::sync::Arc;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn config() -> AnteConfig {
        AnteConfig::new(CARRIER.into())
    }

    fn kind(error: Option<&AnteError>) -> &'static str {
        error.map(AnteError::kind).unwrap_or("none")
    }

    // =============================================================================
    // REFERENCE VECTOR
    // =============================================================================

    #[test]
    fn test_eip155_reference_vector_end_to_end() {
        init_tracing();
        let raw = hex::decode(EIP155_SIGNED_RLP).unwrap();
        let tx = WireTransaction::decode(&raw).unwrap();
        assert_eq!(tx.rlp_bytes(), raw);
        assert_eq!(tx.chain_id(), Some(ChainId::from(1u64)));

        let handler = EthAnteHandler::new(config(), InMemoryAccountStore::new()).unwrap();
        let outcome = handler.handle(Context::new("1"), &tx);
        assert!(!outcome.abort, "{}", outcome.result.log);
        assert_eq!(outcome.stage, AnteStage::PlainAccepted);

        let expected = Address::from_slice(&hex::decode(EIP155_SENDER).unwrap());
        assert_eq!(tx.cached_sender(), Some(expected));

        // Same bytes, different chain
        let outcome = handler.handle(Context::new("2"), &tx);
        assert!(outcome.abort);
        assert_eq!(kind(outcome.error()), "SignatureInvalid");
    }

    // =============================================================================
    // OUTER ROUTING
    // =============================================================================

    #[test]
    fn test_outer_scenarios() {
        init_tracing();
        let handler = EthAnteHandler::new(config(), InMemoryAccountStore::new()).unwrap();
        let (key, _) = random_key();
        let to = Address::repeat_byte(0x11);

        // Unsigned
        let unsigned = WireTransaction::new(0, Some(to), U256::one(), 21_000, U256::one(), vec![]);
        let outcome = handler.handle(Context::new("2"), &unsigned);
        assert!(outcome.abort);
        assert_eq!(kind(outcome.error()), "SignatureInvalid");

        // Signed for another chain
        let other_chain = signed_tx(&key, 5, to, vec![], 21_000);
        let outcome = handler.handle(Context::new("2"), &other_chain);
        assert!(outcome.abort);
        assert_eq!(kind(outcome.error()), "SignatureInvalid");

        // Plain transfer
        let plain = signed_tx(&key, 2, to, vec![], 21_000);
        let outcome = handler.handle(Context::new("2"), &plain);
        assert!(!outcome.abort);
        assert_eq!(outcome.result.code, 0);

        // Carrier with garbage payload
        let garbage = signed_tx(&key, 2, CARRIER, vec![1, 2, 3], 21_000);
        let outcome = handler.handle(Context::new("2"), &garbage);
        assert!(outcome.abort);
        assert_eq!(kind(outcome.error()), "DecodeFailure");

        // Carrier with an empty batch
        let empty = EmbeddedBatch::default().encode().unwrap();
        let carrier = signed_tx(&key, 2, CARRIER, empty, 21_000);
        let outcome = handler.handle(Context::new("2"), &carrier);
        assert!(!outcome.abort);
        assert_eq!(outcome.stage, AnteStage::EmbeddedDelegated);
    }

    #[test]
    fn test_decoded_bytes_behave_like_the_original() {
        init_tracing();
        let handler = EthAnteHandler::new(config(), InMemoryAccountStore::new()).unwrap();
        let (key, sender) = random_key();
        let tx = signed_tx(&key, 9, Address::repeat_byte(3), b"memo".to_vec(), 30_000);

        let decoded = WireTransaction::decode(&tx.rlp_bytes()).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.hash(), tx.hash());

        let outcome = handler.handle(Context::new("9"), &decoded);
        assert!(!outcome.abort);
        assert_eq!(decoded.cached_sender(), Some(sender));
    }

    #[test]
    fn test_messages_routing() {
        let (key, _) = random_key();
        let (_, alice) = random_key();
        let batch = EmbeddedBatch::new(vec![send(alice, Address::repeat_byte(2), 4)], vec![]);

        let carrier = signed_tx(&key, 2, CARRIER, batch.encode().unwrap(), 21_000);
        assert_eq!(carrier.messages(&CARRIER.into()).unwrap(), batch.messages);

        let plain = signed_tx(&key, 2, Address::repeat_byte(2), vec![], 21_000);
        let messages = plain.messages(&CARRIER.into()).unwrap();
        assert!(matches!(messages.as_slice(), [EmbeddedMsg::Ethereum(_)]));
    }

    // =============================================================================
    // COMMIT BOUNDARY
    // =============================================================================

    #[test]
    fn test_rejected_batch_is_discarded_by_caller() {
        init_tracing();
        let (relayer, _) = random_key();
        let (key_a, a) = random_key();
        let (_, b) = random_key();
        let (impostor, _) = random_key();
        let parent = InMemoryAccountStore::with_accounts(&[a, b]).unwrap();
        let acc_a = parent.get_account(&a).unwrap();
        let acc_b = parent.get_account(&b).unwrap();

        let out = Address::repeat_byte(0x0f);
        let mut batch = EmbeddedBatch::new(vec![send(a, out, 1), send(b, out, 1)], vec![]);
        sign_batch(&mut batch, "2", &[(&key_a, &acc_a), (&impostor, &acc_b)]);
        let tx = signed_tx(&relayer, 2, CARRIER, batch.encode().unwrap(), 100_000);

        {
            let handler = EthAnteHandler::new(config(), CachedAccountStore::new(&parent)).unwrap();
            let outcome = handler.handle(Context::new("2"), &tx);
            assert!(outcome.abort);
            assert_eq!(kind(outcome.error()), "Unauthorized");

            // a was advanced inside the cache before b failed
            assert_eq!(handler.store().get_sequence(&a).unwrap(), 1);
            assert_eq!(handler.store().pending(), 1);
        }

        assert_eq!(parent.get_sequence(&a).unwrap(), 0);
        assert_eq!(parent.get_sequence(&b).unwrap(), 0);
    }

    #[test]
    fn test_accepted_batch_is_committed_by_caller() {
        init_tracing();
        let (relayer, _) = random_key();
        let (key_a, a) = random_key();
        let parent = InMemoryAccountStore::with_accounts(&[a]).unwrap();
        let acc_a = parent.get_account(&a).unwrap();

        let mut batch = EmbeddedBatch::new(vec![send(a, Address::repeat_byte(0x0f), 1)], vec![]);
        sign_batch(&mut batch, "2", &[(&key_a, &acc_a)]);
        let tx = signed_tx(&relayer, 2, CARRIER, batch.encode().unwrap(), 100_000);

        let handler = EthAnteHandler::new(config(), CachedAccountStore::new(&parent)).unwrap();
        let outcome = handler.handle(Context::new("2"), &tx);
        assert!(!outcome.abort, "{}", outcome.result.log);
        assert_eq!(parent.get_sequence(&a).unwrap(), 0);

        assert_eq!(handler.store().commit().unwrap(), 1);
        assert_eq!(parent.get_sequence(&a).unwrap(), 1);
    }

    // =============================================================================
    // SEQUENCE PROGRESSION
    // =============================================================================

    #[test]
    fn test_multi_signer_batches_in_sequence() {
        init_tracing();
        let (relayer, _) = random_key();
        let (key_a, a) = random_key();
        let (key_b, b) = random_key();
        let (key_c, c) = random_key();
        let handler =
            EthAnteHandler::new(config(), InMemoryAccountStore::with_accounts(&[a, b, c]).unwrap())
                .unwrap();
        let out = Address::repeat_byte(0x0f);

        let multisend = |inputs: &[Address]| {
            EmbeddedMsg::MultiSend(MsgMultiSend {
                inputs: inputs
                    .iter()
                    .map(|address| MultiSendEntry {
                        address: *address,
                        amount: U256::from(2u64),
                    })
                    .collect(),
                outputs: vec![MultiSendEntry {
                    address: out,
                    amount: U256::from(2 * inputs.len() as u64),
                }],
            })
        };

        for round in 1..=3i64 {
            let mut batch =
                EmbeddedBatch::new(vec![multisend(&[a, b]), multisend(&[b, c])], vec![]);
            let accounts: Vec<_> = [a, b, c]
                .iter()
                .map(|addr| handler.store().get_account(addr).unwrap())
                .collect();
            sign_batch(
                &mut batch,
                "2",
                &[
                    (&key_a, &accounts[0]),
                    (&key_b, &accounts[1]),
                    (&key_c, &accounts[2]),
                ],
            );
            let tx = signed_tx(&relayer, 2, CARRIER, batch.encode().unwrap(), 100_000);

            let outcome = handler.handle(Context::new("2"), &tx);
            assert!(!outcome.abort, "round {round}: {}", outcome.result.log);
            for addr in [a, b, c] {
                assert_eq!(handler.store().get_sequence(&addr).unwrap(), round);
            }
        }
    }

    #[test]
    fn test_unknown_signer_is_reported_verbatim() {
        init_tracing();
        let (relayer, _) = random_key();
        let (key_a, a) = random_key();
        let handler = EthAnteHandler::new(config(), InMemoryAccountStore::new()).unwrap();

        let mut batch = EmbeddedBatch::new(vec![send(a, Address::repeat_byte(0x0f), 1)], vec![]);
        let phantom = eb_types::Account::new(a, 0);
        sign_batch(&mut batch, "2", &[(&key_a, &phantom)]);
        let tx = signed_tx(&relayer, 2, CARRIER, batch.encode().unwrap(), 100_000);

        let outcome = handler.handle(Context::new("2"), &tx);
        assert!(outcome.abort);
        assert_eq!(outcome.result.log, StoreError::UnknownAccount(a).to_string());
    }

    // =============================================================================
    // SHARED HANDLER
    // =============================================================================

    #[test]
    fn test_handler_shared_across_threads() {
        init_tracing();
        let store = Arc::new(InMemoryAccountStore::new());
        let handler = Arc::new(EthAnteHandler::new(config(), Arc::clone(&store)).unwrap());
        let accepted = Arc::new(parking_lot::Mutex::new(0usize));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handler = Arc::clone(&handler);
                let accepted = Arc::clone(&accepted);
                std::thread::spawn(move || {
                    let (key, _) = random_key();
                    for _ in 0..5 {
                        let tx = signed_tx(&key, 2, Address::repeat_byte(7), vec![], 21_000);
                        if !handler.handle(Context::new("2"), &tx).abort {
                            *accepted.lock() += 1;
                        }
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }
        assert_eq!(*accepted.lock(), 20);
        assert!(store.is_empty().unwrap());
    }
}
