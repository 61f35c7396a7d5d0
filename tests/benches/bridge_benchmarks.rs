//! # Wire-Bridge Benchmarks
//!
//! | Path | Work |
//! |------|------|
//! | decode | RLP decode plus canonical re-encode |
//! | recover | EIP-155 sender recovery, uncached |
//! | ante/plain | full handler run for a plain transfer |
//! | ante/embedded | full handler run for an N-signer batch |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eb_02_wire_transaction::{EmbeddedBatch, WireTransaction};
use eb_03_ante_handler::{
    AccountStore, AnteConfig, AnteHandler, Context, EthAnteHandler, InMemoryAccountStore,
};
use eb_tests::fixtures::{random_key, send, sign_batch, signed_tx, CARRIER};
use eb_types::{Address, ChainId};
use std::time::Duration;

fn bench_decode(c: &mut Criterion) {
    let (key, _) = random_key();
    let raw = signed_tx(&key, 2, Address::repeat_byte(1), vec![0u8; 256], 21_000).rlp_bytes();

    let mut group = c.benchmark_group("eb-02/decode");
    group.throughput(Throughput::Bytes(raw.len() as u64));
    group.bench_function("wire_transaction", |b| {
        b.iter(|| WireTransaction::decode(black_box(&raw)))
    });
    group.finish();
}

fn bench_recover(c: &mut Criterion) {
    let (key, _) = random_key();
    let raw = signed_tx(&key, 2, Address::repeat_byte(1), vec![], 21_000).rlp_bytes();
    let chain = ChainId::from(2u64);

    let mut group = c.benchmark_group("eb-02/recover");
    group.bench_function("derive_sender", |b| {
        b.iter_batched(
            || WireTransaction::decode(&raw).unwrap(),
            |tx| tx.derive_sender(black_box(&chain)),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_ante_plain(c: &mut Criterion) {
    let (key, _) = random_key();
    let raw = signed_tx(&key, 2, Address::repeat_byte(1), vec![], 21_000).rlp_bytes();
    let handler =
        EthAnteHandler::new(AnteConfig::new(CARRIER.into()), InMemoryAccountStore::new()).unwrap();

    let mut group = c.benchmark_group("eb-03/ante");
    group.bench_function("plain", |b| {
        b.iter_batched(
            || WireTransaction::decode(&raw).unwrap(),
            |tx| handler.handle(Context::new("2"), &tx),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_ante_embedded(c: &mut Criterion) {
    let mut group = c.benchmark_group("eb-03/ante/embedded");
    group.measurement_time(Duration::from_secs(10));

    for signers in [1usize, 4, 16] {
        let keys: Vec<_> = (0..signers).map(|_| random_key()).collect();
        let addresses: Vec<Address> = keys.iter().map(|(_, a)| *a).collect();
        let (relayer, _) = random_key();
        let out = Address::repeat_byte(0x0f);

        group.throughput(Throughput::Elements(signers as u64));
        group.bench_with_input(BenchmarkId::from_parameter(signers), &signers, |b, _| {
            b.iter_batched(
                || {
                    // Fresh store so every iteration signs at sequence 0
                    let handler = EthAnteHandler::new(
                        AnteConfig::new(CARRIER.into()),
                        InMemoryAccountStore::with_accounts(&addresses).unwrap(),
                    )
                    .unwrap();
                    let mut batch = EmbeddedBatch::new(
                        addresses.iter().map(|a| send(*a, out, 1)).collect(),
                        vec![],
                    );
                    let accounts: Vec<_> = addresses
                        .iter()
                        .map(|a| handler.store().get_account(a).unwrap())
                        .collect();
                    let pairs: Vec<_> = keys
                        .iter()
                        .zip(&accounts)
                        .map(|((key, _), account)| (key, account))
                        .collect();
                    sign_batch(&mut batch, "2", &pairs);
                    let tx = signed_tx(&relayer, 2, CARRIER, batch.encode().unwrap(), 1_000_000);
                    (handler, tx)
                },
                |(handler, tx)| handler.handle(Context::new("2"), &tx),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_recover,
    bench_ante_plain,
    bench_ante_embedded
);
criterion_main!(benches);
