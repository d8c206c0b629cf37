use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vigenere_analysis::{
    Analyzer, FrequencyTable, KeyLengthEstimator, normalize, recover_key, split_columns,
};

const HARBOUR: &str = include_str!("../tests/fixtures/harbour.txt");

fn encipher(plaintext: &str, key: &[u8]) -> String {
    normalize(plaintext)
        .as_bytes()
        .iter()
        .enumerate()
        .map(|(i, &b)| ((b - b'a' + key[i % key.len()] - b'a') % 26 + b'a') as char)
        .collect()
}

fn bench_key_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_length");
    let estimator = KeyLengthEstimator::default();

    for key in ["keys", "lemon", "vigenere"] {
        let ciphertext = normalize(&encipher(HARBOUR, key.as_bytes()));
        group.throughput(Throughput::Elements(ciphertext.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(key.len()), &ciphertext, |b, text| {
            b.iter(|| black_box(estimator.estimate(text)));
        });
    }

    group.finish();
}

fn bench_key_recovery(c: &mut Criterion) {
    let ciphertext = normalize(&encipher(HARBOUR, b"lemon"));
    let streams = split_columns(&ciphertext, 5).unwrap();

    c.bench_function("recover_key", |b| {
        b.iter(|| black_box(recover_key(&streams, &FrequencyTable::ENGLISH)));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let ciphertext = encipher(HARBOUR, b"lemon");
    let analyzer = Analyzer::default();

    c.bench_function("find_key", |b| {
        b.iter(|| black_box(analyzer.find_key(&ciphertext)));
    });
}

criterion_group!(benches, bench_key_length, bench_key_recovery, bench_pipeline);
criterion_main!(benches);
