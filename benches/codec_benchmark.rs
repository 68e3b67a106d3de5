use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rsecc::Codec;
use std::hint::black_box;

const MESSAGE_LEN: usize = 64 * 1024;

fn message() -> Vec<u8> {
    (0..MESSAGE_LEN).map(|i| (i * 131 + 7) as u8).collect()
}

fn protect(codec: &Codec, message: &[u8]) -> Vec<u8> {
    let mut buffer = message.to_vec();
    buffer.resize(codec.encoded_len(message.len()), 0);
    let (data, ecc) = buffer.split_at_mut(message.len());
    codec.encode(data, ecc);
    buffer
}

/// Encode throughput for increasing ECC lengths at the maximum chunk size
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));
    let message = message();

    for ecc_len in [4usize, 16, 32] {
        let codec = Codec::new(ecc_len, 223).unwrap();
        let mut ecc = vec![0u8; codec.ecc_total_len(MESSAGE_LEN)];

        group.bench_with_input(BenchmarkId::from_parameter(ecc_len), &ecc_len, |b, _| {
            b.iter(|| codec.encode(black_box(&message), black_box(&mut ecc)))
        });
    }
    group.finish();
}

/// Decode throughput on clean buffers and with the maximum correctable
/// damage in every chunk
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(MESSAGE_LEN as u64));
    let message = message();
    let codec = Codec::new(32, 223).unwrap();
    let clean = protect(&codec, &message);

    let mut damaged = clean.clone();
    let layout = codec.layout(MESSAGE_LEN);
    for (data, _) in layout.blocks() {
        for pos in data.step_by(13).take(16) {
            damaged[pos] ^= 0x5a;
        }
    }

    group.bench_function("clean", |b| {
        let mut buffer = clean.clone();
        b.iter(|| codec.decode(black_box(&mut buffer)).unwrap())
    });

    group.bench_function("max_errors", |b| {
        b.iter_batched_ref(
            || damaged.clone(),
            |buffer| codec.decode(black_box(buffer)).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
