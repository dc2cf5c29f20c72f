use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lzhv::{Params, Strategy, compress, decompress};
use std::hint::black_box;

/// Generates pseudo-random bytes with a fixed-seed LCG.
///
/// High entropy: the worst case for both match finders, and the case where
/// the linear finder's exhaustive scan costs the most.
fn generate_random(size: usize) -> Vec<u8> {
    let mut vec = Vec::with_capacity(size);
    let mut seed: u64 = 0xDEAD_BEEF;
    for _ in 0..size {
        seed = (seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)) & 0xFFFF_FFFF;
        vec.push((seed >> 24) as u8);
    }
    vec
}

/// Repeats "The quick brown fox jumps over the lazy dog. " up to `size` bytes.
fn generate_text(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    let mut vec = Vec::with_capacity(size);
    while vec.len() < size {
        vec.extend_from_slice(text);
    }
    vec.truncate(size);
    vec
}

fn generate_zeroes(size: usize) -> Vec<u8> {
    vec![0u8; size]
}

/// Benchmarks compression for each match finder.
///
/// Inputs are kept at 16KB: the linear finder is `O(window * lookahead)` per
/// byte and dominates the run time on random data.
fn bench_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("LZ77 Compression");
    group.sample_size(10);

    let size = 16 * 1024;
    let params = Params::default();

    let scenarios = [
        ("Zeroes", generate_zeroes(size)),
        ("Random", generate_random(size)),
        ("Text", generate_text(size)),
    ];

    for strategy in Strategy::ALL {
        for (name, input_data) in &scenarios {
            let bench_name = format!("{strategy} {name} 16KB");

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_function(&bench_name, |b| {
                b.iter(|| compress(black_box(input_data), params, strategy));
            });
        }
    }

    group.finish();
}

/// Benchmarks decompression of hash-chain output.
///
/// Throughput is measured against the uncompressed size.
fn bench_decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("LZ77 Decompression");
    let size = 64 * 1024;

    let scenarios = [
        ("Zeroes", generate_zeroes(size)),
        ("Random", generate_random(size)),
        ("Text", generate_text(size)),
    ];

    for (name, source_data) in &scenarios {
        let compressed = compress(source_data, Params::default(), Strategy::HashChain);
        let bench_name = format!("{name} 64KB");

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(&bench_name, |b| {
            let mut output = Vec::with_capacity(size);
            b.iter(|| {
                output.clear();
                decompress(black_box(&compressed.data), black_box(&mut output));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compression, bench_decompression);
criterion_main!(benches);
