use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use viewkit::Text;

fn sample_text(len_chars: usize) -> String {
    let alphabet = ['a', 'z', 'é', 'ж', 'न', 'こ', '€', '🌎'];
    let mut rng = StdRng::seed_from_u64(7);
    (0..len_chars).map(|_| *alphabet.choose(&mut rng).unwrap()).collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_decode");

    for size in [1_000, 10_000, 100_000].iter() {
        let source = sample_text(*size);
        let text = Text::from(source.as_str());

        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(BenchmarkId::new("Text::decode", size), &text, |b, text| {
            b.iter(|| text.decode().map(|(_, c)| c as u32 as u64).sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("str::char_indices", size), &source, |b, s| {
            b.iter(|| black_box(s).char_indices().map(|(_, c)| c as u32 as u64).sum::<u64>());
        });
    }

    group.finish();
}

fn bench_malformed(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_decode_malformed");
    let mut rng = StdRng::seed_from_u64(11);
    let bytes: Vec<u8> = (0..64 * 1024).map(|_| rng.r#gen::<u8>()).collect();
    let text = Text::from(bytes);

    group.throughput(Throughput::Bytes(text.byte_len() as u64));
    group.bench_function("random_bytes", |b| {
        b.iter(|| black_box(&text).char_count());
    });

    group.bench_function("byte_slice_fragments", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for lo in (0..text.byte_len() - 7).step_by(4096) {
                total += text.byte_slice(lo, lo + 7).unwrap().char_count();
            }
            total
        });
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_malformed);
criterion_main!(benches);
