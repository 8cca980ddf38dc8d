use chimerahash::compress::{Compressor, Matrix, BLOCK_SIZE, STATE_SIZE};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let a = Matrix::chimera();
    c.bench_function("create lookup table", |b| {
        b.iter(|| {
            a.lookup_table();
        })
    });

    let at = a.lookup_table();
    let block = [0x5a; BLOCK_SIZE];
    let mut state = [0; STATE_SIZE];
    c.bench_function("compress block (matrix)", |b| {
        b.iter(|| a.compress(&mut state, black_box(&block)))
    });
    c.bench_function("compress block (lookup table)", |b| {
        b.iter(|| at.compress(&mut state, black_box(&block)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
