use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strata_terrain::{HeightmapSampler, TerrainGenerator, TerrainParams, ValueNoise};
use strata_voxel::{Chunk, ColumnPos};

fn bench_value_noise_sample(c: &mut Criterion) {
    let noise = ValueNoise::new(0);
    c.bench_function("value_noise_sample", |bencher| {
        bencher.iter(|| black_box(noise.sample(black_box(123.45), black_box(-67.89))))
    });
}

fn bench_value_noise_layered(c: &mut Criterion) {
    let noise = ValueNoise::new(0);
    c.bench_function("value_noise_layered", |bencher| {
        bencher.iter(|| black_box(noise.layered(black_box(123.45), black_box(-67.89))))
    });
}

fn bench_column_height(c: &mut Criterion) {
    let sampler = HeightmapSampler::new(TerrainParams::default());
    c.bench_function("column_height", |bencher| {
        bencher.iter(|| black_box(sampler.column_height(black_box(1000), black_box(-2000))))
    });
}

fn bench_generate_chunk(c: &mut Criterion) {
    let generator = TerrainGenerator::default();
    let mut chunk = Chunk::new(ColumnPos::new(4, -9));
    c.bench_function("generate_chunk", |bencher| {
        bencher.iter(|| {
            generator.generate_chunk(black_box(&mut chunk));
        })
    });
}

criterion_group!(
    benches,
    bench_value_noise_sample,
    bench_value_noise_layered,
    bench_column_height,
    bench_generate_chunk,
);
criterion_main!(benches);
