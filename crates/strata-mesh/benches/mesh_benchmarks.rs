use criterion::{Criterion, black_box, criterion_group, criterion_main};
use strata_mesh::{BlockUvTable, build_chunk_geometry};
use strata_terrain::TerrainGenerator;
use strata_voxel::{Block, BlockAccess, BlockPos, Chunk, ChunkGenerator, ColumnPos};

struct EmptyWorld;

impl BlockAccess for EmptyWorld {
    fn get_block(&self, _pos: BlockPos) -> Block {
        Block::Air
    }
}

fn bench_mesh_generated_chunk(c: &mut Criterion) {
    let generator = TerrainGenerator::default();
    let mut chunk = Chunk::new(ColumnPos::new(2, 3));
    generator.generate(&mut chunk);
    let uvs = BlockUvTable::default();

    c.bench_function("mesh_generated_chunk", |bencher| {
        bencher.iter(|| black_box(build_chunk_geometry(black_box(&chunk), &EmptyWorld, &uvs)))
    });
}

fn bench_mesh_checkerboard(c: &mut Criterion) {
    // Worst case: every solid block is fully exposed.
    let mut chunk = Chunk::new(ColumnPos::new(0, 0));
    for x in 0..16 {
        for y in 0..32 {
            for z in 0..16 {
                if (x + y + z) % 2 == 0 {
                    chunk.set(x, y, z, Block::Stone);
                }
            }
        }
    }
    let uvs = BlockUvTable::default();

    c.bench_function("mesh_checkerboard", |bencher| {
        bencher.iter(|| black_box(build_chunk_geometry(black_box(&chunk), &EmptyWorld, &uvs)))
    });
}

fn bench_uv_table_build(c: &mut Criterion) {
    c.bench_function("uv_table_build", |bencher| {
        bencher.iter(|| black_box(BlockUvTable::default()))
    });
}

criterion_group!(
    benches,
    bench_mesh_generated_chunk,
    bench_mesh_checkerboard,
    bench_uv_table_build,
);
criterion_main!(benches);
