use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3::core::refill::collapse;
use match3::core::{
    find_matches, generate, has_any_match, BoardConfig, BoardEngine, Grid, Palette, PieceSource,
    Refill,
};
use match3::types::{Cell, RefillPolicy};

fn random_grid(seed: u32) -> Grid {
    let mut grid = Grid::new(8, 8).unwrap();
    RefillPolicy::Respawn.refill(&mut grid, &mut PieceSource::new(Palette::new(4).unwrap(), seed));
    grid
}

fn bench_find_matches(c: &mut Criterion) {
    let grid = random_grid(12345);

    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&grid)))
    });
}

fn bench_has_any_match(c: &mut Criterion) {
    let engine = BoardEngine::new_round(&BoardConfig::default()).unwrap();

    c.bench_function("has_any_match_stable_8x8", |b| {
        b.iter(|| has_any_match(black_box(engine.grid())))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut source = PieceSource::new(Palette::new(5).unwrap(), 12345);

    c.bench_function("generate_8x8", |b| {
        b.iter(|| generate(8, 8, &mut source).unwrap())
    });
}

fn bench_collapse(c: &mut Criterion) {
    let base = random_grid(7);
    let mut source = PieceSource::new(Palette::new(4).unwrap(), 7);

    c.bench_function("collapse_3_holes_per_column", |b| {
        b.iter(|| {
            let mut grid = base.clone();
            for x in 0..8 {
                for y in 2..5 {
                    let _ = grid.set(Cell::new(x, y), None);
                }
            }
            collapse(&mut grid, &mut source);
        })
    });
}

fn bench_resolve_cascade(c: &mut Criterion) {
    let palette = Palette::new(4).unwrap();

    c.bench_function("resolve_cascade_random_8x8", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut engine =
                BoardEngine::with_grid(random_grid(seed), palette, RefillPolicy::Gravity, seed);
            engine.set_record_events(false);
            engine.resolve_cascade().unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_find_matches,
    bench_has_any_match,
    bench_generate,
    bench_collapse,
    bench_resolve_cascade
);
criterion_main!(benches);
