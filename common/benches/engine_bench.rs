use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use eco_snake_common::effects::ToneEmitter;
use eco_snake_common::game::{GRID_SIZE, GameSettings, Item, ItemKind, ItemSet, Point, Snake, find_cell};
use eco_snake_common::session::EcoSnakeSession;
use eco_snake_common::theme::default_catalog;
use eco_snake_common::{EcoSnakeGame, SessionRng};

fn new_game(seed: u64) -> EcoSnakeGame {
    EcoSnakeGame::new(
        GameSettings::default(),
        Box::new(default_catalog()),
        Box::new(ToneEmitter::silent()),
        SessionRng::new(seed),
    )
}

fn bench_headless_minute() {
    let mut game = new_game(42);
    EcoSnakeSession::run_headless(&mut game, 3_750);
}

fn crowded_items() -> ItemSet {
    let mut items = ItemSet::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            if (x + y) % 3 != 0 {
                items.insert(Item::new(Point::new(x, y), ItemKind::Nature, "bench"));
            }
        }
    }
    items
}

fn bench_spawner_crowded_grid(items: &ItemSet) {
    let snake = Snake::new(Point::new(8, 8));
    let mut rng = SessionRng::new(7);
    for _ in 0..1_000 {
        let _ = find_cell(&snake, items, &mut rng);
    }
}

fn engine_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("headless_minute", |b| {
        b.iter(bench_headless_minute)
    });

    let items = crowded_items();
    group.bench_function("spawner_crowded_grid", |b| {
        b.iter(|| bench_spawner_crowded_grid(&items))
    });

    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
