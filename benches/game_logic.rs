use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mixel_memory::core::{ImagePool, Level, MatchGame};
use mixel_memory::term::{Gallery, Screen};
use mixel_memory::types::{InputEvent, MouseButton};

const KEYS: [&str; 8] = ["ash", "bean", "coco", "dot", "echo", "fig", "ginger", "miso"];

fn bench_deal(c: &mut Criterion) {
    let pool = ImagePool::new(KEYS);
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("deal_last_level", |b| {
        b.iter(|| pool.deal(black_box(Level::LAST), &mut rng).unwrap())
    });
}

fn bench_update(c: &mut Criterion) {
    let mut game = MatchGame::with_seed(ImagePool::new(KEYS), 12345).unwrap();
    let rect = game.tiles().get(0).unwrap().rect;
    let click = [InputEvent::Click {
        button: MouseButton::Left,
        x: rect.x,
        y: rect.y,
    }];

    let idle: [InputEvent; 0] = [];

    c.bench_function("update_idle_frame", |b| {
        b.iter(|| game.update(black_box(&idle[..])).unwrap())
    });
    c.bench_function("update_click_shown_tile", |b| {
        b.iter(|| game.update(black_box(&click[..])).unwrap())
    });
}

fn bench_draw(c: &mut Criterion) {
    let game = MatchGame::with_seed(ImagePool::new(KEYS), 12345).unwrap();
    let gallery: Gallery = KEYS.iter().map(|k| (*k, vec![k.to_string()])).collect();
    let mut screen = Screen::headless(gallery, 120, 40);

    c.bench_function("draw_headless_frame", |b| {
        b.iter(|| game.draw(&mut screen, None).unwrap())
    });
}

criterion_group!(benches, bench_deal, bench_update, bench_draw);
criterion_main!(benches);
