criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_card_set,
        shuffling_deck,
        draining_shoe,
        sweeping_full_line,
        snapshotting_full_line,
}

fn evaluating_card_set(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 3-card CardSet", |b| {
        let set = CardSet::random();
        b.iter(|| set.strength())
    });
}

fn shuffling_deck(c: &mut criterion::Criterion) {
    c.bench_function("shuffle a 54-card Deck", |b| {
        b.iter(|| Deck::new(rand::random()))
    });
}

fn draining_shoe(c: &mut criterion::Criterion) {
    c.bench_function("drain a shared Shoe", |b| {
        b.iter(|| {
            let shoe = Shoe::new(rand::random());
            std::iter::from_fn(|| shoe.draw()).count()
        })
    });
}

fn sweeping_full_line(c: &mut criterion::Criterion) {
    c.bench_function("sweep winners on a full Line", |b| {
        b.iter_batched(
            full_line,
            |mut line| line.update_winners(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn snapshotting_full_line(c: &mut criterion::Criterion) {
    let line = BattleLine::from(full_line());
    c.bench_function("snapshot a full BattleLine", |b| b.iter(|| line.snapshot()));
}

fn full_line() -> Line {
    let mut line = Line::default();
    let mut deck = Deck::new(rand::random());
    for stone in 0..N_STONES {
        for side in Side::all() {
            for card in deck.by_ref().take(CAPACITY) {
                let _ = line.play(stone, side, card);
            }
        }
    }
    line
}

use battleline::Arbitrary;
use battleline::CAPACITY;
use battleline::N_STONES;
use battleline::cards::*;
use battleline::line::*;
