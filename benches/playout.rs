use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use skyjo_engine::{play_out, GameConfig, GameRng, GreedyPolicy, RandomPolicy, Session};

fn started(seed: u64, players: usize) -> Session {
    let mut session = Session::new(GameConfig::default().with_seed(seed));
    for i in 0..players {
        session
            .add_player(&format!("Bot {i}"))
            .expect("table has room");
    }
    session.start().expect("enough players");
    session
}

fn bench_random_playout(c: &mut Criterion) {
    let session = started(12345, 4);

    c.bench_function("random_playout_4p", |b| {
        b.iter_batched(
            || (session.clone(), GameRng::new(7)),
            |(mut session, mut rng)| {
                play_out(black_box(&mut session), &RandomPolicy, &mut rng, 0).expect("legal play")
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_greedy_playout(c: &mut Criterion) {
    let session = started(12345, 4);
    let policy = GreedyPolicy::default();

    c.bench_function("greedy_playout_4p", |b| {
        b.iter_batched(
            || (session.clone(), GameRng::new(7)),
            |(mut session, mut rng)| {
                play_out(black_box(&mut session), &policy, &mut rng, 0).expect("legal play")
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_start(c: &mut Criterion) {
    c.bench_function("start_8p", |b| b.iter(|| started(black_box(99), 8)));
}

fn bench_codec(c: &mut Criterion) {
    let session = started(12345, 4);

    c.bench_function("session_to_bytes", |b| {
        b.iter(|| black_box(&session).to_bytes().expect("encodes"))
    });

    let bytes = session.to_bytes().expect("encodes");
    c.bench_function("session_from_bytes", |b| {
        b.iter(|| Session::from_bytes(black_box(&bytes)).expect("decodes"))
    });
}

criterion_group!(
    benches,
    bench_random_playout,
    bench_greedy_playout,
    bench_start,
    bench_codec
);
criterion_main!(benches);
