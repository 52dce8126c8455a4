use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use intern_portal::dashboard::render_dashboard;
use intern_portal::document::Document;
use intern_portal::fetch::parse_leaderboard_json;
use intern_portal::leaderboard::render_leaderboard;
use intern_portal::model::{InternProfile, LeaderboardEntry};

fn sample_board(len: usize) -> Vec<LeaderboardEntry> {
    (0..len)
        .map(|i| {
            let name = format!("Intern {i}");
            let referral = format!("intern{i}2025");
            LeaderboardEntry::new(&name, &referral, (len - i) as u64 * 10)
        })
        .collect()
}

fn bench_leaderboard_render(c: &mut Criterion) {
    let board = sample_board(1_000);
    let mut doc = Document::leaderboard();
    c.bench_function("leaderboard_render_1000", |b| {
        b.iter(|| {
            render_leaderboard(&mut doc, black_box(&board));
            black_box(doc.leaderboard_rows().count());
        })
    });
}

fn bench_leaderboard_parse(c: &mut Criterion) {
    let raw = serde_json::to_string(&sample_board(1_000)).expect("serializable board");
    c.bench_function("leaderboard_parse_1000", |b| {
        b.iter(|| {
            let entries = parse_leaderboard_json(black_box(&raw)).unwrap();
            black_box(entries.map(|e| e.len()));
        })
    });
}

fn bench_dashboard_render(c: &mut Criterion) {
    let profile = InternProfile::new("Praveen Revalla", "praveen2025", 1700);
    let mut doc = Document::dashboard("Praveen");
    c.bench_function("dashboard_render", |b| {
        b.iter(|| {
            render_dashboard(&mut doc, black_box(&profile));
            black_box(doc.reward_cards().count());
        })
    });
}

criterion_group!(
    benches,
    bench_leaderboard_render,
    bench_leaderboard_parse,
    bench_dashboard_render
);
criterion_main!(benches);
