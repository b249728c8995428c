use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use vbstats_terminal::aggregate::{self, ALL_PLAYERS};
use vbstats_terminal::data_fetch::{parse_season_stats_json, parse_vb_data_json};
use vbstats_terminal::state::{MatchRecord, PlayerStats};
use vbstats_terminal::trend;

fn synthetic_season(players: usize, rounds: usize) -> Vec<MatchRecord> {
    let mut matches = Vec::with_capacity(players * rounds);
    for p in 0..players {
        for r in 0..rounds {
            let home = r % 2 == 0;
            matches.push(MatchRecord {
                id: format!("p{p}-r{r}"),
                date: format!("2025-{:02}-{:02}", 9 + r / 28, 1 + r % 28),
                round: format!("Round {}", r + 1),
                player_name: format!("Player {p}"),
                opponent: "Novara".to_string(),
                home_team: if home {
                    "Omag-MT San Giovanni in Marignano".to_string()
                } else {
                    "Igor Gorgonzola Novara".to_string()
                },
                away_team: if home {
                    "Igor Gorgonzola Novara".to_string()
                } else {
                    "Omag-MT San Giovanni in Marignano".to_string()
                },
                home_score: 3,
                away_score: (r % 3) as u8,
                player_stats: PlayerStats {
                    points: Some(((p * 7 + r * 3) % 25) as u32),
                    attacks: Some(20),
                    successful_attacks: Some(((r * 5) % 12) as u32),
                    attack_success: Some(format!("{}.{}%", 30 + r % 30, r % 10)),
                    aces: Some((r % 4) as u32),
                    blocks: Some((r % 3) as u32),
                    receptions: Some((r % 6) as u32),
                    reception_pos_pct: Some(50.0 + (r % 40) as f64),
                    ..PlayerStats::default()
                },
            });
        }
    }
    matches
}

fn bench_data_parse(c: &mut Criterion) {
    c.bench_function("data_parse", |b| {
        b.iter(|| {
            let data = parse_vb_data_json(black_box(DATA_JSON)).unwrap();
            black_box(data.matches.len());
        })
    });
}

fn bench_season_stats_parse(c: &mut Criterion) {
    c.bench_function("season_stats_parse", |b| {
        b.iter(|| {
            let stats = parse_season_stats_json(black_box(SEASON_STATS_JSON)).unwrap();
            black_box(stats.official_stats.total_points);
        })
    });
}

fn bench_insights(c: &mut Criterion) {
    let matches = synthetic_season(6, 40);
    c.bench_function("insights", |b| {
        b.iter(|| {
            let insights = aggregate::generate_insights(black_box(&matches));
            black_box(insights.len());
        })
    });
}

fn bench_overview(c: &mut Criterion) {
    let matches = synthetic_season(1, 40);
    let refs: Vec<&MatchRecord> = matches.iter().collect();
    c.bench_function("overview", |b| {
        b.iter(|| {
            let cards = aggregate::overview(black_box(&refs), "San Giovanni");
            black_box(cards.total_points);
        })
    });
}

fn bench_player_season_totals(c: &mut Criterion) {
    let matches = synthetic_season(1, 40);
    let refs: Vec<&MatchRecord> = matches.iter().collect();
    c.bench_function("player_season_totals", |b| {
        b.iter(|| {
            let totals = aggregate::player_season_totals(black_box(&refs), "San Giovanni");
            black_box(totals.points);
        })
    });
}

fn bench_filter_and_total(c: &mut Criterion) {
    let matches = synthetic_season(6, 40);
    c.bench_function("filter_and_total", |b| {
        b.iter(|| {
            let filtered = aggregate::filter_by_player(black_box(&matches), "Player 3");
            black_box(filtered.len());
            let total = aggregate::total_points(black_box(&matches), ALL_PLAYERS);
            black_box(total);
        })
    });
}

fn bench_chart_series(c: &mut Criterion) {
    let matches = synthetic_season(6, 40);
    c.bench_function("chart_series", |b| {
        b.iter(|| {
            let series = trend::build_series(black_box(&matches));
            black_box(series.len());
        })
    });
}

criterion_group!(
    perf,
    bench_data_parse,
    bench_season_stats_parse,
    bench_insights,
    bench_overview,
    bench_player_season_totals,
    bench_filter_and_total,
    bench_chart_series
);
criterion_main!(perf);

static DATA_JSON: &str = include_str!("../tests/fixtures/data.json");
static SEASON_STATS_JSON: &str = include_str!("../tests/fixtures/official_season_stats.json");
