use std::collections::HashSet;

use crate::state::MatchRecord;

/// Sentinel filter value that selects every match.
pub const ALL_PLAYERS: &str = "all";

const RECENT_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTrend {
    Up,
    Down,
}

/// Matches whose `player_name` equals `name`, in input order. The `"all"`
/// sentinel selects the whole collection.
pub fn filter_by_player<'a>(matches: &'a [MatchRecord], name: &str) -> Vec<&'a MatchRecord> {
    if name == ALL_PLAYERS {
        return matches.iter().collect();
    }
    matches.iter().filter(|m| m.player_name == name).collect()
}

pub fn total_points(matches: &[MatchRecord], name: &str) -> u32 {
    filter_by_player(matches, name)
        .iter()
        .map(|m| m.player_stats.points.unwrap_or(0))
        .sum()
}

/// Team names in the feed carry sponsor prefixes, so the tracked side is
/// matched by substring. A match where neither side contains the marker
/// counts as no win.
pub fn is_tracked_win(m: &MatchRecord, home_marker: &str) -> bool {
    (m.home_team.contains(home_marker) && m.home_score > m.away_score)
        || (m.away_team.contains(home_marker) && m.away_score > m.home_score)
}

/// Wins over total as a whole percentage, 0 for an empty collection.
pub fn win_rate(matches: &[&MatchRecord], home_marker: &str) -> u8 {
    if matches.is_empty() {
        return 0;
    }
    let wins = matches
        .iter()
        .filter(|m| is_tracked_win(m, home_marker))
        .count();
    (wins as f64 / matches.len() as f64 * 100.0).round() as u8
}

/// Per-player season insights, grouped by first occurrence of the player
/// name in the feed. Each non-empty group yields an average-points line, a
/// season-high line when the maximum is positive, and a recent-form line
/// when the last three rows of the group outscore the season average.
pub fn generate_insights(matches: &[MatchRecord]) -> Vec<Insight> {
    let mut insights = Vec::new();

    for name in player_names_in_order(matches) {
        let group = filter_by_player(matches, name);
        let points: Vec<u32> = group
            .iter()
            .map(|m| m.player_stats.points.unwrap_or(0))
            .collect();
        if points.is_empty() {
            continue;
        }

        let total: u32 = points.iter().sum();
        let avg = total as f64 / points.len() as f64;
        let max = points.iter().copied().max().unwrap_or(0);

        insights.push(Insight {
            kind: InsightKind::Info,
            text: format!(
                "{name} is averaging {avg:.1} points per game across {} matches this season",
                group.len()
            ),
        });

        if max > 0 {
            insights.push(Insight {
                kind: InsightKind::Success,
                text: format!("{name} posted a season-high {max} points in a single match"),
            });
        }

        // Group order is feed order, no re-sort before slicing the tail.
        // Both sides of the comparison are the rendered one-decimal values.
        let tail = &points[points.len().saturating_sub(RECENT_WINDOW)..];
        let recent_avg = tail.iter().sum::<u32>() as f64 / tail.len() as f64;
        if round1(recent_avg) > round1(avg) {
            insights.push(Insight {
                kind: InsightKind::Success,
                text: format!(
                    "{name} is averaging {recent_avg:.1} points over the last 3 matches, form trending up"
                ),
            });
        }
    }

    insights
}

#[derive(Debug, Clone)]
pub struct Overview {
    pub total_matches: usize,
    pub total_points: u32,
    pub avg_points: f64,
    pub total_aces: u32,
    pub aces_per_game: f64,
    pub wins: usize,
    pub win_rate: u8,
    pub recent_avg: f64,
    pub trend: FormTrend,
}

/// The four dashboard cards over an already-filtered match list. The feed
/// lists matches newest first, so recent form reads the head of the list.
pub fn overview(matches: &[&MatchRecord], home_marker: &str) -> Overview {
    let total_matches = matches.len();
    let total_points: u32 = matches
        .iter()
        .map(|m| m.player_stats.points.unwrap_or(0))
        .sum();
    let avg_points = if total_matches > 0 {
        total_points as f64 / total_matches as f64
    } else {
        0.0
    };
    let total_aces: u32 = matches
        .iter()
        .map(|m| m.player_stats.aces.unwrap_or(0))
        .sum();
    let aces_per_game = total_aces as f64 / total_matches.max(1) as f64;
    let wins = matches
        .iter()
        .filter(|m| is_tracked_win(m, home_marker))
        .count();
    let rate = win_rate(matches, home_marker);

    let head = &matches[..total_matches.min(RECENT_WINDOW)];
    let recent_avg = if head.is_empty() {
        0.0
    } else {
        head.iter()
            .map(|m| m.player_stats.points.unwrap_or(0))
            .sum::<u32>() as f64
            / head.len() as f64
    };
    let trend = if round1(recent_avg) > round1(avg_points) {
        FormTrend::Up
    } else {
        FormTrend::Down
    };

    Overview {
        total_matches,
        total_points,
        avg_points,
        total_aces,
        aces_per_game,
        wins,
        win_rate: rate,
        recent_avg,
        trend,
    }
}

#[derive(Debug, Clone)]
pub struct PlayerSeasonTotals {
    pub matches: usize,
    pub points: u32,
    pub avg_points: f64,
    pub aces: u32,
    pub wins: usize,
    pub win_rate: u8,
    pub attack_points: u32,
    pub avg_attack_success: f64,
    pub avg_attack_efficiency: f64,
    pub blocks: u32,
    pub receptions: u32,
    pub avg_reception_pos: f64,
}

/// Banner reductions for one player's filtered matches. Percentage means
/// divide by the full match count: a match without a recorded rate
/// contributes zero, it is not skipped.
pub fn player_season_totals(matches: &[&MatchRecord], home_marker: &str) -> PlayerSeasonTotals {
    let total = matches.len();
    let points: u32 = matches
        .iter()
        .map(|m| m.player_stats.points.unwrap_or(0))
        .sum();
    let avg_points = if total > 0 {
        points as f64 / total as f64
    } else {
        0.0
    };
    let aces: u32 = matches
        .iter()
        .map(|m| m.player_stats.aces.unwrap_or(0))
        .sum();
    let wins = matches
        .iter()
        .filter(|m| is_tracked_win(m, home_marker))
        .count();
    let rate = win_rate(matches, home_marker);

    let attack_points: u32 = matches
        .iter()
        .map(|m| m.player_stats.successful_attacks.unwrap_or(0))
        .sum();
    let avg_attack_success = mean_over(
        total,
        matches
            .iter()
            .map(|m| parse_pct(m.player_stats.attack_success.as_deref())),
    );
    let avg_attack_efficiency = mean_over(
        total,
        matches
            .iter()
            .map(|m| parse_pct(m.player_stats.attack_efficiency.as_deref())),
    );

    let blocks: u32 = matches
        .iter()
        .map(|m| m.player_stats.blocks.unwrap_or(0))
        .sum();
    let receptions: u32 = matches
        .iter()
        .map(|m| m.player_stats.receptions.unwrap_or(0))
        .sum();
    let avg_reception_pos = mean_over(
        total,
        matches
            .iter()
            .map(|m| m.player_stats.reception_pos_pct.unwrap_or(0.0)),
    );

    PlayerSeasonTotals {
        matches: total,
        points,
        avg_points,
        aces,
        wins,
        win_rate: rate,
        attack_points,
        avg_attack_success,
        avg_attack_efficiency,
        blocks,
        receptions,
        avg_reception_pos,
    }
}

/// `"42.9%"` to 42.9; absent or unparseable rates read as zero percent.
pub fn parse_pct(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    raw.trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or(0.0)
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn mean_over(total: usize, values: impl Iterator<Item = f64>) -> f64 {
    if total == 0 {
        return 0.0;
    }
    values.sum::<f64>() / total as f64
}

fn player_names_in_order(matches: &[MatchRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for m in matches {
        if seen.insert(m.player_name.as_str()) {
            names.push(m.player_name.as_str());
        }
    }
    names
}
