use chrono::NaiveDate;

use crate::state::MatchRecord;

#[derive(Debug, Clone)]
pub struct ChartPoint {
    pub date: String,
    pub label: String,
    pub round: String,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub player: String,
    pub points: Vec<ChartPoint>,
    pub avg: f64,
    pub max: u32,
    pub min: u32,
}

/// One series per player, grouped in first-occurrence order and sorted by
/// match date ascending within each series. Rows with unparseable dates sort
/// first and keep their relative order.
pub fn build_series(matches: &[MatchRecord]) -> Vec<ChartSeries> {
    let mut series: Vec<ChartSeries> = Vec::new();

    for m in matches {
        let point = ChartPoint {
            date: m.date.clone(),
            label: format_date_short(&m.date),
            round: m.round.clone(),
            points: m.player_stats.points.unwrap_or(0),
        };
        match series.iter_mut().find(|s| s.player == m.player_name) {
            Some(entry) => entry.points.push(point),
            None => series.push(ChartSeries {
                player: m.player_name.clone(),
                points: vec![point],
                avg: 0.0,
                max: 0,
                min: 0,
            }),
        }
    }

    for entry in &mut series {
        entry
            .points
            .sort_by_key(|point| parse_match_date(&point.date));
        let values: Vec<u32> = entry.points.iter().map(|p| p.points).collect();
        entry.avg = values.iter().sum::<u32>() as f64 / values.len().max(1) as f64;
        entry.max = values.iter().copied().max().unwrap_or(0);
        entry.min = values.iter().copied().min().unwrap_or(0);
    }

    series
}

/// `M/d` label for chart axes, falling back to the raw string.
pub fn format_date_short(raw: &str) -> String {
    match parse_match_date(raw.trim()) {
        Some(date) => {
            let formatted = date.format("%m/%d").to_string();
            trim_leading_zeros(&formatted)
        }
        None => raw.trim().to_string(),
    }
}

fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%d/%m/%Y"];

    let cleaned = raw.trim();
    // Timestamps keep only their date part.
    let cleaned = cleaned.split(['T', ' ']).next().unwrap_or(cleaned);
    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return Some(date);
        }
    }
    None
}

fn trim_leading_zeros(formatted: &str) -> String {
    formatted
        .split('/')
        .map(|part| part.trim_start_matches('0'))
        .map(|part| if part.is_empty() { "0" } else { part })
        .collect::<Vec<_>>()
        .join("/")
}
