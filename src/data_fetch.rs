use std::env;

use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;

use crate::http_client::http_client;
use crate::state::{OfficialSeasonStats, VbData};

pub const DATA_PATH: &str = "/data/data.json";
pub const SEASON_STATS_PATH: &str = "/data/official_season_stats.json";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

pub fn data_base_url() -> String {
    match env::var("DATA_BASE_URL") {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Primary document: players, matches and the optional season summary.
pub fn fetch_vb_data() -> Result<VbData> {
    let url = format!("{}{}", data_base_url(), DATA_PATH);
    let body = fetch_fresh(&url).context("data request failed")?;
    parse_vb_data_json(&body)
}

/// Secondary document: the official per-player season stat sheet. Callers
/// treat a failure here as "no supplementary data", never as fatal.
pub fn fetch_official_season_stats() -> Result<OfficialSeasonStats> {
    let url = format!("{}{}", data_base_url(), SEASON_STATS_PATH);
    let body = fetch_fresh(&url).context("season stats request failed")?;
    parse_season_stats_json(&body)
}

pub fn parse_vb_data_json(raw: &str) -> Result<VbData> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("data document is empty"));
    }
    serde_json::from_str(trimmed).context("invalid data json")
}

pub fn parse_season_stats_json(raw: &str) -> Result<OfficialSeasonStats> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("season stats document is empty"));
    }
    serde_json::from_str(trimmed).context("invalid season stats json")
}

fn fetch_fresh(url: &str) -> Result<String> {
    let client = http_client()?;

    let resp = client
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {}: {}", status, truncate(&body, 160)));
    }
    Ok(body)
}

fn truncate(raw: &str, max: usize) -> &str {
    if raw.len() <= max {
        return raw;
    }
    let mut end = max;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}
