use std::collections::VecDeque;
use std::env;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::aggregate::{self, ALL_PLAYERS, Insight};

pub const DEFAULT_HOME_MARKER: &str = "San Giovanni";
pub const DEFAULT_SEASON_LABEL: &str = "2025-26 Serie A1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(rename = "enName")]
    pub en_name: String,
    pub team: String,
    #[serde(rename = "teamCN", default)]
    pub team_cn: Option<String>,
    pub position: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

// Every field optional: absence means "not recorded" and aggregates as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub attacks: Option<u32>,
    #[serde(rename = "successfulAttacks", default)]
    pub successful_attacks: Option<u32>,
    #[serde(rename = "attackSuccess", default)]
    pub attack_success: Option<String>,
    #[serde(rename = "attackEfficiency", default)]
    pub attack_efficiency: Option<String>,
    #[serde(default)]
    pub blocks: Option<u32>,
    #[serde(default)]
    pub serves: Option<u32>,
    #[serde(default)]
    pub aces: Option<u32>,
    #[serde(default)]
    pub receptions: Option<u32>,
    #[serde(default)]
    pub reception_pos_pct: Option<f64>,
    #[serde(default)]
    pub reception_prf_pct: Option<f64>,
    #[serde(default)]
    pub errors: Option<u32>,
    #[serde(default)]
    pub blocked: Option<u32>,
    #[serde(rename = "playerRating", default)]
    pub player_rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub date: String,
    pub round: String,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(default)]
    pub opponent: String,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    #[serde(rename = "homeScore", default)]
    pub home_score: u8,
    #[serde(rename = "awayScore", default)]
    pub away_score: u8,
    #[serde(rename = "playerStats", default)]
    pub player_stats: PlayerStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonSummary {
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub avg_points: f64,
    #[serde(default)]
    pub total_attacks: u32,
    #[serde(default)]
    pub total_attack_points: u32,
    #[serde(default)]
    pub attack_success_rate: f64,
    #[serde(default)]
    pub total_serves: u32,
    #[serde(default)]
    pub total_aces: u32,
    #[serde(default)]
    pub ace_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficialStatLine {
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub total_points: u32,
    #[serde(default)]
    pub total_attacks: u32,
    #[serde(default)]
    pub successful_attacks: u32,
    #[serde(default)]
    pub attack_percentage: f64,
    #[serde(default)]
    pub total_serves: u32,
    #[serde(default)]
    pub aces: u32,
    #[serde(default)]
    pub blocks: u32,
    #[serde(default)]
    pub serve_errors: u32,
    #[serde(default)]
    pub perfect_receptions: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialSeasonStats {
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "playerNameEn", default)]
    pub player_name_en: String,
    pub season: String,
    pub team: String,
    #[serde(default)]
    pub rank: u32,
    pub official_stats: OfficialStatLine,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VbData {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub summary: Option<SeasonSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Matches,
}

pub struct AppState {
    pub screen: Screen,
    pub data: Option<VbData>,
    pub season_stats: Option<OfficialSeasonStats>,
    pub season_stats_missing: bool,
    pub load_error: Option<String>,
    pub filter_idx: usize,
    pub selected: usize,
    pub insights: Vec<Insight>,
    pub home_marker: String,
    pub season_label: String,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
    pub data_fetched_at: Option<SystemTime>,
    pub season_fetched_at: Option<SystemTime>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Dashboard,
            data: None,
            season_stats: None,
            season_stats_missing: false,
            load_error: None,
            filter_idx: 0,
            selected: 0,
            insights: Vec::new(),
            home_marker: env_or_default("HOME_TEAM_MARKER", DEFAULT_HOME_MARKER),
            season_label: env_or_default("SEASON_LABEL", DEFAULT_SEASON_LABEL),
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
            data_fetched_at: None,
            season_fetched_at: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        self.data.as_ref().map(|d| d.players.as_slice()).unwrap_or(&[])
    }

    pub fn matches(&self) -> &[MatchRecord] {
        self.data.as_ref().map(|d| d.matches.as_slice()).unwrap_or(&[])
    }

    pub fn summary(&self) -> Option<&SeasonSummary> {
        self.data.as_ref().and_then(|d| d.summary.as_ref())
    }

    /// Filter chips in display order: the "all" sentinel followed by every
    /// player name in file order.
    pub fn filter_options(&self) -> Vec<&str> {
        let mut options = vec![ALL_PLAYERS];
        options.extend(self.players().iter().map(|p| p.name.as_str()));
        options
    }

    pub fn active_filter(&self) -> &str {
        self.filter_options()
            .get(self.filter_idx)
            .copied()
            .unwrap_or(ALL_PLAYERS)
    }

    pub fn active_player(&self) -> Option<&Player> {
        let name = self.active_filter();
        if name == ALL_PLAYERS {
            return None;
        }
        self.players().iter().find(|p| p.name == name)
    }

    /// Official season sheet, but only when it belongs to the active filter.
    pub fn official_for_active(&self) -> Option<&OfficialSeasonStats> {
        let stats = self.season_stats.as_ref()?;
        if stats.player_name == self.active_filter() {
            Some(stats)
        } else {
            None
        }
    }

    pub fn cycle_filter(&mut self) {
        let total = self.filter_options().len();
        if total == 0 {
            return;
        }
        self.filter_idx = (self.filter_idx + 1) % total;
        self.selected = 0;
    }

    pub fn cycle_filter_back(&mut self) {
        let total = self.filter_options().len();
        if total == 0 {
            return;
        }
        self.filter_idx = if self.filter_idx == 0 {
            total - 1
        } else {
            self.filter_idx - 1
        };
        self.selected = 0;
    }

    pub fn filtered_matches(&self) -> Vec<&MatchRecord> {
        aggregate::filter_by_player(self.matches(), self.active_filter())
    }

    pub fn selected_match(&self) -> Option<&MatchRecord> {
        let filtered = self.filtered_matches();
        filtered.get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let total = self.filtered_matches().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.filtered_matches().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.filtered_matches().len();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}

pub enum Delta {
    SetData(VbData),
    SetSeasonStats(OfficialSeasonStats),
    SeasonStatsUnavailable,
    LoadFailed(String),
    Log(String),
}

#[derive(Debug, Clone)]
pub enum ProviderCommand {
    Refresh,
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetData(data) => {
            let active = state.active_filter().to_string();
            state.insights = aggregate::generate_insights(&data.matches);
            state.data = Some(data);
            state.load_error = None;
            state.data_fetched_at = Some(SystemTime::now());
            // Keep the active chip pinned to its name, not its index, across
            // a refresh that may reorder players.
            let idx = state
                .filter_options()
                .iter()
                .position(|name| *name == active)
                .unwrap_or(0);
            state.filter_idx = idx;
            state.clamp_selection();
        }
        Delta::SetSeasonStats(stats) => {
            state.season_stats = Some(stats);
            state.season_stats_missing = false;
            state.season_fetched_at = Some(SystemTime::now());
        }
        Delta::SeasonStatsUnavailable => {
            // A failed refresh keeps a previously loaded sheet.
            if state.season_stats.is_none() {
                state.season_stats_missing = true;
            }
        }
        Delta::LoadFailed(err) => {
            if state.data.is_none() {
                state.load_error = Some(err.clone());
            }
            state.push_log(format!("[WARN] Data load failed: {err}"));
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "Dashboard",
        Screen::Matches => "Matches",
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => default.to_string(),
    }
}
