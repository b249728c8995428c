use vbstats_terminal::state::{
    apply_delta, AppState, Delta, MatchRecord, OfficialSeasonStats, OfficialStatLine, Player,
    PlayerStats, VbData,
};

fn player(id: u32, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        en_name: format!("{name} EN"),
        team: "Omag-MT San Giovanni in Marignano".to_string(),
        team_cn: None,
        position: "Opposite".to_string(),
        number: None,
        age: None,
        height: None,
        avatar: None,
    }
}

fn record(id: &str, name: &str, points: u32) -> MatchRecord {
    MatchRecord {
        id: id.to_string(),
        date: "2025-11-16".to_string(),
        round: "Round 7".to_string(),
        player_name: name.to_string(),
        opponent: "Milano".to_string(),
        home_team: "Omag-MT San Giovanni in Marignano".to_string(),
        away_team: "Milano".to_string(),
        home_score: 3,
        away_score: 2,
        player_stats: PlayerStats {
            points: Some(points),
            ..PlayerStats::default()
        },
    }
}

fn data(players: Vec<Player>, matches: Vec<MatchRecord>) -> VbData {
    VbData {
        players,
        matches,
        summary: None,
    }
}

fn official(name: &str) -> OfficialSeasonStats {
    OfficialSeasonStats {
        player_name: name.to_string(),
        player_name_en: format!("{name} EN"),
        season: "2025-26".to_string(),
        team: "Omag-MT San Giovanni in Marignano".to_string(),
        rank: 3,
        official_stats: OfficialStatLine {
            matches_played: 8,
            total_points: 74,
            ..OfficialStatLine::default()
        },
    }
}

#[test]
fn set_data_recomputes_insights_and_stamps_fetch_time() {
    let mut state = AppState::new();
    assert!(state.insights.is_empty());
    assert!(state.data_fetched_at.is_none());

    let delta = Delta::SetData(data(
        vec![player(1, "A")],
        vec![record("m1", "A", 10), record("m2", "A", 20)],
    ));
    apply_delta(&mut state, delta);

    assert!(state.data.is_some());
    assert!(!state.insights.is_empty());
    assert!(state.data_fetched_at.is_some());
    assert!(state.load_error.is_none());
}

#[test]
fn set_data_clamps_selection_to_new_row_count() {
    let mut state = AppState::new();
    apply_delta(
        &mut state,
        Delta::SetData(data(
            vec![player(1, "A")],
            vec![
                record("m1", "A", 10),
                record("m2", "A", 12),
                record("m3", "A", 14),
            ],
        )),
    );
    state.selected = 2;

    apply_delta(
        &mut state,
        Delta::SetData(data(vec![player(1, "A")], vec![record("m1", "A", 10)])),
    );
    assert_eq!(state.selected, 0);
}

#[test]
fn set_data_keeps_active_filter_by_name_across_reorder() {
    let mut state = AppState::new();
    apply_delta(
        &mut state,
        Delta::SetData(data(
            vec![player(1, "A"), player(2, "B")],
            vec![record("m1", "A", 10), record("m2", "B", 8)],
        )),
    );
    state.cycle_filter();
    state.cycle_filter();
    assert_eq!(state.active_filter(), "B");

    // Refresh delivers the players in a different order.
    apply_delta(
        &mut state,
        Delta::SetData(data(
            vec![player(2, "B"), player(1, "A")],
            vec![record("m2", "B", 8), record("m1", "A", 10)],
        )),
    );
    assert_eq!(state.active_filter(), "B");
}

#[test]
fn set_data_clears_a_previous_load_error() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::LoadFailed("connection refused".to_string()));
    assert!(state.load_error.is_some());

    apply_delta(
        &mut state,
        Delta::SetData(data(vec![player(1, "A")], vec![record("m1", "A", 10)])),
    );
    assert!(state.load_error.is_none());
}

#[test]
fn load_failed_after_first_snapshot_keeps_data() {
    let mut state = AppState::new();
    apply_delta(
        &mut state,
        Delta::SetData(data(vec![player(1, "A")], vec![record("m1", "A", 10)])),
    );

    apply_delta(&mut state, Delta::LoadFailed("http 503".to_string()));
    assert!(state.data.is_some());
    assert!(state.load_error.is_none());
    assert!(state.logs.iter().any(|l| l.contains("[WARN]")));
}

#[test]
fn load_failed_before_first_snapshot_sets_error_surface() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::LoadFailed("http 404".to_string()));
    assert_eq!(state.load_error.as_deref(), Some("http 404"));
    assert!(state.data.is_none());
}

#[test]
fn season_stats_unavailable_sets_absence_marker_only_when_empty() {
    let mut state = AppState::new();
    apply_delta(&mut state, Delta::SeasonStatsUnavailable);
    assert!(state.season_stats_missing);

    apply_delta(&mut state, Delta::SetSeasonStats(official("A")));
    assert!(!state.season_stats_missing);
    assert!(state.season_fetched_at.is_some());

    // A later failed refresh keeps the sheet already loaded.
    apply_delta(&mut state, Delta::SeasonStatsUnavailable);
    assert!(!state.season_stats_missing);
    assert!(state.season_stats.is_some());
}

#[test]
fn official_sheet_only_shows_for_matching_filter() {
    let mut state = AppState::new();
    apply_delta(
        &mut state,
        Delta::SetData(data(
            vec![player(1, "A"), player(2, "B")],
            vec![record("m1", "A", 10)],
        )),
    );
    apply_delta(&mut state, Delta::SetSeasonStats(official("A")));

    assert!(state.official_for_active().is_none());
    state.cycle_filter();
    assert_eq!(state.active_filter(), "A");
    assert!(state.official_for_active().is_some());
    state.cycle_filter();
    assert!(state.official_for_active().is_none());
}

#[test]
fn log_ring_is_capped() {
    let mut state = AppState::new();
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}
