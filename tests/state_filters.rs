use vbstats_terminal::aggregate::ALL_PLAYERS;
use vbstats_terminal::state::{
    apply_delta, AppState, Delta, MatchRecord, Player, PlayerStats, VbData,
};

fn player(id: u32, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        en_name: format!("{name} EN"),
        team: "Omag-MT San Giovanni in Marignano".to_string(),
        team_cn: None,
        position: "Middle Blocker".to_string(),
        number: None,
        age: None,
        height: None,
        avatar: None,
    }
}

fn record(id: &str, name: &str, points: u32) -> MatchRecord {
    MatchRecord {
        id: id.to_string(),
        date: "2025-11-09".to_string(),
        round: "Round 6".to_string(),
        player_name: name.to_string(),
        opponent: "Novara".to_string(),
        home_team: "Omag-MT San Giovanni in Marignano".to_string(),
        away_team: "Novara".to_string(),
        home_score: 3,
        away_score: 1,
        player_stats: PlayerStats {
            points: Some(points),
            ..PlayerStats::default()
        },
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    let data = VbData {
        players: vec![player(1, "A"), player(2, "B")],
        matches: vec![
            record("m1", "A", 14),
            record("m2", "B", 9),
            record("m3", "A", 11),
        ],
        summary: None,
    };
    apply_delta(&mut state, Delta::SetData(data));
    state
}

#[test]
fn filter_options_list_all_then_players_in_file_order() {
    let state = loaded_state();
    assert_eq!(state.filter_options(), vec![ALL_PLAYERS, "A", "B"]);
    assert_eq!(state.active_filter(), ALL_PLAYERS);
}

#[test]
fn cycle_filter_wraps_and_resets_selection() {
    let mut state = loaded_state();
    state.selected = 2;

    state.cycle_filter();
    assert_eq!(state.active_filter(), "A");
    assert_eq!(state.selected, 0);

    state.cycle_filter();
    state.cycle_filter();
    assert_eq!(state.active_filter(), ALL_PLAYERS);
}

#[test]
fn cycle_filter_back_wraps_to_last_player() {
    let mut state = loaded_state();
    state.cycle_filter_back();
    assert_eq!(state.active_filter(), "B");
}

#[test]
fn filtered_matches_follow_active_filter() {
    let mut state = loaded_state();
    assert_eq!(state.filtered_matches().len(), 3);

    state.cycle_filter();
    let filtered = state.filtered_matches();
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|m| m.player_name == "A"));
    assert_eq!(filtered[0].id, "m1");
    assert_eq!(filtered[1].id, "m3");
}

#[test]
fn selection_wraps_both_directions() {
    let mut state = loaded_state();
    assert_eq!(state.selected, 0);

    state.select_prev();
    assert_eq!(state.selected, 2);
    state.select_next();
    assert_eq!(state.selected, 0);
    state.select_next();
    assert_eq!(state.selected, 1);
}

#[test]
fn selection_is_safe_with_no_data() {
    let mut state = AppState::new();
    state.select_next();
    state.select_prev();
    assert_eq!(state.selected, 0);
    assert!(state.selected_match().is_none());
    assert!(state.filtered_matches().is_empty());
}

#[test]
fn selected_match_reads_from_filtered_rows() {
    let mut state = loaded_state();
    state.cycle_filter();
    state.select_next();
    let m = state.selected_match().expect("row selected");
    assert_eq!(m.id, "m3");
}

#[test]
fn active_player_is_none_for_all_sentinel() {
    let mut state = loaded_state();
    assert!(state.active_player().is_none());
    state.cycle_filter();
    assert_eq!(state.active_player().map(|p| p.name.as_str()), Some("A"));
}
