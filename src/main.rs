use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Wrap};

use vbstats_terminal::aggregate::{
    self, FormTrend, Insight, InsightKind, Overview, PlayerSeasonTotals,
};
use vbstats_terminal::data_fetch;
use vbstats_terminal::feed;
use vbstats_terminal::state::{
    self, apply_delta, screen_label, AppState, MatchRecord, Screen,
};
use vbstats_terminal::trend::{self, ChartSeries};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<state::ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<state::ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.help_overlay {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                    self.state.help_overlay = false;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Dashboard,
            KeyCode::Char('2') | KeyCode::Enter => self.state.screen = Screen::Matches,
            KeyCode::Char('b') | KeyCode::Esc => self.state.screen = Screen::Dashboard,
            KeyCode::Tab | KeyCode::Char('p') => self.state.cycle_filter(),
            KeyCode::BackTab | KeyCode::Char('P') => self.state.cycle_filter_back(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.request_refresh(),
            KeyCode::Char('?') => self.state.help_overlay = true,
            _ => {}
        }
    }

    fn request_refresh(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Refresh unavailable");
            return;
        };
        if tx.send(state::ProviderCommand::Refresh).is_err() {
            self.state.push_log("[WARN] Refresh request failed");
        } else {
            self.state.push_log("[INFO] Refresh request sent");
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    feed::spawn_provider(tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<state::Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let state = &app.state;

    if state.data.is_none() {
        if let Some(err) = &state.load_error {
            render_load_error(frame, frame.size(), err);
        } else {
            render_loading(frame, frame.size());
        }
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_filter_chips(frame, chunks[1], state);

    match state.screen {
        Screen::Dashboard => render_dashboard(frame, chunks[2], state),
        Screen::Matches => render_matches(frame, chunks[2], state),
    }

    let footer = Paragraph::new(footer_text(state))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let season_points = state.summary().map(|s| s.total_points).unwrap_or(0);
    let hero = format!(
        "{} matches | {} players | {} season points",
        state.matches().len(),
        state.players().len(),
        season_points
    );
    let line1 = format!(
        "  .-.  VBSTATS | {} | {}",
        state.season_label,
        screen_label(state.screen)
    );
    let line2 = format!(" /___\\ {hero}");
    let line3 = match state.data_fetched_at {
        Some(t) => {
            let local = chrono::DateTime::<chrono::Local>::from(t);
            format!("  |_|  updated {}", local.format("%H:%M:%S"))
        }
        None => "  |_|".to_string(),
    };
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Dashboard => {
            "1 Dashboard | 2/Enter Matches | Tab/p Player | r Refresh | ? Help | q Quit"
                .to_string()
        }
        Screen::Matches => {
            "1/b/Esc Dashboard | j/k/↑/↓ Move | Tab/p Player | r Refresh | ? Help | q Quit"
                .to_string()
        }
    }
}

fn render_filter_chips(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        " Player: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (idx, name) in state.filter_options().iter().enumerate() {
        let style = if idx == state.filter_idx {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {name} "), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(area);

    let filtered = state.filtered_matches();
    let cards = aggregate::overview(&filtered, &state.home_marker);
    render_overview_cards(frame, rows[0], &cards);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(44)])
        .split(rows[1]);

    render_trend_panel(frame, columns[0], state);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[1]);

    render_insights(frame, side[0], &state.insights);
    render_spotlight(frame, side[1], state);

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, rows[2]);
}

fn render_overview_cards(frame: &mut Frame, area: Rect, cards: &Overview) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let trend_arrow = match cards.trend {
        FormTrend::Up => "↑",
        FormTrend::Down => "↓",
    };
    let trend_color = match cards.trend {
        FormTrend::Up => Color::Green,
        FormTrend::Down => Color::Red,
    };

    render_stat_card(
        frame,
        cols[0],
        "Matches",
        &cards.total_matches.to_string(),
        &format!("{} wins · {}% win rate", cards.wins, cards.win_rate),
        Color::Cyan,
    );
    render_stat_card(
        frame,
        cols[1],
        "Points",
        &cards.total_points.to_string(),
        &format!("{:.1} per game", cards.avg_points),
        Color::Yellow,
    );
    render_stat_card(
        frame,
        cols[2],
        "Aces",
        &cards.total_aces.to_string(),
        &format!("{:.1} per game", cards.aces_per_game),
        Color::Magenta,
    );
    render_stat_card(
        frame,
        cols[3],
        "Recent form",
        &format!("{:.1} {trend_arrow}", cards.recent_avg),
        "last 3 vs season avg",
        trend_color,
    );
}

fn render_stat_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    detail: &str,
    accent: Color,
) {
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let text = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}

fn render_trend_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("Points Trend")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let filtered: Vec<MatchRecord> = state
        .filtered_matches()
        .into_iter()
        .cloned()
        .collect();
    let series = trend::build_series(&filtered);
    if series.is_empty() {
        let empty = Paragraph::new("No match data yet")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // One chart row per series, summary line below each chart.
    let per_series = (inner.height / series.len().max(1) as u16).max(1);
    for (i, entry) in series.iter().enumerate() {
        let slot = Rect {
            x: inner.x,
            y: inner.y + i as u16 * per_series,
            width: inner.width,
            height: per_series.min(inner.height.saturating_sub(i as u16 * per_series)),
        };
        if slot.height == 0 {
            break;
        }
        render_series_chart(frame, slot, entry);
    }
}

fn render_series_chart(frame: &mut Frame, area: Rect, series: &ChartSeries) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let bars: Vec<Bar> = series
        .points
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.points as u64)
                .label(Line::from(point.label.clone()))
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .max(series.max.max(1) as u64);
    frame.render_widget(chart, parts[0]);

    let summary = format!(
        "{}  avg {:.1} · max {} · min {}",
        series.player, series.avg, series.max, series.min
    );
    let line = Paragraph::new(summary).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, parts[1]);
}

fn render_insights(frame: &mut Frame, area: Rect, insights: &[Insight]) {
    let block = Block::default().title("Insights").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    if insights.is_empty() {
        let empty = Paragraph::new("No insights yet")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let lines: Vec<Line> = insights
        .iter()
        .map(|insight| {
            let (marker, color) = match insight.kind {
                InsightKind::Info => ("·", Color::Cyan),
                InsightKind::Success => ("+", Color::Green),
                InsightKind::Warning => ("!", Color::Yellow),
            };
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(color)),
                Span::raw(insight.text.clone()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_spotlight(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Spotlight").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let text = if state.active_player().is_some() {
        let filtered = state.filtered_matches();
        let totals = aggregate::player_season_totals(&filtered, &state.home_marker);
        player_banner_text(state, &totals)
    } else {
        season_summary_text(state)
    };

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn season_summary_text(state: &AppState) -> String {
    let Some(summary) = state.summary() else {
        return "No season summary in feed".to_string();
    };
    [
        format!("Season totals ({})", state.season_label),
        format!(
            "Points: {}  ({:.1} per game)",
            summary.total_points, summary.avg_points
        ),
        format!(
            "Attacks: {}  ({} kills · {:.1}% success)",
            summary.total_attacks, summary.total_attack_points, summary.attack_success_rate
        ),
        format!(
            "Serves: {}  ({} aces · {:.1}% ace rate)",
            summary.total_serves, summary.total_aces, summary.ace_rate
        ),
    ]
    .join("\n")
}

fn player_banner_text(state: &AppState, totals: &PlayerSeasonTotals) -> String {
    let mut lines = Vec::new();

    if let Some(player) = state.active_player() {
        let number = player
            .number
            .map(|n| format!("#{n} "))
            .unwrap_or_default();
        lines.push(format!(
            "{number}{} ({}) · {} · {}",
            player.name, player.en_name, player.position, player.team
        ));
    }

    lines.push(format!(
        "Matches: {}  Wins: {}  Win rate: {}%",
        totals.matches, totals.wins, totals.win_rate
    ));
    lines.push(format!(
        "Points: {}  ({:.1} per game)  Aces: {}",
        totals.points, totals.avg_points, totals.aces
    ));
    lines.push(format!(
        "Attack: {} kills · {:.1}% success · {:.1}% efficiency",
        totals.attack_points, totals.avg_attack_success, totals.avg_attack_efficiency
    ));
    lines.push(format!(
        "Defense: {} blocks · {} receptions · {:.0}% positive",
        totals.blocks, totals.receptions, totals.avg_reception_pos
    ));

    if let Some(official) = state.official_for_active() {
        let line = &official.official_stats;
        lines.push(String::new());
        lines.push(format!(
            "Official {} · {} · rank #{}",
            official.season, official.team, official.rank
        ));
        lines.push(format!(
            "{} played · {} pts · {:.1}% attack",
            line.matches_played, line.total_points, line.attack_percentage
        ));
        lines.push(format!(
            "{} aces · {} blocks · {} perfect receptions",
            line.aces, line.blocks, line.perfect_receptions
        ));
    } else if state.season_stats_missing {
        lines.push(String::new());
        lines.push("Official stat sheet unavailable".to_string());
    }

    lines.join("\n")
}

fn render_matches(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(4)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(42)])
        .split(rows[0]);

    render_match_list(frame, columns[0], state);
    render_match_detail(frame, columns[1], state);

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, rows[1]);
}

fn render_match_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Matches").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let widths = match_columns();
    render_match_list_header(frame, sections[0], &widths);

    let list_area = sections[1];
    let filtered = state.filtered_matches();
    if filtered.is_empty() {
        let empty = Paragraph::new("No matches for this player")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.selected, filtered.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };

        let selected = idx == state.selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let m = filtered[idx];
        let date = trend::format_date_short(&m.date);
        let fixture = format!("{} vs {}", m.home_team, m.away_team);
        let score = format!("{}-{}", m.home_score, m.away_score);
        let badge = if aggregate::is_tracked_win(m, &state.home_marker) {
            "W"
        } else {
            "L"
        };
        let badge_style = if badge == "W" {
            row_style.fg(Color::Green)
        } else {
            row_style.fg(Color::Red)
        };
        let points = m
            .player_stats
            .points
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        render_cell_text(frame, cols[0], &date, row_style);
        render_cell_text(frame, cols[1], &m.round, row_style);
        render_cell_text(frame, cols[2], &fixture, row_style);
        render_cell_text(frame, cols[3], &score, row_style);
        render_cell_text(frame, cols[4], badge, badge_style);
        render_cell_text(frame, cols[5], &m.player_name, row_style);
        render_cell_text(frame, cols[6], &points, row_style);
    }
}

fn match_columns() -> [Constraint; 7] {
    [
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Min(24),
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Length(14),
        Constraint::Length(4),
    ]
}

fn render_match_list_header(frame: &mut Frame, area: Rect, widths: &[Constraint]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], "Date", style);
    render_cell_text(frame, cols[1], "Round", style);
    render_cell_text(frame, cols[2], "Fixture", style);
    render_cell_text(frame, cols[3], "Score", style);
    render_cell_text(frame, cols[4], "", style);
    render_cell_text(frame, cols[5], "Player", style);
    render_cell_text(frame, cols[6], "Pts", style);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let text_area = Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(text).style(style);
    frame.render_widget(paragraph, text_area);
}

fn render_match_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title("Match Detail").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let Some(m) = state.selected_match() else {
        let empty = Paragraph::new("No match selected")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let paragraph = Paragraph::new(match_detail_text(m, &state.home_marker))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn match_detail_text(m: &MatchRecord, home_marker: &str) -> String {
    let stats = &m.player_stats;
    let badge = if aggregate::is_tracked_win(m, home_marker) {
        "WIN"
    } else {
        "LOSS"
    };

    let mut lines = vec![
        format!("{} · {} · {}", trend::format_date_short(&m.date), m.round, badge),
        format!(
            "{} {} - {} {}",
            m.home_team, m.home_score, m.away_score, m.away_team
        ),
        String::new(),
        format!("{} · {} points", m.player_name, stats.points.unwrap_or(0)),
    ];

    if let Some(rating) = &stats.player_rating {
        lines.push(format!("Rating: {rating}"));
    }

    let mut recorded = false;

    if let Some(attacks) = stats.attacks {
        recorded = true;
        lines.push(String::new());
        lines.push(format!(
            "Attack: {} kills / {attacks} swings",
            stats.successful_attacks.unwrap_or(0)
        ));
        let errors = stats.errors.unwrap_or(0);
        let blocked = stats.blocked.unwrap_or(0);
        if errors > 0 || blocked > 0 {
            lines.push(format!("  {errors} errors · {blocked} blocked"));
        }
        lines.push(format!(
            "  success {} · efficiency {}",
            stats.attack_success.as_deref().unwrap_or("0%"),
            stats.attack_efficiency.as_deref().unwrap_or("0%")
        ));
    }

    if let Some(serves) = stats.serves {
        recorded = true;
        lines.push(format!(
            "Serve: {serves} serves · {} aces",
            stats.aces.unwrap_or(0)
        ));
    }

    if let Some(blocks) = stats.blocks {
        recorded = true;
        lines.push(format!("Block: {blocks} points"));
    }

    if let Some(receptions) = stats.receptions {
        recorded = true;
        lines.push(format!(
            "Reception: {receptions} · {:.0}% positive · {:.0}% perfect",
            stats.reception_pos_pct.unwrap_or(0.0),
            stats.reception_prf_pct.unwrap_or(0.0)
        ));
    }

    if !recorded && stats.points.is_none() {
        lines.push(String::new());
        lines.push("Detailed stats pending".to_string());
    }

    lines.join("\n")
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 20, area);
    let text = "Loading season data...";
    let loading = Paragraph::new(text)
        .block(Block::default().title("VBSTATS").borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(loading, popup_area);
}

fn render_load_error(frame: &mut Frame, area: Rect, err: &str) {
    let popup_area = centered_rect(70, 40, area);
    let text = format!(
        "Season data failed to load.\n\nSource: {}\n\n{err}\n\nPress r to retry, q to quit.",
        data_fetch::data_base_url()
    );
    let panel = Paragraph::new(text)
        .block(Block::default().title("Load Error").borders(Borders::ALL))
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, popup_area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "VBSTATS Terminal - Help",
        "",
        "Global:",
        "  1            Dashboard",
        "  2 / Enter    Matches",
        "  b / Esc      Back to dashboard",
        "  Tab / p      Next player filter",
        "  S-Tab / P    Previous player filter",
        "  r            Refresh data",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Matches:",
        "  j/k or ↑/↓   Move selection",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
