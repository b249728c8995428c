use std::env;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::data_fetch;
use crate::state::{Delta, ProviderCommand};

const REFRESH_THROTTLE_SECS: u64 = 5;

pub fn spawn_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        let poll_interval = Duration::from_secs(
            env::var("DATA_POLL_SECS")
                .ok()
                .and_then(|val| val.parse::<u64>().ok())
                .unwrap_or(300)
                .max(30),
        );

        let base = data_fetch::data_base_url();
        let _ = tx.send(Delta::Log(format!("[INFO] Season data source: {base}")));

        // Both documents load concurrently; the stat sheet must never hold
        // up the primary data.
        spawn_season_stats_fetch(tx.clone());
        fetch_primary(&tx);
        let mut last_fetch = Instant::now();

        loop {
            thread::sleep(Duration::from_millis(250));

            if last_fetch.elapsed() >= poll_interval {
                spawn_season_stats_fetch(tx.clone());
                fetch_primary(&tx);
                last_fetch = Instant::now();
            }

            while let Ok(cmd) = cmd_rx.try_recv() {
                match cmd {
                    ProviderCommand::Refresh => {
                        if last_fetch.elapsed() < Duration::from_secs(REFRESH_THROTTLE_SECS) {
                            let _ = tx.send(Delta::Log(format!(
                                "[INFO] Refresh throttled ({REFRESH_THROTTLE_SECS}s)"
                            )));
                            continue;
                        }
                        spawn_season_stats_fetch(tx.clone());
                        fetch_primary(&tx);
                        last_fetch = Instant::now();
                    }
                }
            }
        }
    });
}

fn fetch_primary(tx: &Sender<Delta>) {
    match data_fetch::fetch_vb_data() {
        Ok(data) => {
            let _ = tx.send(Delta::Log(format!(
                "[INFO] Data loaded: {} matches, {} players",
                data.matches.len(),
                data.players.len()
            )));
            let _ = tx.send(Delta::SetData(data));
        }
        Err(err) => {
            let _ = tx.send(Delta::LoadFailed(format!("{err:#}")));
        }
    }
}

fn spawn_season_stats_fetch(tx: Sender<Delta>) {
    thread::spawn(move || match data_fetch::fetch_official_season_stats() {
        Ok(stats) => {
            let _ = tx.send(Delta::SetSeasonStats(stats));
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[INFO] No official stat sheet: {err}")));
            let _ = tx.send(Delta::SeasonStatsUnavailable);
        }
    });
}
