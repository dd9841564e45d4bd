//! Scheduler worker loop.

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{select, tick, Receiver};

use crate::engine::Shared;

/// Runs until the stop channel fires or disconnects. The in-flight
/// tick always completes before the stop is observed.
pub(crate) fn run(shared: Arc<Shared>, stop_rx: Receiver<()>) {
    let config = shared.config();
    let ticker = tick(config.tick_interval());
    let health_every = config.health_check_interval();
    let optimize_every = config.optimization_interval();

    shared.run_health_check();
    let mut last_health = Instant::now();
    let mut last_optimization = Instant::now();

    loop {
        select! {
            recv(stop_rx) -> _ => break,
            recv(ticker) -> msg => {
                let Ok(now) = msg else { break };
                shared.record_tick();
                if now.saturating_duration_since(last_health) >= health_every {
                    shared.run_health_check();
                    last_health = now;
                }
                if now.saturating_duration_since(last_optimization) >= optimize_every {
                    shared.run_optimization_cycle();
                    last_optimization = now;
                }
            }
        }
    }
    tracing::debug!("monitor worker exiting");
}
