//! Timer driver for the fallback state machine.
//!
//! `mount` runs the machine on a one-second Tokio interval. The returned
//! `Mounted` handle owns the timer task; dropping it aborts the task, so no
//! navigation can fire after the page is torn down.
//!
//! `mount` is the in-process model of the 404 page's inline script. The
//! script is rendered from the same `CountdownSettings` (start value, tick
//! period, home target), so the browser counts down exactly as `mount` does.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::fallback::machine::{FallbackMachine, FallbackPhase, Navigation};

/// Countdown tick period.
pub const TICK: Duration = Duration::from_secs(1);

/// Side effect of leaving the fallback page.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, nav: &Navigation);
}

/// Countdown parameters.
#[derive(Debug, Clone)]
pub struct CountdownSettings {
    pub countdown_from: u32,
    pub home: String,
    pub tick: Duration,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            countdown_from: 2,
            home: "/".to_string(),
            tick: TICK,
        }
    }
}

/// A mounted fallback page.
pub struct Mounted {
    phase: watch::Receiver<FallbackPhase>,
    task: Option<JoinHandle<()>>,
}

impl Mounted {
    /// Current phase of the page.
    pub fn phase(&self) -> FallbackPhase {
        self.phase.borrow().clone()
    }

    /// Seconds left on the countdown; zero once redirecting.
    pub fn remaining(&self) -> u32 {
        match *self.phase.borrow() {
            FallbackPhase::CountingDown { remaining } => remaining,
            _ => 0,
        }
    }

    /// Returns true while the timer task is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Tear the page down, clearing the timer.
    pub fn unmount(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Mount the fallback page for `path`.
///
/// A legacy `.html` location navigates synchronously and starts no timer.
pub fn mount(path: &str, settings: &CountdownSettings, navigator: Arc<dyn Navigator>) -> Mounted {
    let (mut machine, immediate) = FallbackMachine::enter(path, settings.countdown_from, &settings.home);
    let (phase_tx, phase_rx) = watch::channel(machine.phase().clone());

    if let Some(nav) = immediate {
        tracing::debug!(to = %nav.target, legacy = nav.legacy, "Fallback navigating immediately");
        navigator.navigate(&nav);
        return Mounted {
            phase: phase_rx,
            task: None,
        };
    }

    let period = settings.tick;
    let task = tokio::spawn(async move {
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let nav = machine.tick();
            let _ = phase_tx.send(machine.phase().clone());

            if let Some(nav) = nav {
                tracing::debug!(to = %nav.target, "Fallback countdown finished");
                navigator.navigate(&nav);
                break;
            }
        }
    });

    Mounted {
        phase: phase_rx,
        task: Some(task),
    }
}
