//! Not-found fallback state machine.
//!
//! ```text
//! CheckingLegacyUrl ──(.html path)──────────────▶ Redirecting { canonical }
//!        │
//!        └──(otherwise)──▶ CountingDown { n } ──tick×n──▶ Redirecting { home }
//! ```

use crate::routing::rewrite::canonical_path;

/// Phase of the fallback page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPhase {
    CheckingLegacyUrl,
    CountingDown { remaining: u32 },
    Redirecting { target: String },
}

/// A navigation the page must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: String,
    /// True when caused by a legacy `.html` location rather than the countdown.
    pub legacy: bool,
}

#[derive(Debug, Clone)]
pub struct FallbackMachine {
    phase: FallbackPhase,
    home: String,
}

impl FallbackMachine {
    /// Start the machine for the current location.
    ///
    /// Returns the machine and, when the page must leave immediately, the
    /// navigation to perform.
    pub fn enter(path: &str, countdown_from: u32, home: &str) -> (Self, Option<Navigation>) {
        let mut machine = Self {
            phase: FallbackPhase::CheckingLegacyUrl,
            home: home.to_string(),
        };

        if let Some(target) = canonical_path(path) {
            let nav = machine.redirect(target, true);
            return (machine, Some(nav));
        }

        if countdown_from == 0 {
            let nav = machine.redirect(machine.home.clone(), false);
            return (machine, Some(nav));
        }

        machine.phase = FallbackPhase::CountingDown {
            remaining: countdown_from,
        };
        (machine, None)
    }

    /// Advance the countdown by one second.
    ///
    /// Emits the home navigation on the tick that reaches zero. Ticks outside
    /// `CountingDown` are ignored.
    pub fn tick(&mut self) -> Option<Navigation> {
        let FallbackPhase::CountingDown { remaining } = self.phase else {
            return None;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            let home = self.home.clone();
            Some(self.redirect(home, false))
        } else {
            self.phase = FallbackPhase::CountingDown { remaining };
            None
        }
    }

    pub fn phase(&self) -> &FallbackPhase {
        &self.phase
    }

    /// Seconds left on the countdown; zero outside `CountingDown`.
    pub fn remaining(&self) -> u32 {
        match self.phase {
            FallbackPhase::CountingDown { remaining } => remaining,
            _ => 0,
        }
    }

    fn redirect(&mut self, target: String, legacy: bool) -> Navigation {
        self.phase = FallbackPhase::Redirecting {
            target: target.clone(),
        };
        Navigation { target, legacy }
    }
}
