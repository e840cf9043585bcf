//! Core engine for Tumble - state machine and orchestration.
//!
//! The pure game logic lives in [`session`]; this crate root wraps it in the
//! glue a running application needs - wall-clock settle scheduling, uniform
//! randomness, configuration, and the quit flag - without any TUI
//! dependencies.

use std::time::{Duration, Instant};

use rand::RngExt;

use tumble_types::Face;

mod config;
mod session;

pub use config::{AppConfig, ConfigError, GameConfig, TumbleConfig, config_path};
pub use session::{Action, Phase, Session, reduce};

/// Pause between initiating a roll and resolving its outcome. The die is
/// shown in motion for this long; the outcome underneath is already fixed.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

// ============================================================================
// App - orchestration around the session reducer
// ============================================================================

/// Scheduling state for the roll in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum AppState {
    #[default]
    Idle,
    /// A settle deadline is armed; the roll resolves once it passes.
    Settling { settle_at: Instant },
}

/// Owns the session and supplies what the pure reducer cannot: clocks,
/// randomness, and configuration.
///
/// All mutation happens on the event-loop thread. The settle delay is a
/// deadline polled from [`App::tick`] rather than a spawned timer, so
/// cancelling it is a plain state replacement.
#[derive(Debug)]
pub struct App {
    session: Session,
    state: AppState,
    options: UiOptions,
    tick: u64,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: &TumbleConfig) -> Self {
        let roll_limit = config.starting_roll_limit();
        let options = config.ui_options();
        tracing::debug!(roll_limit = roll_limit.get(), ?options, "App initialized");
        Self {
            session: Session::new(roll_limit),
            state: AppState::Idle,
            options,
            tick: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn options(&self) -> UiOptions {
        self.options
    }

    /// Frame counter driving animations.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Run one action through the reducer.
    ///
    /// This is the deterministic core entry: actions are applied verbatim,
    /// with no draws and no scheduling. The convenience operations below
    /// ([`App::roll`] in particular) draw entropy and manage the settle
    /// deadline on top of it. An explicit `Reset` also disarms any pending
    /// deadline so a resolution cannot outlive the session it belonged to.
    pub fn apply(&mut self, action: Action) {
        if matches!(action, Action::Reset) {
            self.state = AppState::Idle;
        }
        self.session = session::reduce(self.session, action);
    }

    /// Roll the die.
    ///
    /// No-op unless the session currently accepts a roll (terminal phases
    /// need a reset first; a roll already in flight must settle). Rolling
    /// from a fresh session starts it implicitly: the target is drawn and
    /// the count zeroed before the roll goes in flight. The outcome face is
    /// drawn here, at initiation - the settle delay only defers resolution.
    pub fn roll(&mut self) {
        if !self.session.can_roll() {
            return;
        }
        if matches!(self.session.phase(), Phase::NotStarted) {
            self.start_session();
        }
        let face = draw_face();
        tracing::debug!(
            face = face.get(),
            attempt = self.session.roll_count() + 1,
            "Roll initiated"
        );
        self.apply(Action::Roll { face });
        self.state = AppState::Settling {
            settle_at: Instant::now() + SETTLE_DELAY,
        };
    }

    /// Start a session without rolling. Guarded no-op once one exists - an
    /// established session never re-draws its target.
    pub fn start_session(&mut self) {
        if !matches!(self.session.phase(), Phase::NotStarted) {
            return;
        }
        let hidden = draw_face();
        tracing::debug!(
            target = hidden.get(),
            roll_limit = self.session.roll_limit().get(),
            "Session started"
        );
        self.apply(Action::Start { hidden });
    }

    /// Move the roll limit by `delta`, clamped into `[1, 20]`. Legal at any
    /// time.
    pub fn adjust_roll_limit(&mut self, delta: i8) {
        self.apply(Action::AdjustLimit { delta });
    }

    /// Return to a fresh session, invalidating any roll still in flight.
    /// Always legal.
    pub fn reset(&mut self) {
        tracing::debug!("Session reset");
        self.apply(Action::Reset);
    }

    /// Per-frame housekeeping: advances the frame counter and resolves the
    /// settle deadline once it passes.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.poll_settle();
    }

    fn poll_settle(&mut self) {
        let AppState::Settling { settle_at } = self.state else {
            return;
        };
        if settle_at > Instant::now() {
            return;
        }
        self.state = AppState::Idle;
        self.apply(Action::Settle);
        match self.session.phase() {
            Phase::Won { .. } => {
                tracing::info!(rolls = self.session.roll_count(), "Session won");
            }
            Phase::Lost { .. } => {
                tracing::info!(rolls = self.session.roll_count(), "Session lost");
            }
            _ => {
                tracing::debug!(
                    face = self.session.current_face().get(),
                    rolls = self.session.roll_count(),
                    "Roll settled"
                );
            }
        }
    }
}

/// Uniform draw over the six faces.
fn draw_face() -> Face {
    let mut rng = rand::rng();
    Face::ALL[rng.random_range(0..Face::ALL.len())]
}
