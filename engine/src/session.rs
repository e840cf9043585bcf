//! The game session state machine as a pure reducer.
//!
//! All of the game's decision logic lives here, deliberately separated from
//! orchestration concerns: no clocks, no randomness, no IO. Entropy (the
//! hidden target, each roll's outcome) arrives as action payloads drawn by
//! the caller, so every transition is deterministic and testable in
//! isolation.

use tumble_types::{Face, RollLimit};

/// Where a session currently stands.
///
/// The hidden target face lives inside the variants, so "the target is unset
/// exactly when no session has started" holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session yet; the die rests on its default face.
    NotStarted,
    /// A target has been drawn and rolls are being accepted.
    InProgress { hidden: Face },
    /// A roll is in flight: the outcome is already recorded on the die, but
    /// the attempt has not been counted or resolved yet.
    Rolling { hidden: Face },
    /// Terminal: the last roll matched the target.
    Won { hidden: Face },
    /// Terminal: the roll limit was exhausted without a match.
    Lost { hidden: Face },
}

/// One discrete game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the roll limit by `delta`, clamped into `[1, 20]`. Legal in
    /// every phase.
    AdjustLimit { delta: i8 },
    /// Begin a session with a freshly drawn target. Ignored unless the
    /// session is `NotStarted` - an established session never re-draws its
    /// target.
    Start { hidden: Face },
    /// Put a roll in flight with `face` as its predetermined outcome.
    /// Ignored outside `InProgress`; the orchestration layer issues `Start`
    /// first when the player rolls from `NotStarted`.
    Roll { face: Face },
    /// Resolve the in-flight roll. Ignored outside `Rolling`, which is what
    /// makes a stale settle timer harmless after a reset.
    Settle,
    /// Abandon the session and return to `NotStarted`. Always legal; the
    /// roll limit survives.
    Reset,
}

/// Snapshot of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    current_face: Face,
    roll_limit: RollLimit,
    roll_count: u8,
    phase: Phase,
}

impl Session {
    #[must_use]
    pub const fn new(roll_limit: RollLimit) -> Self {
        Self {
            current_face: Face::ONE,
            roll_limit,
            roll_count: 0,
            phase: Phase::NotStarted,
        }
    }

    /// The die face currently displayed.
    #[must_use]
    pub const fn current_face(&self) -> Face {
        self.current_face
    }

    #[must_use]
    pub const fn roll_limit(&self) -> RollLimit {
        self.roll_limit
    }

    /// Attempts made in this session.
    #[must_use]
    pub const fn roll_count(&self) -> u8 {
        self.roll_count
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The secret target face, once a session has started.
    #[must_use]
    pub const fn hidden_face(&self) -> Option<Face> {
        match self.phase {
            Phase::NotStarted => None,
            Phase::InProgress { hidden }
            | Phase::Rolling { hidden }
            | Phase::Won { hidden }
            | Phase::Lost { hidden } => Some(hidden),
        }
    }

    #[must_use]
    pub const fn is_rolling(&self) -> bool {
        matches!(self.phase, Phase::Rolling { .. })
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Won { .. })
    }

    #[must_use]
    pub const fn is_lost(&self) -> bool {
        matches!(self.phase, Phase::Lost { .. })
    }

    /// Whether a roll would be accepted right now. Terminal phases need a
    /// reset first, and a roll already in flight must settle.
    #[must_use]
    pub const fn can_roll(&self) -> bool {
        matches!(self.phase, Phase::NotStarted | Phase::InProgress { .. })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RollLimit::DEFAULT)
    }
}

/// Advance a session by one action.
///
/// Total over all `(phase, action)` pairs: actions that make no sense in the
/// current phase return the session unchanged rather than failing. The win
/// check runs before the exhaustion check on settle, so matching the target
/// on the very last allowed roll is a win.
#[must_use]
pub fn reduce(session: Session, action: Action) -> Session {
    match action {
        Action::AdjustLimit { delta } => Session {
            roll_limit: session.roll_limit.adjusted(delta),
            ..session
        },
        Action::Start { hidden } => match session.phase {
            Phase::NotStarted => Session {
                roll_count: 0,
                phase: Phase::InProgress { hidden },
                ..session
            },
            _ => session,
        },
        Action::Roll { face } => match session.phase {
            Phase::InProgress { hidden } => Session {
                current_face: face,
                phase: Phase::Rolling { hidden },
                ..session
            },
            _ => session,
        },
        Action::Settle => match session.phase {
            Phase::Rolling { hidden } => {
                let roll_count = session.roll_count + 1;
                let phase = if session.current_face == hidden {
                    Phase::Won { hidden }
                } else if roll_count >= session.roll_limit.get() {
                    Phase::Lost { hidden }
                } else {
                    Phase::InProgress { hidden }
                };
                Session {
                    roll_count,
                    phase,
                    ..session
                }
            }
            _ => session,
        },
        Action::Reset => Session::new(session.roll_limit),
    }
}
