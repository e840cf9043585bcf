//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use tumble_engine::{Action, App, GameConfig, TumbleConfig};
use tumble_types::Face;

/// App seeded from the default configuration (roll limit 10).
pub fn test_app() -> App {
    App::new(&TumbleConfig::default())
}

/// App seeded with a specific starting roll limit.
pub fn app_with_limit(limit: u8) -> App {
    App::new(&config_with_limit(limit))
}

pub fn config_with_limit(limit: u8) -> TumbleConfig {
    TumbleConfig {
        app: None,
        game: Some(GameConfig {
            roll_limit: Some(limit),
        }),
    }
}

/// Start a session with a known target instead of a random draw.
pub fn start_with_target(app: &mut App, hidden: Face) {
    app.apply(Action::Start { hidden });
}

/// Run one full roll deterministically: record a chosen outcome face, then
/// settle it.
pub fn roll_and_settle(app: &mut App, face: Face) {
    app.apply(Action::Roll { face });
    app.apply(Action::Settle);
}
