//! Reset semantics

use tumble_engine::{Phase, Session};
use tumble_types::{Face, RollLimit};

use crate::common::{app_with_limit, roll_and_settle, start_with_target, test_app};

fn assert_fresh(session: &Session) {
    assert_eq!(session.phase(), Phase::NotStarted);
    assert_eq!(session.current_face(), Face::ONE);
    assert_eq!(session.roll_count(), 0);
    assert_eq!(session.hidden_face(), None);
}

#[test]
fn reset_restores_the_exact_initial_state() {
    let mut app = test_app();
    start_with_target(&mut app, Face::THREE);
    roll_and_settle(&mut app, Face::ONE);
    roll_and_settle(&mut app, Face::THREE);
    assert!(app.session().is_won());

    app.reset();

    assert_fresh(app.session());
    assert_eq!(*app.session(), Session::new(RollLimit::DEFAULT));
}

#[test]
fn reset_is_legal_in_every_phase() {
    // Fresh session: no-op.
    let mut app = test_app();
    app.reset();
    assert_fresh(app.session());

    // Mid-session.
    start_with_target(&mut app, Face::ONE);
    app.reset();
    assert_fresh(app.session());

    // While a roll is in flight.
    app.roll();
    assert!(app.session().is_rolling());
    app.reset();
    assert_fresh(app.session());

    // After a loss.
    app.adjust_roll_limit(-19);
    start_with_target(&mut app, Face::ONE);
    roll_and_settle(&mut app, Face::TWO);
    assert!(app.session().is_lost());
    app.reset();
    assert_fresh(app.session());
}

#[test]
fn reset_is_idempotent() {
    let mut app = test_app();
    start_with_target(&mut app, Face::FIVE);
    roll_and_settle(&mut app, Face::TWO);

    app.reset();
    let once = *app.session();
    app.reset();
    assert_eq!(*app.session(), once);
}

#[test]
fn reset_preserves_an_adjusted_limit() {
    let mut app = app_with_limit(5);
    app.adjust_roll_limit(10);
    start_with_target(&mut app, Face::SIX);
    roll_and_settle(&mut app, Face::ONE);

    app.reset();

    assert_fresh(app.session());
    assert_eq!(app.session().roll_limit().get(), 15);
}

#[test]
fn reset_cancels_a_roll_in_flight() {
    let mut app = test_app();
    app.roll();
    assert!(app.session().is_rolling());

    app.reset();
    assert_fresh(app.session());

    // The abandoned roll must never settle into the new session.
    for _ in 0..10 {
        app.tick();
    }
    assert_fresh(app.session());
}
