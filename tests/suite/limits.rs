//! Roll limit adjustment tests

use tumble_types::{Face, RollLimit};

use crate::common::{app_with_limit, start_with_target, test_app};

#[test]
fn default_limit_is_ten() {
    let app = test_app();
    assert_eq!(app.session().roll_limit(), RollLimit::DEFAULT);
    assert_eq!(app.session().roll_limit().get(), 10);
}

#[test]
fn single_steps_move_by_one() {
    let mut app = test_app();
    app.adjust_roll_limit(1);
    assert_eq!(app.session().roll_limit().get(), 11);
    app.adjust_roll_limit(-1);
    app.adjust_roll_limit(-1);
    assert_eq!(app.session().roll_limit().get(), 9);
}

#[test]
fn increments_saturate_at_twenty() {
    let mut app = test_app();
    for _ in 0..40 {
        app.adjust_roll_limit(1);
    }
    assert_eq!(app.session().roll_limit().get(), 20);
    app.adjust_roll_limit(1);
    assert_eq!(app.session().roll_limit().get(), 20);
}

#[test]
fn decrements_saturate_at_one() {
    let mut app = test_app();
    for _ in 0..40 {
        app.adjust_roll_limit(-1);
    }
    assert_eq!(app.session().roll_limit().get(), 1);
    app.adjust_roll_limit(-1);
    assert_eq!(app.session().roll_limit().get(), 1);
}

#[test]
fn extreme_deltas_clamp_into_range() {
    let mut app = test_app();
    app.adjust_roll_limit(i8::MAX);
    assert_eq!(app.session().roll_limit().get(), 20);
    app.adjust_roll_limit(i8::MIN);
    assert_eq!(app.session().roll_limit().get(), 1);
}

#[test]
fn mixed_walk_never_leaves_the_range() {
    // Deterministic stand-in for random +/- mashing.
    let deltas: [i8; 12] = [1, 1, -1, 3, -7, 1, 19, -19, 5, -2, -2, 1];
    let mut app = app_with_limit(7);
    for round in 0..100 {
        let delta = deltas[round % deltas.len()];
        app.adjust_roll_limit(delta);
        let limit = app.session().roll_limit().get();
        assert!(
            (1..=20).contains(&limit),
            "limit {limit} left range after round {round}"
        );
    }
}

#[test]
fn adjusting_is_legal_in_every_phase() {
    // Fresh
    let mut app = test_app();
    app.adjust_roll_limit(1);
    assert_eq!(app.session().roll_limit().get(), 11);

    // Mid-session
    start_with_target(&mut app, Face::TWO);
    app.adjust_roll_limit(1);
    assert_eq!(app.session().roll_limit().get(), 12);

    // While a roll is in flight
    app.roll();
    assert!(app.session().is_rolling());
    app.adjust_roll_limit(-1);
    assert_eq!(app.session().roll_limit().get(), 11);
    assert!(app.session().is_rolling(), "adjusting must not settle a roll");
}

#[test]
fn adjusting_touches_nothing_but_the_limit() {
    let mut app = test_app();
    start_with_target(&mut app, Face::SIX);
    let before = *app.session();

    app.adjust_roll_limit(3);

    let after = *app.session();
    assert_eq!(after.current_face(), before.current_face());
    assert_eq!(after.roll_count(), before.roll_count());
    assert_eq!(after.hidden_face(), before.hidden_face());
    assert_eq!(after.phase(), before.phase());
    assert_eq!(after.roll_limit().get(), before.roll_limit().get() + 3);
}
