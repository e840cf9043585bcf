//! Win and loss scenarios

use tumble_engine::Phase;
use tumble_types::Face;

use crate::common::{app_with_limit, roll_and_settle, start_with_target};

#[test]
fn matching_the_target_wins_at_limit_one() {
    let mut app = app_with_limit(1);
    start_with_target(&mut app, Face::FOUR);

    roll_and_settle(&mut app, Face::FOUR);

    let session = app.session();
    assert!(session.is_won());
    assert_eq!(session.roll_count(), 1);
    assert_eq!(session.current_face(), Face::FOUR);
    assert_eq!(session.hidden_face(), Some(Face::FOUR));
}

#[test]
fn missing_the_target_loses_at_limit_one() {
    let mut app = app_with_limit(1);
    start_with_target(&mut app, Face::FOUR);

    roll_and_settle(&mut app, Face::FIVE);

    let session = app.session();
    assert!(session.is_lost());
    assert_eq!(session.roll_count(), 1);
    // The last outcome stays on the die.
    assert_eq!(session.current_face(), Face::FIVE);
}

#[test]
fn the_win_check_beats_exhaustion_on_the_final_roll() {
    let mut app = app_with_limit(3);
    start_with_target(&mut app, Face::SIX);
    roll_and_settle(&mut app, Face::ONE);
    roll_and_settle(&mut app, Face::TWO);

    // Third and final roll matches: winning takes priority over running out.
    roll_and_settle(&mut app, Face::SIX);

    assert!(app.session().is_won());
    assert_eq!(app.session().roll_count(), 3);
}

#[test]
fn three_misses_at_limit_three_exhaust_the_session() {
    let mut app = app_with_limit(3);
    start_with_target(&mut app, Face::SIX);

    roll_and_settle(&mut app, Face::ONE);
    assert!(matches!(app.session().phase(), Phase::InProgress { .. }));
    assert_eq!(app.session().roll_count(), 1);

    roll_and_settle(&mut app, Face::TWO);
    assert!(matches!(app.session().phase(), Phase::InProgress { .. }));
    assert_eq!(app.session().roll_count(), 2);

    roll_and_settle(&mut app, Face::THREE);
    assert!(app.session().is_lost());
    assert_eq!(app.session().roll_count(), 3);
}

#[test]
fn a_win_can_land_before_the_limit() {
    let mut app = app_with_limit(10);
    start_with_target(&mut app, Face::TWO);

    roll_and_settle(&mut app, Face::ONE);
    roll_and_settle(&mut app, Face::TWO);

    assert!(app.session().is_won());
    assert_eq!(app.session().roll_count(), 2);
}

#[test]
fn lowering_the_limit_mid_session_applies_at_the_next_settle() {
    let mut app = app_with_limit(3);
    start_with_target(&mut app, Face::SIX);
    roll_and_settle(&mut app, Face::ONE);
    assert!(matches!(app.session().phase(), Phase::InProgress { .. }));

    // Count is already 1; dropping the limit to 1 makes the next miss fatal.
    app.adjust_roll_limit(-2);
    roll_and_settle(&mut app, Face::TWO);

    assert!(app.session().is_lost());
    assert_eq!(app.session().roll_count(), 2);
}

#[test]
fn raising_the_limit_mid_session_grants_more_rolls() {
    let mut app = app_with_limit(1);
    start_with_target(&mut app, Face::SIX);
    app.adjust_roll_limit(1);

    roll_and_settle(&mut app, Face::ONE);

    // Would have lost at limit 1; the raise keeps the session alive.
    assert!(matches!(app.session().phase(), Phase::InProgress { .. }));
    assert_eq!(app.session().roll_count(), 1);
}
