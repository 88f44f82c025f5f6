use super::*;

#[test]
fn fires_on_first_intersection() {
    let (state, fire) = WatchState::Pending.advance(true);
    assert_eq!(state, WatchState::Fired);
    assert!(fire);
}

#[test]
fn stays_pending_while_out_of_view() {
    let (state, fire) = WatchState::Pending.advance(false);
    assert_eq!(state, WatchState::Pending);
    assert!(!fire);
}

#[test]
fn never_fires_twice() {
    let (state, _) = WatchState::Pending.advance(true);
    for intersecting in [true, false, true] {
        let (next, fire) = state.advance(intersecting);
        assert_eq!(next, WatchState::Fired);
        assert!(!fire);
    }
}

#[test]
fn from_fired_round_trips() {
    assert_eq!(WatchState::from_fired(false), WatchState::Pending);
    assert_eq!(WatchState::from_fired(true), WatchState::Fired);
}
