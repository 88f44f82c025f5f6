use super::*;

const PHRASES: &[&str] = &["ab", "xyz"];

fn run(mut state: TypedState, ticks: usize) -> TypedState {
    for _ in 0..ticks {
        (state, _) = state.step(PHRASES);
    }
    state
}

// =============================================================
// Typing forward
// =============================================================

#[test]
fn types_one_character_per_tick() {
    let (state, delay) = TypedState::default().step(PHRASES);
    assert_eq!(state.visible_text(PHRASES), "a");
    assert_eq!(delay, TYPE_DELAY_MS);
}

#[test]
fn holds_when_phrase_completes() {
    let (state, delay) = run(TypedState::default(), 1).step(PHRASES);
    assert_eq!(state.visible_text(PHRASES), "ab");
    assert_eq!(delay, HOLD_DELAY_MS);
    assert!(!state.deleting);
}

// =============================================================
// Deleting and wrapping
// =============================================================

#[test]
fn deletes_after_hold() {
    // Two ticks to type "ab", one to flip into deleting, one to delete.
    let state = run(TypedState::default(), 3);
    assert!(state.deleting);
    let (state, delay) = state.step(PHRASES);
    assert_eq!(state.visible_text(PHRASES), "a");
    assert_eq!(delay, DELETE_DELAY_MS);
}

#[test]
fn wraps_to_next_phrase_after_empty() {
    // type a, b (2) + enter deleting (1) + delete b, a (2) + wrap (1)
    let state = run(TypedState::default(), 6);
    assert_eq!(state.phrase, 1);
    assert_eq!(state.shown, 0);
    assert!(!state.deleting);
}

#[test]
fn loops_back_to_first_phrase() {
    // Full cycle over both phrases: 6 ticks for "ab", then "xyz" takes
    // 3 + 1 + 3 + 1 = 8 ticks.
    let state = run(TypedState::default(), 14);
    assert_eq!(state.phrase, 0);
    assert_eq!(state.visible_text(PHRASES), "");
}

// =============================================================
// Degenerate input
// =============================================================

#[test]
fn empty_phrase_list_is_inert() {
    let (state, delay) = TypedState::default().step(&[]);
    assert_eq!(state, TypedState::default());
    assert_eq!(delay, HOLD_DELAY_MS);
    assert_eq!(state.visible_text(&[]), "");
}
