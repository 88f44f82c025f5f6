use super::*;

// =============================================================
// Labels and icons
// =============================================================

#[test]
fn labels_follow_the_machine() {
    assert_eq!(SubmitPhase::Idle.label(), "Send Message");
    assert_eq!(SubmitPhase::Sending.label(), "Sending...");
    assert_eq!(SubmitPhase::Sent.label(), "Message Sent!");
}

#[test]
fn icons_follow_the_machine() {
    assert_eq!(SubmitPhase::Idle.icon_class(), "fas fa-paper-plane");
    assert_eq!(SubmitPhase::Sending.icon_class(), "fas fa-spinner fa-spin");
    assert_eq!(SubmitPhase::Sent.icon_class(), "fas fa-check");
}

// =============================================================
// Disabled / styling
// =============================================================

#[test]
fn only_idle_accepts_input() {
    assert!(!SubmitPhase::Idle.is_disabled());
    assert!(SubmitPhase::Sending.is_disabled());
    assert!(SubmitPhase::Sent.is_disabled());
}

#[test]
fn success_color_only_while_sent() {
    assert_eq!(SubmitPhase::Idle.button_class(), "submit-btn");
    assert_eq!(SubmitPhase::Sending.button_class(), "submit-btn");
    assert_eq!(SubmitPhase::Sent.button_class(), "submit-btn submit-btn--sent");
}

// =============================================================
// Timing configuration
// =============================================================

#[test]
fn simulation_delays_are_fixed() {
    assert_eq!(SEND_LATENCY_MS, 1500);
    assert_eq!(RESET_DELAY_MS, 3000);
}
