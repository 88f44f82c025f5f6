#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Simulated send latency before the success state shows.
pub const SEND_LATENCY_MS: u64 = 1500;

/// How long the success state lingers before the button resets.
pub const RESET_DELAY_MS: u64 = 3000;

/// Contact-form submit button phases.
///
/// The form never performs a real submission; this machine only drives the
/// button's label, icon, color, and disabled state:
/// `Idle -> Sending -> Sent -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Idle => "fas fa-paper-plane",
            Self::Sending => "fas fa-spinner fa-spin",
            Self::Sent => "fas fa-check",
        }
    }

    /// The button stays disabled through the whole simulation, not just
    /// while "sending".
    pub fn is_disabled(self) -> bool {
        self != Self::Idle
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Self::Sent => "submit-btn submit-btn--sent",
            _ => "submit-btn",
        }
    }
}
