#[cfg(test)]
#[path = "typed_test.rs"]
mod typed_test;

/// Delay after typing one character.
pub const TYPE_DELAY_MS: u64 = 75;

/// Delay after deleting one character.
pub const DELETE_DELAY_MS: u64 = 50;

/// Pause while a fully typed phrase is on screen.
pub const HOLD_DELAY_MS: u64 = 1500;

/// Looping typed-text animation stepper.
///
/// `shown` counts characters of the current phrase on screen. The machine
/// types a phrase, holds it, deletes it, then wraps to the next phrase
/// forever. Pure: the driver owns the clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypedState {
    pub phrase: usize,
    pub shown: usize,
    pub deleting: bool,
}

impl TypedState {
    /// The visible prefix of the current phrase.
    pub fn visible_text(self, phrases: &[&'static str]) -> String {
        let Some(phrase) = phrases.get(self.phrase) else {
            return String::new();
        };
        phrase.chars().take(self.shown).collect()
    }

    /// Advance one tick, returning the next state and how long to wait
    /// before the tick after it.
    pub fn step(self, phrases: &[&'static str]) -> (Self, u64) {
        let Some(phrase) = phrases.get(self.phrase) else {
            return (self, HOLD_DELAY_MS);
        };
        let len = phrase.chars().count();

        if self.deleting {
            if self.shown > 0 {
                (Self { shown: self.shown - 1, ..self }, DELETE_DELAY_MS)
            } else {
                let next = Self {
                    phrase: (self.phrase + 1) % phrases.len(),
                    shown: 0,
                    deleting: false,
                };
                (next, TYPE_DELAY_MS)
            }
        } else if self.shown < len {
            let shown = self.shown + 1;
            let delay = if shown == len { HOLD_DELAY_MS } else { TYPE_DELAY_MS };
            (Self { shown, ..self }, delay)
        } else {
            (Self { deleting: true, ..self }, DELETE_DELAY_MS)
        }
    }
}
