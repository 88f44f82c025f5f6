#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

/// One-shot visibility watcher state.
///
/// Each observed element moves `Pending -> Fired` the first time it
/// intersects; the transition never re-arms, so re-entering the viewport
/// has no effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WatchState {
    #[default]
    Pending,
    Fired,
}

impl WatchState {
    pub fn from_fired(fired: bool) -> Self {
        if fired { Self::Fired } else { Self::Pending }
    }

    /// Feed one intersection callback. Returns the next state and whether
    /// the element's effect should run now.
    pub fn advance(self, intersecting: bool) -> (Self, bool) {
        match (self, intersecting) {
            (Self::Pending, true) => (Self::Fired, true),
            (state, _) => (state, false),
        }
    }
}
