//! Signals: notifications a child update hands to its parent.
//!
//! A child reports something ("record created") by attaching a signal. The
//! parent folds those signals into its own state with
//! [`Update::apply_signals`] before the update reaches the runtime.

use super::Update;

/// Returns a function that lifts a value and attaches `signal` to it.
pub fn add_signal<V, E, S>(signal: S) -> impl FnOnce(V) -> Update<V, E, S> {
    move |value| Update {
        value,
        effects: Vec::new(),
        signals: vec![signal],
    }
}

impl<V, E, S> Update<V, E, S> {
    pub fn and_add_signal(mut self, signal: S) -> Self {
        self.signals.push(signal);
        self
    }

    pub fn map_signals<S2, F>(self, f: F) -> Update<V, E, S2>
    where
        F: FnMut(S) -> S2,
    {
        Update {
            value: self.value,
            effects: self.effects,
            signals: self.signals.into_iter().map(f).collect(),
        }
    }

    /// Drains the signals in order, handing each one to `handler` together
    /// with the current value.
    ///
    /// Effects already pending stay first; each handler's effects follow in
    /// signal order. The result carries only the signals the handlers emit.
    pub fn apply_signals<S2, H>(self, mut handler: H) -> Update<V, E, S2>
    where
        H: FnMut(V, S) -> Update<V, E, S2>,
    {
        let Update {
            value,
            effects,
            signals,
        } = self;
        let start = Update {
            value,
            effects,
            signals: Vec::new(),
        };
        signals.into_iter().fold(start, |acc, signal| {
            acc.and_then(|value| handler(value, signal))
        })
    }
}
