//! The `Update` triple and its monadic core.

/// A value together with the effects and signals produced while computing it.
///
/// `E` is the effect descriptor type of the host runtime and `S` the signal
/// type a parent component consumes. Both are opaque here: they are only
/// appended, mapped and concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<V, E, S> {
    pub value: V,
    pub effects: Vec<E>,
    pub signals: Vec<S>,
}

impl<V, E, S> Update<V, E, S> {
    /// Lifts a bare value into an update with no effects and no signals.
    pub fn save(value: V) -> Self {
        Self {
            value,
            effects: Vec::new(),
            signals: Vec::new(),
        }
    }

    /// Builds an update carrying exactly one effect.
    pub fn with_effect(value: V, effect: E) -> Self {
        Self {
            value,
            effects: vec![effect],
            signals: Vec::new(),
        }
    }

    pub fn map<W, F>(self, f: F) -> Update<W, E, S>
    where
        F: FnOnce(V) -> W,
    {
        Update {
            value: f(self.value),
            effects: self.effects,
            signals: self.signals,
        }
    }

    /// Rewrites every effect, typically to tag a child's effects so their
    /// results are routed back to the child on the next cycle.
    pub fn map_effects<F2, F>(self, f: F) -> Update<V, F2, S>
    where
        F: FnMut(E) -> F2,
    {
        Update {
            value: self.value,
            effects: self.effects.into_iter().map(f).collect(),
            signals: self.signals,
        }
    }

    /// Sequences a value-dependent computation after this one.
    ///
    /// Equivalent to `self.map(f).join()`: effects and signals of `self`
    /// precede those produced by `f`.
    pub fn and_then<W, F>(self, f: F) -> Update<W, E, S>
    where
        F: FnOnce(V) -> Update<W, E, S>,
    {
        self.map(f).join()
    }

    /// Appends one effect after everything already pending.
    pub fn and_add_effect(self, effect: E) -> Self {
        self.and_then(super::add_effect(effect))
    }

    /// Appends several effects, keeping their order.
    pub fn and_add_effects<I>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.effects.extend(effects);
        self
    }

    /// Pipeline form of [`super::ap`]: `save(ctor).and_map(a).and_map(b)`.
    pub fn and_map<A, W>(self, arg: Update<A, E, S>) -> Update<W, E, S>
    where
        V: FnOnce(A) -> W,
    {
        super::ap(self, arg)
    }

    /// Splits the triple into its parts.
    pub fn into_parts(self) -> (V, Vec<E>, Vec<S>) {
        (self.value, self.effects, self.signals)
    }
}

impl<V, E, S> Update<Update<V, E, S>, E, S> {
    /// Flattens one level of nesting.
    ///
    /// Outer lists come first: the effects of the computation that produced
    /// the inner update precede the inner update's own effects.
    pub fn join(self) -> Update<V, E, S> {
        let Update {
            value: inner,
            mut effects,
            mut signals,
        } = self;
        effects.extend(inner.effects);
        signals.extend(inner.signals);
        Update {
            value: inner.value,
            effects,
            signals,
        }
    }
}

impl<V, E, S> From<V> for Update<V, E, S> {
    fn from(value: V) -> Self {
        Self::save(value)
    }
}
