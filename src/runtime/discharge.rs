//! Boundary between `Update` values and the host runtime.
//!
//! The runtime only understands `(value, Batch)` pairs. These adapters turn
//! update-returning functions into that shape.

use super::batch::Batch;
use crate::update::Update;

/// Drops the signals and batches the effects in order.
///
/// Callers are expected to have consumed signals already, usually with
/// [`Update::apply_signals`].
pub fn discharge<V, E, S>(update: Update<V, E, S>) -> (V, Batch<E>) {
    let (value, effects, _signals) = update.into_parts();
    (value, effects.into_iter().collect())
}

pub fn run<A, V, E, S, F>(f: F) -> impl Fn(A) -> (V, Batch<E>)
where
    F: Fn(A) -> Update<V, E, S>,
{
    move |a| discharge(f(a))
}

pub fn run2<A, B, V, E, S, F>(f: F) -> impl Fn(A, B) -> (V, Batch<E>)
where
    F: Fn(A, B) -> Update<V, E, S>,
{
    move |a, b| discharge(f(a, b))
}

pub fn run3<A, B, C, V, E, S, F>(f: F) -> impl Fn(A, B, C) -> (V, Batch<E>)
where
    F: Fn(A, B, C) -> Update<V, E, S>,
{
    move |a, b, c| discharge(f(a, b, c))
}

impl<V, E, S> Update<V, E, S> {
    pub fn discharge(self) -> (V, Batch<E>) {
        discharge(self)
    }
}
