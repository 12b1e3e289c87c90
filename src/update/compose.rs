//! Point-free helpers for chaining updates.

use super::Update;

/// Returns a function that lifts a value and attaches `effect` to it.
///
/// Shaped for `and_then`: `update.and_then(add_effect(Effect::Save))`.
pub fn add_effect<V, E, S>(effect: E) -> impl FnOnce(V) -> Update<V, E, S> {
    move |value| Update::with_effect(value, effect)
}

/// Right-to-left Kleisli composition: runs `g`, then feeds its value to `f`.
pub fn kleisli<V, W, X, E, S, F, G>(f: F, g: G) -> impl Fn(V) -> Update<X, E, S>
where
    F: Fn(W) -> Update<X, E, S>,
    G: Fn(V) -> Update<W, E, S>,
{
    move |value| g(value).and_then(&f)
}

/// Chains `steps` left to right, starting from `Update::save(value)`.
///
/// An empty sequence is the identity.
pub fn sequence<V, E, S, I>(steps: I) -> impl FnOnce(V) -> Update<V, E, S>
where
    I: IntoIterator,
    I::Item: FnOnce(V) -> Update<V, E, S>,
{
    move |value| {
        steps
            .into_iter()
            .fold(Update::save(value), |acc, step| acc.and_then(step))
    }
}
