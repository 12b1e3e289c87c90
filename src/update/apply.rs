//! Applicative combinators.
//!
//! `map2` through `map7` are built from [`Update::map`] and [`ap`] only, so
//! they inherit its left-to-right list ordering.

use super::Update;

/// Applies the function carried by `tf` to the value of `ta`.
///
/// Effects and signals of `tf` come before those of `ta`.
pub fn ap<A, B, F, E, S>(tf: Update<F, E, S>, ta: Update<A, E, S>) -> Update<B, E, S>
where
    F: FnOnce(A) -> B,
{
    let Update {
        value: f,
        mut effects,
        mut signals,
    } = tf;
    effects.extend(ta.effects);
    signals.extend(ta.signals);
    Update {
        value: f(ta.value),
        effects,
        signals,
    }
}

pub fn map2<A, B, R, E, S, F>(f: F, a: Update<A, E, S>, b: Update<B, E, S>) -> Update<R, E, S>
where
    F: FnOnce(A, B) -> R,
{
    ap(a.map(|a| move |b| f(a, b)), b)
}

pub fn map3<A, B, C, R, E, S, F>(
    f: F,
    a: Update<A, E, S>,
    b: Update<B, E, S>,
    c: Update<C, E, S>,
) -> Update<R, E, S>
where
    F: FnOnce(A, B, C) -> R,
{
    ap(map2(|a, b| move |c| f(a, b, c), a, b), c)
}

pub fn map4<A, B, C, D, R, E, S, F>(
    f: F,
    a: Update<A, E, S>,
    b: Update<B, E, S>,
    c: Update<C, E, S>,
    d: Update<D, E, S>,
) -> Update<R, E, S>
where
    F: FnOnce(A, B, C, D) -> R,
{
    ap(map3(|a, b, c| move |d| f(a, b, c, d), a, b, c), d)
}

pub fn map5<A, B, C, D, G, R, E, S, F>(
    f: F,
    a: Update<A, E, S>,
    b: Update<B, E, S>,
    c: Update<C, E, S>,
    d: Update<D, E, S>,
    g: Update<G, E, S>,
) -> Update<R, E, S>
where
    F: FnOnce(A, B, C, D, G) -> R,
{
    ap(map4(|a, b, c, d| move |g| f(a, b, c, d, g), a, b, c, d), g)
}

pub fn map6<A, B, C, D, G, H, R, E, S, F>(
    f: F,
    a: Update<A, E, S>,
    b: Update<B, E, S>,
    c: Update<C, E, S>,
    d: Update<D, E, S>,
    g: Update<G, E, S>,
    h: Update<H, E, S>,
) -> Update<R, E, S>
where
    F: FnOnce(A, B, C, D, G, H) -> R,
{
    ap(
        map5(|a, b, c, d, g| move |h| f(a, b, c, d, g, h), a, b, c, d, g),
        h,
    )
}

#[allow(clippy::too_many_arguments)]
pub fn map7<A, B, C, D, G, H, I, R, E, S, F>(
    f: F,
    a: Update<A, E, S>,
    b: Update<B, E, S>,
    c: Update<C, E, S>,
    d: Update<D, E, S>,
    g: Update<G, E, S>,
    h: Update<H, E, S>,
    i: Update<I, E, S>,
) -> Update<R, E, S>
where
    F: FnOnce(A, B, C, D, G, H, I) -> R,
{
    ap(
        map6(
            |a, b, c, d, g, h| move |i| f(a, b, c, d, g, h, i),
            a,
            b,
            c,
            d,
            g,
            h,
        ),
        i,
    )
}
