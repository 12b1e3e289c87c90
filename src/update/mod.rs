//! Update triples: a value paired with pending effects and signals.
//!
//! An [`Update`] is what a state transition returns. The value is the new
//! state (or any intermediate result), the effects are descriptors the host
//! runtime will execute later, and the signals are notifications a parent
//! component picks up before the update is discharged.
//!
//! # Composition
//!
//! ```text
//! save(v) ──map──→ Update<W> ──and_then(f)──→ Update<X> ──discharge──→ (X, Batch<E>)
//! ```
//!
//! Every combinator concatenates lists with the earlier computation first,
//! so effects reach the runtime in causal order.

mod apply;
mod compose;
mod signal;
mod triple;

pub use apply::{ap, map2, map3, map4, map5, map6, map7};
pub use compose::{add_effect, kleisli, sequence};
pub use signal::add_signal;
pub use triple::Update;
