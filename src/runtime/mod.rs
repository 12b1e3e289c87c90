//! Host-runtime side of the update pattern.
//!
//! [`discharge`] turns an [`crate::update::Update`] into the `(value, Batch)`
//! pair a runtime consumes, and [`Runtime`] is such a runtime: it feeds
//! messages through a [`crate::app::Program`] and hands every effect to an
//! [`Executor`].

mod batch;
mod discharge;
mod driver;
mod executor;

pub use batch::Batch;
pub use discharge::{discharge, run, run2, run3};
pub use driver::Runtime;
pub use executor::{Dispatcher, Executor};
