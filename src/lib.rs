//! Update triples and a model-update-command runtime.
//!
//! - [`update`]: the `Update<V, E, S>` triple and its combinators
//! - [`runtime`]: effect batching, discharge adapters and the message loop
//! - [`app`]: the `Program` contract driven by the runtime

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod update;

pub use runtime::{discharge, Batch, Dispatcher, Executor, Runtime};
pub use update::Update;
