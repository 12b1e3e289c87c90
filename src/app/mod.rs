//! Model-View-Update program contract.
//!
//! This module provides the traits an application implements to be driven
//! by [`crate::runtime::Runtime`].
//!
//! # Architecture
//!
//! ```text
//! Message ──→ update ──→ Update<Model, Effect> ──→ discharge ──→ Executor
//!    ↑                                                              │
//!    └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Model**: Immutable representation of program state
//! - **Message**: User actions or results of executed effects
//! - **Program**: Pure functions producing the next model and its effects

mod message;
mod model;
mod program;

pub use message::Message;
pub use model::Model;
pub use program::{Program, TopLevel};
