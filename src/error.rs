//! Errors surfaced by the runtime layer.
//!
//! The update combinators themselves are total; only driving a program can
//! fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The program kept receiving messages past the configured limit.
    #[error("Message budget of {limit} exceeded")]
    MessageBudgetExceeded { limit: u64 },

    /// The runtime stopped before the message could be delivered.
    #[error("Runtime channel closed")]
    ChannelClosed,
}
