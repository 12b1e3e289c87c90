//! Program trait for MVU architecture.

use std::convert::Infallible;

use super::message::Message;
use super::model::Model;
use crate::runtime::{run, run2, Batch};
use crate::update::Update;

/// Update type a program returns at the top level.
///
/// Signals cannot escape the top level: children's signals must have been
/// applied before `update` returns.
pub type TopLevel<M, E> = Update<M, E, Infallible>;

/// A program is the only place where model transitions happen.
///
/// Both functions must be pure: side effects are described by the returned
/// effects and executed by the runtime afterwards.
pub trait Program {
    /// The model type this program operates on.
    type Model: Model;

    /// The message type this program handles.
    type Message: Message;

    /// Effect descriptors understood by the runtime's executor.
    type Effect: std::fmt::Debug + Send + 'static;

    /// Start-up arguments passed to `init`.
    type Flags;

    fn init(flags: Self::Flags) -> TopLevel<Self::Model, Self::Effect>;

    fn update(
        message: Self::Message,
        model: Self::Model,
    ) -> TopLevel<Self::Model, Self::Effect>;

    /// `init` adapted to the runtime's `(model, batch)` contract.
    fn start(flags: Self::Flags) -> (Self::Model, Batch<Self::Effect>) {
        run(Self::init)(flags)
    }

    /// `update` adapted to the runtime's `(model, batch)` contract.
    fn step(
        message: Self::Message,
        model: Self::Model,
    ) -> (Self::Model, Batch<Self::Effect>) {
        run2(Self::update)(message, model)
    }
}
