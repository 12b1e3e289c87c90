//! Message loop driving a [`Program`].

use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use super::batch::Batch;
use super::executor::{DispatchHub, Dispatcher, Envelope, Executor};
use crate::app::Program;
use crate::config::RuntimeConfig;
use crate::error::RuntimeError;

/// Runs a program: one message at a time, effects in batch order.
///
/// The loop ends when a dispatcher asks to quit, or once every dispatcher
/// has been dropped and the messages they sent are processed.
pub struct Runtime<P: Program, X> {
    model: P::Model,
    pending: Batch<P::Effect>,
    executor: X,
    config: RuntimeConfig,
    hub: DispatchHub<P::Message>,
    receiver: mpsc::UnboundedReceiver<Envelope<P::Message>>,
}

impl<P, X> Runtime<P, X>
where
    P: Program,
    X: Executor<P::Effect, P::Message>,
{
    /// Calls `init` right away; its effects run once [`Runtime::run`] starts.
    pub fn new(flags: P::Flags, executor: X, config: RuntimeConfig) -> Self {
        let (model, pending) = P::start(flags);
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            model,
            pending,
            executor,
            config,
            hub: DispatchHub::new(sender),
            receiver,
        }
    }

    pub fn model(&self) -> &P::Model {
        &self.model
    }

    /// A handle for sending messages from outside, e.g. input events.
    pub fn dispatcher(&mut self) -> Dispatcher<P::Message> {
        self.hub.dispatcher()
    }

    /// Processes messages until the program quits or goes idle, returning
    /// the final model.
    pub async fn run(self) -> Result<P::Model, RuntimeError> {
        let Runtime {
            mut model,
            pending,
            mut executor,
            config,
            mut hub,
            mut receiver,
        } = self;

        debug!(effects = pending.len(), "Program started");
        execute(&mut executor, pending, &hub.dispatcher());

        let mut processed: u64 = 0;
        while let Some(envelope) = receiver.recv().await {
            let message = match envelope {
                Envelope::Message(message) => message,
                Envelope::Quit => {
                    info!(processed, "Quit requested");
                    return Ok(model);
                }
                Envelope::Released(generation) if hub.is_released(generation) => {
                    info!(processed, "All dispatchers dropped, runtime stopped");
                    return Ok(model);
                }
                Envelope::Released(_) => continue,
            };

            if let Some(limit) = config.max_messages {
                if processed >= limit {
                    warn!(limit, "Message budget exceeded");
                    return Err(RuntimeError::MessageBudgetExceeded { limit });
                }
            }
            processed += 1;

            debug!(?message, "Processing message");
            let (next, batch) = P::step(message, model);
            trace!(model = ?next, effects = batch.len(), "Step complete");
            model = next;

            execute(&mut executor, batch, &hub.dispatcher());
        }

        Ok(model)
    }
}

fn execute<E, M, X>(executor: &mut X, batch: Batch<E>, dispatch: &Dispatcher<M>)
where
    X: Executor<E, M>,
{
    for effect in batch {
        executor.execute(effect, dispatch);
    }
}
