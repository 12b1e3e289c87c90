//! Effect execution and the channel back into the runtime.

use std::fmt;
use std::sync::{Arc, Weak};

use tokio::sync::mpsc;

use crate::error::RuntimeError;

/// What travels over the runtime channel.
#[derive(Debug)]
pub(crate) enum Envelope<M> {
    Message(M),
    Quit,
    /// Every dispatcher of the given link generation was dropped.
    Released(u64),
}

/// Shared by every clone of a dispatcher; dropping the last clone tells the
/// runtime nobody can send anymore.
struct Link<M> {
    sender: mpsc::UnboundedSender<Envelope<M>>,
    generation: u64,
}

impl<M> Drop for Link<M> {
    fn drop(&mut self) {
        let _ = self.sender.send(Envelope::Released(self.generation));
    }
}

/// Handle for feeding messages back into a running program.
///
/// Cloning is cheap; the runtime keeps listening while any clone is alive.
pub struct Dispatcher<M> {
    link: Arc<Link<M>>,
}

impl<M> Clone for Dispatcher<M> {
    fn clone(&self) -> Self {
        Self {
            link: Arc::clone(&self.link),
        }
    }
}

impl<M> fmt::Debug for Dispatcher<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl<M> Dispatcher<M> {
    pub fn send(&self, message: M) -> Result<(), RuntimeError> {
        self.deliver(Envelope::Message(message))
    }

    /// Asks the runtime to stop after the message currently being processed.
    pub fn quit(&self) -> Result<(), RuntimeError> {
        self.deliver(Envelope::Quit)
    }

    /// True once the runtime has stopped.
    pub fn is_closed(&self) -> bool {
        self.link.sender.is_closed()
    }

    fn deliver(&self, envelope: Envelope<M>) -> Result<(), RuntimeError> {
        self.link
            .sender
            .send(envelope)
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}

/// Hands out dispatchers that all share one link.
///
/// A new link generation starts whenever the previous one was fully
/// dropped. Its `Released` envelope is queued behind every message sent
/// through it, so seeing the current generation released means the queue
/// holds nothing more.
pub(crate) struct DispatchHub<M> {
    sender: mpsc::UnboundedSender<Envelope<M>>,
    link: Weak<Link<M>>,
    generation: u64,
}

impl<M> DispatchHub<M> {
    pub(crate) fn new(sender: mpsc::UnboundedSender<Envelope<M>>) -> Self {
        Self {
            sender,
            link: Weak::new(),
            generation: 0,
        }
    }

    pub(crate) fn dispatcher(&mut self) -> Dispatcher<M> {
        if let Some(link) = self.link.upgrade() {
            return Dispatcher { link };
        }
        self.generation += 1;
        let link = Arc::new(Link {
            sender: self.sender.clone(),
            generation: self.generation,
        });
        self.link = Arc::downgrade(&link);
        Dispatcher { link }
    }

    /// True when `generation` is the current link and nothing holds it, so
    /// no further message can arrive.
    pub(crate) fn is_released(&self, generation: u64) -> bool {
        generation == self.generation && self.link.strong_count() == 0
    }
}

/// Interprets effect descriptors.
///
/// Effects are handed over one at a time in batch order. An executor may
/// act immediately or spawn a task; either way results come back as
/// messages through the dispatcher.
pub trait Executor<E, M> {
    fn execute(&mut self, effect: E, dispatch: &Dispatcher<M>);
}

impl<E, M, F> Executor<E, M> for F
where
    F: FnMut(E, &Dispatcher<M>),
{
    fn execute(&mut self, effect: E, dispatch: &Dispatcher<M>) {
        self(effect, dispatch)
    }
}
