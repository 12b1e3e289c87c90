//! Base trait for messages in MVU architecture.

/// Marker trait for message objects.
///
/// Messages represent:
/// - User actions (button clicks, key presses)
/// - Results of executed effects (API responses, storage reads)
/// - Timer ticks
///
/// Messages are processed by [`super::Program::update`] to produce new models.
pub trait Message: std::fmt::Debug + Send + 'static {}
