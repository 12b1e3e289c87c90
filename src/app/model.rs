//! Base trait for program state in MVU architecture.

/// Marker trait for model objects.
///
/// Models should be:
/// - Immutable (Clone to create new models)
/// - Self-contained (all data needed to render the view)
/// - Inspectable (Debug for step logging)
pub trait Model: Clone + std::fmt::Debug + Send + 'static {}
