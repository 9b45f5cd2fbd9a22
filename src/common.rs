//! Defines some common functions used in this library.

/// Defines loss function trait and its instances.
pub mod loss_functions;

/// Defines the line search performed once per boosting round.
pub(crate) mod line_search;

/// Defines some checker functions.
pub(crate) mod checker;
