//! Defines some common functions used in this library.

/// Defines some useful functions such as the inner product.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
