//! Error types for curve generation and mapping lookup.

use thiserror::Error;

/// Failures reported by the public entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The order is negative or too large for a `u32` index space.
    #[error("invalid curve order {order}: expected 0..={max}", max = crate::curve::MAX_ORDER)]
    InvalidOrder {
        /// The rejected order, as supplied by the caller.
        order: i64,
    },
    /// The name is not a key of the mapping registry.
    #[error(
        "unknown mapping '{0}'. Valid options: {names}",
        names = crate::registry::MAPPING_NAMES.join(", ")
    )]
    UnknownMapping(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
