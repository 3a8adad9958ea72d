//! Error types for model construction and mutation.

use thiserror::Error;

/// Result alias used across the crate.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised when constructing or mutating model values.
///
/// Every invariant violation surfaces as a typed failure; no value is
/// silently clamped or substituted. Failures are deterministic and
/// caller-correctable — the caller fixes the input and constructs again, and
/// no variant of this error ever leaves a partially-constructed value behind.
///
/// # Example
///
/// ```rust
/// use trading_models_rs::dec;
/// use trading_models_rs::orders::{Action, Order};
/// use trading_models_rs::types::ModelError;
///
/// let err = Order::market(Action::Buy, dec!(0)).unwrap_err();
/// assert!(matches!(err, ModelError::InvalidField { field: "total_quantity", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required field is missing or out of range.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// An OHLC relationship does not hold; the message names the violated
    /// relationship and the offending values.
    #[error("invalid bar: {0}")]
    InvalidBar(String),

    /// The trailing distance/percent pair is not exactly-one-of. Raised at
    /// construction and again on any mutation of the pair.
    #[error("invalid trailing parameters: {0}")]
    InvalidTrailing(String),

    /// An arena index that resolves to no stored order.
    #[error("unknown order index {0}")]
    UnknownOrder(usize),
}
