//! Shared types: the crate error and unset-value sentinels.
//!
//! Price and linkage fields stay uniformly numeric for downstream
//! arithmetic; where a field can be legitimately absent, a reserved sentinel
//! constant stands in for null instead of an `Option`. Consumers must treat
//! a sentinel as "absent" before using the value in computation.
//!
//! # Example
//!
//! ```rust
//! use trading_models_rs::dec;
//! use trading_models_rs::orders::{Action, Order};
//! use trading_models_rs::types::{UNSET_PRICE, is_price_set};
//!
//! let order = Order::market(Action::Buy, dec!(10)).unwrap();
//! assert_eq!(order.price(), UNSET_PRICE);
//! assert!(!is_price_set(order.price()));
//! ```

/// Crate error and result alias.
pub mod error;

pub use error::{ModelError, ModelResult};

use crate::Decimal;

/// Sentinel marking a price field that has no assigned value.
///
/// The reserved top value of the `Decimal` range; no real price reaches it.
pub const UNSET_PRICE: Decimal = Decimal::MAX;

/// Sentinel marking an integer linkage field that has no assigned value.
pub const UNSET_INT: i32 = i32::MAX;

/// Returns true when `price` holds a real value rather than [`UNSET_PRICE`].
#[must_use]
pub fn is_price_set(price: Decimal) -> bool {
    price != UNSET_PRICE
}
