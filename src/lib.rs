//! Canonical data model for a trading system's order lifecycle.
//!
//! This crate defines the order-instruction variants with their construction
//! invariants, validated OHLCV bar data, fill/execution/commission records,
//! and the order-status lifecycle shared between an order-routing engine, a
//! broker gateway and a persistence layer. It models data and invariants
//! only: nothing here transmits, matches or persists an order.
//!
//! # Overview
//!
//! - **Orders**: a closed set of instruction variants (market, limit, stop,
//!   stop-limit, trailing stop market/limit) over a common base, constructed
//!   through per-variant entry points that either return a valid order or a
//!   typed validation failure. Bracket parent/child linkage is index-based
//!   through [`orders::OrderArena`].
//! - **Bars**: [`bars::BarData`], an OHLCV record whose cross-field
//!   consistency is checked atomically at construction.
//! - **Fills**: [`fills::Execution`], [`fills::CommissionReport`] and
//!   [`fills::Fill`], plain records of one execution event and its cost.
//! - **Trades**: [`trades::OrderStatus`] and the [`trades::Trade`] aggregate
//!   with its derived active/done classification.
//!
//! Prices and quantities are [`Decimal`] throughout; the [`dec`] macro is
//! re-exported for literals.
//!
//! # Example
//!
//! ```rust
//! use trading_models_rs::dec;
//! use trading_models_rs::orders::{Action, Order};
//! use trading_models_rs::trades::{OrderState, OrderStatus, Trade};
//!
//! let order = Order::limit(Action::Buy, dec!(100), dec!(150.25)).unwrap();
//! assert_eq!(order.order_type(), "LMT");
//!
//! let mut status = OrderStatus::new(order.order_id());
//! status.status = OrderState::Submitted;
//! status.remaining = dec!(100);
//!
//! let trade = Trade::new(order, status);
//! assert!(trade.is_active());
//! assert!(!trade.is_done());
//! ```

/// Validated OHLCV bar data.
pub mod bars;

/// Execution, commission and fill records.
pub mod fills;

/// Order variants, construction invariants and bracket linkage.
pub mod orders;

/// Order status and the trade lifecycle aggregate.
pub mod trades;

/// Crate-wide error type and unset-value sentinels.
pub mod types;

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
