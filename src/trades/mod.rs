//! Order status and the trade lifecycle aggregate.
//!
//! # Overview
//!
//! An [`OrderStatus`] is the engine-written snapshot of where an order
//! stands ([`OrderState`] plus filled/remaining figures); a [`Trade`] ties
//! one order to that snapshot and accumulates its fills and a chronological
//! log. The lifecycle is classified, not managed: `Filled`/`Cancelled` are
//! done, `PendingSubmit`/`Submitted` are active, `Inactive` is neither, and
//! no transition table restricts how the engine moves between them.
//!
//! # Example
//!
//! ```rust
//! use trading_models_rs::dec;
//! use trading_models_rs::orders::{Action, Order};
//! use trading_models_rs::trades::{OrderState, OrderStatus, Trade};
//!
//! let order = Order::market(Action::Buy, dec!(100)).unwrap();
//! let mut trade = Trade::new(order, OrderStatus::new(0));
//!
//! trade.order_status.status = OrderState::Inactive;
//! assert!(!trade.is_active());
//! assert!(!trade.is_done());
//! ```

/// The lifecycle state and the status snapshot.
pub mod status;

/// The trade aggregate and its log.
pub mod trade;

pub use status::{OrderState, OrderStatus};
pub use trade::{Trade, TradeLogEntry};
