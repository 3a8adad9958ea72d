//! Order instructions: the closed variant set, construction invariants and
//! bracket linkage.
//!
//! # Overview
//!
//! An [`Order`] carries the base fields every instruction shares (identity,
//! side, quantity, routing qualifiers) plus an [`OrderKind`] payload fixing
//! the variant and its extra parameters:
//!
//! - **Market** / **Limit** — no trigger state.
//! - **Stop** / **StopLimit** — a [`StopState`] the engine writes once the
//!   stop condition is met.
//! - **TrailingStopMarket** / **TrailingStopLimit** — a [`Trailing`] trail
//!   definition (exactly one of distance/percent) with engine-maintained
//!   `stop_price`/`extreme_price` tracking state.
//!
//! Each variant has its own constructor returning either a valid order or a
//! typed validation failure; identity and routing fields are immutable once
//! construction finishes. Order IDs come from a process-wide atomic counter
//! ([`OrderIdGenerator`]).
//!
//! Bracket parent/child relations are index pairs through an [`OrderArena`]
//! rather than nested ownership.
//!
//! # Example
//!
//! ```rust
//! use trading_models_rs::dec;
//! use trading_models_rs::orders::{Action, Order, OrderArena};
//!
//! // entry order with an attached stop, held until the parent transmits
//! let mut arena = OrderArena::new();
//! let entry = arena.insert(Order::limit(Action::Buy, dec!(100), dec!(150.00)).unwrap());
//! let protect = arena.insert(
//!     Order::stop(Action::Sell, dec!(100), dec!(145.00))
//!         .unwrap()
//!         .with_transmit(false),
//! );
//! arena.add_child(entry, protect).unwrap();
//!
//! let entry_id = arena.get(entry).unwrap().order_id();
//! assert_eq!(arena.get(protect).unwrap().parent_id(), entry_id);
//! ```

/// Flat order storage and bracket linkage.
pub mod arena;

/// Order-ID assignment.
pub mod id;

/// Order variants and construction rules.
pub mod order;

/// Trailing-stop parameters and tracking state.
pub mod trailing;

pub use arena::OrderArena;
pub use id::{OrderIdGenerator, next_order_id};
pub use order::{Action, Order, OrderKind, StopState, TimeInForce};
pub use trailing::Trailing;
