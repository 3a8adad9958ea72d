//! Order status: the lifecycle state and its classification sets.

use std::fmt;

use crate::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order.
///
/// A two-classification model, not a managed state machine: any assignment
/// is accepted, and the done/active predicates are derived from the current
/// value on every access. `Inactive` belongs to neither classification — a
/// rejected-or-unknown order that is neither working nor terminally
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderState {
    /// Submission requested, not yet acknowledged by the venue.
    #[default]
    PendingSubmit,
    /// Working at the venue.
    Submitted,
    /// Completely filled. Terminal.
    Filled,
    /// Cancelled. Terminal.
    Cancelled,
    /// Neither working nor resolved (rejected or unknown).
    Inactive,
}

impl OrderState {
    /// Terminal states.
    pub const DONE_STATES: [OrderState; 2] = [OrderState::Filled, OrderState::Cancelled];

    /// In-flight states.
    pub const ACTIVE_STATES: [OrderState; 2] = [OrderState::PendingSubmit, OrderState::Submitted];

    /// Returns true for a terminal state.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, OrderState::Filled | OrderState::Cancelled)
    }

    /// Returns true for an in-flight state.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, OrderState::PendingSubmit | OrderState::Submitted)
    }

    /// Canonical status token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            OrderState::PendingSubmit => "PendingSubmit",
            OrderState::Submitted => "Submitted",
            OrderState::Filled => "Filled",
            OrderState::Cancelled => "Cancelled",
            OrderState::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status snapshot for one order.
///
/// All fields are engine-written, directly; updating several of them (say
/// `status` together with `filled`) is several independent writes, not one
/// atomic operation, and nothing here keeps the numeric fields consistent
/// with the fills accumulated on the trade.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderStatus {
    /// Order this status describes.
    pub order_id: i32,
    /// Current lifecycle state.
    pub status: OrderState,
    /// Quantity filled so far.
    pub filled: Decimal,
    /// Quantity still working.
    pub remaining: Decimal,
    /// Average fill price, engine-computed.
    pub avg_fill_price: Decimal,
    /// Price of the most recent fill.
    pub last_fill_price: Decimal,
    /// Parent order ID for bracket children; zero for roots.
    pub parent_id: i32,
}

impl OrderStatus {
    /// Creates a pending status for `order_id` with zeroed figures.
    #[must_use]
    pub fn new(order_id: i32) -> Self {
        Self {
            order_id,
            ..Self::default()
        }
    }
}
