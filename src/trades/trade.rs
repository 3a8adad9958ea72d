//! The trade aggregate: one order, its status, fills and log.

use chrono::{DateTime, Utc};

use crate::fills::Fill;
use crate::orders::Order;

use super::status::{OrderState, OrderStatus};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry in a trade's chronological log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TradeLogEntry {
    /// When the entry was recorded.
    pub time: DateTime<Utc>,
    /// Status at that time.
    pub status: OrderState,
    /// Free-form message.
    pub message: String,
}

impl TradeLogEntry {
    /// Creates a log entry.
    #[must_use]
    pub fn new(time: DateTime<Utc>, status: OrderState, message: impl Into<String>) -> Self {
        Self {
            time,
            status,
            message: message.into(),
        }
    }
}

/// Long-lived aggregate tracking one order from submission to completion.
///
/// The routing engine appends fills and log entries (chronological,
/// append-only) and overwrites the status fields directly. The
/// [`Trade::is_done`]/[`Trade::is_active`] predicates are recomputed from
/// the current status on every access; both false at once is the `Inactive`
/// case — a reachable, valid state. Consistency between accumulated fills
/// and the numeric status fields is the engine's responsibility.
///
/// # Example
///
/// ```rust
/// use trading_models_rs::dec;
/// use trading_models_rs::orders::{Action, Order};
/// use trading_models_rs::trades::{OrderState, OrderStatus, Trade};
///
/// let order = Order::limit(Action::Buy, dec!(100), dec!(150.25)).unwrap();
/// let mut status = OrderStatus::new(order.order_id());
/// status.status = OrderState::Submitted;
/// status.remaining = dec!(100);
///
/// let mut trade = Trade::new(order, status);
/// assert!(trade.is_active());
///
/// trade.order_status.status = OrderState::Filled;
/// trade.order_status.filled = dec!(100);
/// trade.order_status.remaining = dec!(0);
/// assert!(trade.is_done());
/// assert!(!trade.is_active());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trade {
    /// The order instruction.
    pub order: Order,
    /// Latest status snapshot.
    pub order_status: OrderStatus,
    /// Fills accumulated against the order, chronological.
    pub fills: Vec<Fill>,
    /// Chronological status log.
    pub log: Vec<TradeLogEntry>,
}

impl Trade {
    /// Creates a trade for `order` with its initial status.
    #[must_use]
    pub fn new(order: Order, order_status: OrderStatus) -> Self {
        Self {
            order,
            order_status,
            fills: Vec::new(),
            log: Vec::new(),
        }
    }

    /// True when the status is terminal (`Filled` or `Cancelled`).
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.order_status.status.is_done()
    }

    /// True when the status is in-flight (`PendingSubmit` or `Submitted`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.order_status.status.is_active()
    }

    /// Appends a fill.
    pub fn add_fill(&mut self, fill: Fill) {
        self.fills.push(fill);
    }

    /// Appends a log entry.
    pub fn add_log(&mut self, entry: TradeLogEntry) {
        self.log.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Decimal;
    use crate::dec;
    use crate::fills::{CommissionReport, Execution};
    use crate::orders::Action;
    use chrono::TimeZone;

    fn time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_new_trade_is_empty() {
        let order = Order::limit(Action::Buy, dec!(100), dec!(150.0)).unwrap();
        let order_id = order.order_id();
        let trade = Trade::new(order, OrderStatus::new(order_id));

        assert!(trade.fills.is_empty());
        assert!(trade.log.is_empty());
        assert_eq!(trade.order_status.order_id, trade.order.order_id());
    }

    #[test]
    fn test_submitted_trade_is_active() {
        let order = Order::limit(Action::Buy, dec!(100), dec!(150.0)).unwrap();
        let mut status = OrderStatus::new(order.order_id());
        status.status = OrderState::Submitted;
        status.remaining = dec!(100);

        let trade = Trade::new(order, status);
        assert!(trade.is_active());
        assert!(!trade.is_done());
    }

    #[test]
    fn test_filled_trade_is_done() {
        let order = Order::market(Action::Buy, dec!(100)).unwrap();
        let mut status = OrderStatus::new(order.order_id());
        status.status = OrderState::Filled;

        let trade = Trade::new(order, status);
        assert!(trade.is_done());
        assert!(!trade.is_active());
    }

    #[test]
    fn test_inactive_trade_is_neither() {
        let order = Order::market(Action::Buy, dec!(100)).unwrap();
        let mut status = OrderStatus::new(order.order_id());
        status.status = OrderState::Inactive;

        let trade = Trade::new(order, status);
        assert!(!trade.is_done());
        assert!(!trade.is_active());
    }

    #[test]
    fn test_predicates_track_status_mutation() {
        let order = Order::market(Action::Sell, dec!(10)).unwrap();
        let mut trade = Trade::new(order, OrderStatus::new(0));

        assert!(trade.is_active()); // PendingSubmit default
        trade.order_status.status = OrderState::Cancelled;
        assert!(trade.is_done());
        // permissive: terminal back to working is accepted
        trade.order_status.status = OrderState::Submitted;
        assert!(trade.is_active());
    }

    #[test]
    fn test_fill_and_log_accumulation() {
        let order = Order::limit(Action::Buy, dec!(100), dec!(150.0)).unwrap();
        let order_id = order.order_id();
        let mut trade = Trade::new(order, OrderStatus::new(order_id));

        let fill = Fill::new(
            &trade.order,
            Execution::new(order_id, time(), dec!(60), dec!(150.0), Action::Buy),
            CommissionReport::new(dec!(0.60), "USD"),
            time(),
        );
        trade.add_fill(fill);
        trade.add_log(TradeLogEntry::new(
            time(),
            OrderState::Submitted,
            "partially filled",
        ));

        assert_eq!(trade.fills.len(), 1);
        assert_eq!(trade.log.len(), 1);
        assert_eq!(trade.log[0].message, "partially filled");

        // appending a fill does not touch the status figures
        assert_eq!(trade.order_status.filled, Decimal::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization_round_trip() {
        let order = Order::limit(Action::Buy, dec!(100), dec!(150.0)).unwrap();
        let order_id = order.order_id();
        let trade = Trade::new(order, OrderStatus::new(order_id));
        let json = serde_json::to_string(&trade).unwrap();
        let back: Trade = serde_json::from_str(&json).unwrap();
        assert_eq!(trade, back);
    }
}
