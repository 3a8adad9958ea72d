//! Execution, commission and fill records.

use chrono::{DateTime, Utc};

use crate::Decimal;
use crate::orders::{Action, Order};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One execution event reported by the venue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Execution {
    /// Order the execution applies to.
    pub order_id: i32,
    /// Execution time.
    pub time: DateTime<Utc>,
    /// Executed quantity.
    pub shares: Decimal,
    /// Execution price.
    pub price: Decimal,
    /// Executed side.
    pub side: Action,
}

impl Execution {
    /// Creates an execution record.
    #[must_use]
    pub fn new(
        order_id: i32,
        time: DateTime<Utc>,
        shares: Decimal,
        price: Decimal,
        side: Action,
    ) -> Self {
        Self {
            order_id,
            time,
            shares,
            price,
            side,
        }
    }

    /// Notional value of the execution.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.price * self.shares
    }
}

/// Commission charged for one execution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommissionReport {
    /// Commission amount.
    pub commission: Decimal,
    /// Commission currency.
    pub currency: String,
}

impl CommissionReport {
    /// Creates a commission report.
    #[must_use]
    pub fn new(commission: Decimal, currency: impl Into<String>) -> Self {
        Self {
            commission,
            currency: currency.into(),
        }
    }
}

/// One (possibly partial) execution event against an order, with its cost.
///
/// The order is referenced by its ID; multiple fills may accumulate against
/// one order. The composition is purely structural — nothing here checks
/// that `shares` is positive or that the execution's `order_id` matches the
/// fill's. Keeping the records consistent is the routing engine's
/// responsibility.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use trading_models_rs::dec;
/// use trading_models_rs::fills::{CommissionReport, Execution, Fill};
/// use trading_models_rs::orders::{Action, Order};
///
/// let order = Order::limit(Action::Buy, dec!(100), dec!(150.25)).unwrap();
/// let time = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
/// let fill = Fill::new(
///     &order,
///     Execution::new(order.order_id(), time, dec!(100), dec!(150.0), Action::Buy),
///     CommissionReport::new(dec!(1.00), "USD"),
///     time,
/// );
///
/// assert_eq!(fill.order_id, order.order_id());
/// assert_eq!(fill.execution.notional(), dec!(15000.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fill {
    /// ID of the order this fill belongs to.
    pub order_id: i32,
    /// The execution event.
    pub execution: Execution,
    /// Commission for the execution.
    pub commission_report: CommissionReport,
    /// Fill time.
    pub time: DateTime<Utc>,
}

impl Fill {
    /// Creates a fill tied to `order`.
    #[must_use]
    pub fn new(
        order: &Order,
        execution: Execution,
        commission_report: CommissionReport,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id: order.order_id(),
            execution,
            commission_report,
            time,
        }
    }
}
