//! Order instructions: the closed variant set and its construction rules.

use std::fmt;

use crate::Decimal;
use crate::types::{ModelError, ModelResult, UNSET_INT, UNSET_PRICE};

use super::id;
use super::trailing::Trailing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    /// Buy.
    Buy,
    /// Sell.
    Sell,
}

impl Action {
    /// Canonical wire token for this side.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time-in-force qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeInForce {
    /// Valid for the trading day.
    #[default]
    Day,
    /// Good till cancelled.
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
    /// Good till the order's `good_till_date`.
    Gtd,
}

impl TimeInForce {
    /// Canonical wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeInForce::Day => "DAY",
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtd => "GTD",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trigger state shared by every stop-family variant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StopState {
    /// Whether the stop condition has been met. Engine-written.
    pub triggered: bool,
    /// Price at which the stop actually triggered. Engine-written.
    pub trigger_price: Option<Decimal>,
}

/// The closed set of order-instruction variants.
///
/// The variant fixes the order-type token returned by [`Order::order_type`]
/// and cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderKind {
    /// Execute at the prevailing market price.
    Market,
    /// Rest at the order's limit price.
    Limit,
    /// Trigger a market order once the stop level trades.
    Stop {
        /// Trigger state.
        state: StopState,
    },
    /// Trigger a limit order once the stop level trades.
    StopLimit {
        /// Limit price evaluated after the stop triggers.
        limit_price: Decimal,
        /// Trigger state.
        state: StopState,
    },
    /// Stop level follows the best seen price; market once triggered.
    TrailingStopMarket {
        /// Trail configuration and tracking state.
        trailing: Trailing,
        /// Trigger state.
        state: StopState,
    },
    /// Stop level follows the best seen price; limit once triggered.
    TrailingStopLimit {
        /// Distance from the stop level to the limit price.
        limit_offset: Decimal,
        /// Trail configuration and tracking state.
        trailing: Trailing,
        /// Trigger state.
        state: StopState,
    },
}

impl OrderKind {
    /// Canonical order-type token.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            OrderKind::Market => "MKT",
            OrderKind::Limit => "LMT",
            OrderKind::Stop { .. } => "STP",
            OrderKind::StopLimit { .. } => "STP LMT",
            OrderKind::TrailingStopMarket { .. } => "TRAIL",
            OrderKind::TrailingStopLimit { .. } => "TRAIL LIMIT",
        }
    }
}

/// A single order instruction.
///
/// Construct through a variant entry point ([`Order::market`],
/// [`Order::limit`], [`Order::stop`], [`Order::stop_limit`],
/// [`Order::trailing_stop_market`], [`Order::trailing_stop_limit`]) and
/// optionally override routing fields with the `with_*` builders. Identity
/// and routing fields are fixed once construction finishes; only
/// execution-time state (trigger and trailing fields) stays writable, through
/// [`Order::stop_state_mut`] and [`Order::trailing_mut`].
///
/// An order ID is drawn from the process-wide counter at construction unless
/// the caller supplies an explicit non-zero one via [`Order::with_order_id`].
///
/// Bracket children are tracked as arena indices, maintained by
/// [`OrderArena::add_child`](super::OrderArena::add_child); `parent_id`
/// carries the back-reference to the parent's order ID, or [`UNSET_INT`] for
/// a root order.
///
/// # Example
///
/// ```rust
/// use trading_models_rs::dec;
/// use trading_models_rs::orders::{Action, Order, TimeInForce};
///
/// let order = Order::limit(Action::Buy, dec!(100), dec!(150.25))
///     .unwrap()
///     .with_tif(TimeInForce::Gtc)
///     .with_order_ref("strat-7");
///
/// assert!(order.order_id() > 0);
/// assert_eq!(order.order_type(), "LMT");
/// assert_eq!(order.price(), dec!(150.25));
/// assert_eq!(order.order_ref(), "strat-7");
/// assert!(!order.has_parent());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    order_id: i32,
    perm_id: i32,
    client_id: i32,
    action: Action,
    total_quantity: Decimal,
    price: Decimal,
    tif: TimeInForce,
    good_till_date: String,
    good_after_time: String,
    oca_group: String,
    order_ref: String,
    parent_id: i32,
    transmit: bool,
    children: Vec<usize>,
    kind: OrderKind,
}

impl Order {
    fn with_kind(
        action: Action,
        total_quantity: Decimal,
        price: Decimal,
        kind: OrderKind,
    ) -> ModelResult<Self> {
        if total_quantity <= Decimal::ZERO {
            return Err(ModelError::InvalidField {
                field: "total_quantity",
                reason: format!("must be strictly positive, got {}", total_quantity),
            });
        }
        Ok(Self {
            order_id: id::next_order_id(),
            perm_id: 0,
            client_id: 0,
            action,
            total_quantity,
            price,
            tif: TimeInForce::default(),
            good_till_date: String::new(),
            good_after_time: String::new(),
            oca_group: String::new(),
            order_ref: String::new(),
            parent_id: UNSET_INT,
            transmit: true,
            children: Vec::new(),
            kind,
        })
    }

    /// Creates a market order.
    ///
    /// The price field is left at [`UNSET_PRICE`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if `total_quantity` is not
    /// strictly positive.
    pub fn market(action: Action, total_quantity: Decimal) -> ModelResult<Self> {
        Self::with_kind(action, total_quantity, UNSET_PRICE, OrderKind::Market)
    }

    /// Creates a limit order resting at `price`.
    ///
    /// [`UNSET_PRICE`] is accepted as a "no price yet" marker; consumers must
    /// check for it before arithmetic.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if `total_quantity` is not
    /// strictly positive.
    pub fn limit(action: Action, total_quantity: Decimal, price: Decimal) -> ModelResult<Self> {
        Self::with_kind(action, total_quantity, price, OrderKind::Limit)
    }

    /// Creates a stop order triggering at `stop_price`.
    ///
    /// The stop level is carried in the price field.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if `total_quantity` is not
    /// strictly positive.
    pub fn stop(action: Action, total_quantity: Decimal, stop_price: Decimal) -> ModelResult<Self> {
        Self::with_kind(
            action,
            total_quantity,
            stop_price,
            OrderKind::Stop {
                state: StopState::default(),
            },
        )
    }

    /// Creates a stop-limit order: triggers at `stop_price`, then rests at
    /// `limit_price`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] if `total_quantity` is not
    /// strictly positive.
    pub fn stop_limit(
        action: Action,
        total_quantity: Decimal,
        limit_price: Decimal,
        stop_price: Decimal,
    ) -> ModelResult<Self> {
        Self::with_kind(
            action,
            total_quantity,
            stop_price,
            OrderKind::StopLimit {
                limit_price,
                state: StopState::default(),
            },
        )
    }

    /// Creates a trailing stop order executing as a market order once
    /// triggered.
    ///
    /// Exactly one of `trailing_distance`/`trailing_percent` must be given.
    /// The tracking state (`stop_price`, `extreme_price`) starts unset; the
    /// engine initializes and maintains it from market data through
    /// [`Order::trailing_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidTrailing`] when both or neither trail
    /// parameter is given, or [`ModelError::InvalidField`] for a
    /// non-positive quantity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trading_models_rs::dec;
    /// use trading_models_rs::orders::{Action, Order};
    ///
    /// let order =
    ///     Order::trailing_stop_market(Action::Buy, dec!(100), Some(dec!(2.0)), None).unwrap();
    /// assert_eq!(order.order_type(), "TRAIL");
    /// assert_eq!(order.trailing().unwrap().stop_price, None);
    ///
    /// assert!(Order::trailing_stop_market(Action::Buy, dec!(100), None, None).is_err());
    /// ```
    pub fn trailing_stop_market(
        action: Action,
        total_quantity: Decimal,
        trailing_distance: Option<Decimal>,
        trailing_percent: Option<Decimal>,
    ) -> ModelResult<Self> {
        let trailing = Trailing::new(trailing_distance, trailing_percent)?;
        Self::with_kind(
            action,
            total_quantity,
            Decimal::ZERO,
            OrderKind::TrailingStopMarket {
                trailing,
                state: StopState::default(),
            },
        )
    }

    /// Creates a trailing stop order executing as a limit order once
    /// triggered.
    ///
    /// `limit_offset` is the distance from the stop level to the limit price
    /// and must be non-negative. The trail parameters follow the same
    /// exactly-one-of rule as [`Order::trailing_stop_market`].
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidField`] for a negative `limit_offset` or
    /// non-positive quantity, [`ModelError::InvalidTrailing`] for a bad trail
    /// pair.
    pub fn trailing_stop_limit(
        action: Action,
        total_quantity: Decimal,
        limit_offset: Decimal,
        trailing_distance: Option<Decimal>,
        trailing_percent: Option<Decimal>,
    ) -> ModelResult<Self> {
        if limit_offset < Decimal::ZERO {
            return Err(ModelError::InvalidField {
                field: "limit_offset",
                reason: format!("must be non-negative, got {}", limit_offset),
            });
        }
        let trailing = Trailing::new(trailing_distance, trailing_percent)?;
        Self::with_kind(
            action,
            total_quantity,
            Decimal::ZERO,
            OrderKind::TrailingStopLimit {
                limit_offset,
                trailing,
                state: StopState::default(),
            },
        )
    }

    /// Overrides the auto-assigned order ID.
    ///
    /// A zero `order_id` keeps the auto-assigned one. The ID drawn from the
    /// process counter at construction is consumed either way.
    #[must_use]
    pub fn with_order_id(mut self, order_id: i32) -> Self {
        if order_id != 0 {
            self.order_id = order_id;
        }
        self
    }

    /// Sets the externally assigned permanent ID.
    #[must_use]
    pub fn with_perm_id(mut self, perm_id: i32) -> Self {
        self.perm_id = perm_id;
        self
    }

    /// Sets the owning client ID.
    #[must_use]
    pub fn with_client_id(mut self, client_id: i32) -> Self {
        self.client_id = client_id;
        self
    }

    /// Sets the time-in-force.
    #[must_use]
    pub fn with_tif(mut self, tif: TimeInForce) -> Self {
        self.tif = tif;
        self
    }

    /// Sets the good-till-date qualifier.
    #[must_use]
    pub fn with_good_till_date(mut self, good_till_date: impl Into<String>) -> Self {
        self.good_till_date = good_till_date.into();
        self
    }

    /// Sets the good-after-time qualifier.
    #[must_use]
    pub fn with_good_after_time(mut self, good_after_time: impl Into<String>) -> Self {
        self.good_after_time = good_after_time.into();
        self
    }

    /// Sets the one-cancels-all group.
    #[must_use]
    pub fn with_oca_group(mut self, oca_group: impl Into<String>) -> Self {
        self.oca_group = oca_group.into();
        self
    }

    /// Sets the caller's free-form order reference.
    #[must_use]
    pub fn with_order_ref(mut self, order_ref: impl Into<String>) -> Self {
        self.order_ref = order_ref.into();
        self
    }

    /// Sets whether the order routes immediately or is held for its parent.
    #[must_use]
    pub fn with_transmit(mut self, transmit: bool) -> Self {
        self.transmit = transmit;
        self
    }

    /// Process-unique order ID, assigned once at construction.
    #[must_use]
    pub fn order_id(&self) -> i32 {
        self.order_id
    }

    /// Externally assigned permanent ID.
    #[must_use]
    pub fn perm_id(&self) -> i32 {
        self.perm_id
    }

    /// Owning client ID.
    #[must_use]
    pub fn client_id(&self) -> i32 {
        self.client_id
    }

    /// Order side.
    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Ordered quantity, strictly positive.
    #[must_use]
    pub fn total_quantity(&self) -> Decimal {
        self.total_quantity
    }

    /// Limit price, stop level, or [`UNSET_PRICE`], depending on the variant.
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Time-in-force.
    #[must_use]
    pub fn tif(&self) -> TimeInForce {
        self.tif
    }

    /// Good-till-date qualifier; empty when not used.
    #[must_use]
    pub fn good_till_date(&self) -> &str {
        &self.good_till_date
    }

    /// Good-after-time qualifier; empty when not used.
    #[must_use]
    pub fn good_after_time(&self) -> &str {
        &self.good_after_time
    }

    /// One-cancels-all group; empty when not used.
    #[must_use]
    pub fn oca_group(&self) -> &str {
        &self.oca_group
    }

    /// Caller's free-form order reference.
    #[must_use]
    pub fn order_ref(&self) -> &str {
        &self.order_ref
    }

    /// Parent order ID, or [`UNSET_INT`] for a root order.
    #[must_use]
    pub fn parent_id(&self) -> i32 {
        self.parent_id
    }

    /// Returns true when this order has a bracket parent.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent_id != UNSET_INT
    }

    /// Whether to route immediately or hold for the parent.
    #[must_use]
    pub fn transmit(&self) -> bool {
        self.transmit
    }

    /// Arena indices of bracket children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// The variant payload.
    #[must_use]
    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }

    /// Canonical order-type token (`MKT`, `LMT`, `STP`, `STP LMT`, `TRAIL`,
    /// `TRAIL LIMIT`).
    #[must_use]
    pub fn order_type(&self) -> &'static str {
        self.kind.token()
    }

    /// Trigger state of a stop-family order.
    #[must_use]
    pub fn stop_state(&self) -> Option<&StopState> {
        match &self.kind {
            OrderKind::Stop { state }
            | OrderKind::StopLimit { state, .. }
            | OrderKind::TrailingStopMarket { state, .. }
            | OrderKind::TrailingStopLimit { state, .. } => Some(state),
            OrderKind::Market | OrderKind::Limit => None,
        }
    }

    /// Mutable trigger state of a stop-family order. Engine-written.
    pub fn stop_state_mut(&mut self) -> Option<&mut StopState> {
        match &mut self.kind {
            OrderKind::Stop { state }
            | OrderKind::StopLimit { state, .. }
            | OrderKind::TrailingStopMarket { state, .. }
            | OrderKind::TrailingStopLimit { state, .. } => Some(state),
            OrderKind::Market | OrderKind::Limit => None,
        }
    }

    /// Trail configuration and tracking state of a trailing order.
    #[must_use]
    pub fn trailing(&self) -> Option<&Trailing> {
        match &self.kind {
            OrderKind::TrailingStopMarket { trailing, .. }
            | OrderKind::TrailingStopLimit { trailing, .. } => Some(trailing),
            _ => None,
        }
    }

    /// Mutable trail state of a trailing order. Engine-written.
    pub fn trailing_mut(&mut self) -> Option<&mut Trailing> {
        match &mut self.kind {
            OrderKind::TrailingStopMarket { trailing, .. }
            | OrderKind::TrailingStopLimit { trailing, .. } => Some(trailing),
            _ => None,
        }
    }

    /// Limit price of a stop-limit order.
    #[must_use]
    pub fn limit_price(&self) -> Option<Decimal> {
        match &self.kind {
            OrderKind::StopLimit { limit_price, .. } => Some(*limit_price),
            _ => None,
        }
    }

    /// Stop-to-limit offset of a trailing stop limit order.
    #[must_use]
    pub fn limit_offset(&self) -> Option<Decimal> {
        match &self.kind {
            OrderKind::TrailingStopLimit { limit_offset, .. } => Some(*limit_offset),
            _ => None,
        }
    }

    pub(crate) fn set_parent_id(&mut self, parent_id: i32) {
        self.parent_id = parent_id;
    }

    pub(crate) fn push_child(&mut self, child: usize) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_market_order() {
        let order = Order::market(Action::Sell, dec!(50)).unwrap();
        assert!(order.order_id() > 0);
        assert_eq!(order.action(), Action::Sell);
        assert_eq!(order.total_quantity(), dec!(50));
        assert_eq!(order.order_type(), "MKT");
        assert_eq!(order.price(), UNSET_PRICE);
        assert!(order.stop_state().is_none());
        assert!(order.children().is_empty());
        assert!(order.transmit());
    }

    #[test]
    fn test_limit_order() {
        let order = Order::limit(Action::Buy, dec!(100), dec!(150.25)).unwrap();
        assert!(order.order_id() > 0);
        assert_eq!(order.order_type(), "LMT");
        assert_eq!(order.price(), dec!(150.25));
        assert_eq!(order.parent_id(), UNSET_INT);
        assert!(!order.has_parent());
    }

    #[test]
    fn test_limit_order_accepts_unset_price() {
        let order = Order::limit(Action::Buy, dec!(100), UNSET_PRICE).unwrap();
        assert_eq!(order.price(), UNSET_PRICE);
    }

    #[test]
    fn test_stop_order_carries_level_in_price() {
        let order = Order::stop(Action::Sell, dec!(100), dec!(145.00)).unwrap();
        assert_eq!(order.order_type(), "STP");
        assert_eq!(order.price(), dec!(145.00));
        let state = order.stop_state().unwrap();
        assert!(!state.triggered);
        assert_eq!(state.trigger_price, None);
    }

    #[test]
    fn test_stop_limit_order() {
        let order = Order::stop_limit(Action::Buy, dec!(100), dec!(150.50), dec!(150.00)).unwrap();
        assert_eq!(order.order_type(), "STP LMT");
        assert_eq!(order.price(), dec!(150.00));
        assert_eq!(order.limit_price(), Some(dec!(150.50)));
        assert!(!order.stop_state().unwrap().triggered);
    }

    #[test]
    fn test_quantity_must_be_strictly_positive() {
        for qty in [dec!(0), dec!(-10)] {
            let err = Order::market(Action::Buy, qty).unwrap_err();
            match err {
                ModelError::InvalidField { field, .. } => assert_eq!(field, "total_quantity"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert!(Order::limit(Action::Buy, dec!(0), dec!(1)).is_err());
        assert!(Order::stop(Action::Buy, dec!(-1), dec!(1)).is_err());
    }

    #[test]
    fn test_order_ids_increase() {
        let a = Order::market(Action::Buy, dec!(1)).unwrap();
        let b = Order::limit(Action::Sell, dec!(2), dec!(10)).unwrap();
        let c = Order::stop(Action::Buy, dec!(3), dec!(9)).unwrap();
        assert!(a.order_id() > 0);
        assert!(b.order_id() > a.order_id());
        assert!(c.order_id() > b.order_id());
    }

    #[test]
    fn test_explicit_order_id_wins_over_auto() {
        let order = Order::market(Action::Buy, dec!(1)).unwrap().with_order_id(9_000_000);
        assert_eq!(order.order_id(), 9_000_000);

        let order = Order::market(Action::Buy, dec!(1)).unwrap().with_order_id(0);
        assert!(order.order_id() > 0);
        assert_ne!(order.order_id(), 0);
    }

    #[test]
    fn test_routing_builders() {
        let order = Order::limit(Action::Buy, dec!(10), dec!(99.5))
            .unwrap()
            .with_perm_id(77)
            .with_client_id(3)
            .with_tif(TimeInForce::Gtc)
            .with_good_till_date("20240630 16:00:00")
            .with_good_after_time("20240115 09:30:00")
            .with_oca_group("bracket-1")
            .with_order_ref("strat-7")
            .with_transmit(false);

        assert_eq!(order.perm_id(), 77);
        assert_eq!(order.client_id(), 3);
        assert_eq!(order.tif(), TimeInForce::Gtc);
        assert_eq!(order.good_till_date(), "20240630 16:00:00");
        assert_eq!(order.good_after_time(), "20240115 09:30:00");
        assert_eq!(order.oca_group(), "bracket-1");
        assert_eq!(order.order_ref(), "strat-7");
        assert!(!order.transmit());
    }

    #[test]
    fn test_trailing_stop_market_requires_one_parameter() {
        assert!(Order::trailing_stop_market(Action::Buy, dec!(100), None, None).is_err());
        assert!(
            Order::trailing_stop_market(Action::Buy, dec!(100), Some(dec!(2.0)), Some(dec!(2.5)))
                .is_err()
        );

        let by_distance =
            Order::trailing_stop_market(Action::Buy, dec!(100), Some(dec!(2.0)), None).unwrap();
        assert_eq!(by_distance.order_type(), "TRAIL");
        assert_eq!(by_distance.trailing().unwrap().distance(), Some(dec!(2.0)));
        assert_eq!(by_distance.trailing().unwrap().percent(), None);

        let by_percent =
            Order::trailing_stop_market(Action::Sell, dec!(50), None, Some(dec!(2.5))).unwrap();
        assert_eq!(by_percent.trailing().unwrap().distance(), None);
        assert_eq!(by_percent.trailing().unwrap().percent(), Some(dec!(2.5)));
    }

    #[test]
    fn test_trailing_stop_market_state_starts_unset() {
        let order =
            Order::trailing_stop_market(Action::Buy, dec!(100), Some(dec!(2.0)), None).unwrap();
        let trailing = order.trailing().unwrap();
        assert_eq!(trailing.stop_price, None);
        assert_eq!(trailing.extreme_price, None);
        assert!(!order.stop_state().unwrap().triggered);
    }

    #[test]
    fn test_trailing_stop_limit() {
        let order = Order::trailing_stop_limit(
            Action::Buy,
            dec!(100),
            dec!(0.50),
            Some(dec!(2.00)),
            None,
        )
        .unwrap();
        assert_eq!(order.order_type(), "TRAIL LIMIT");
        assert_eq!(order.limit_offset(), Some(dec!(0.50)));
        assert_eq!(order.trailing().unwrap().distance(), Some(dec!(2.00)));

        assert!(
            Order::trailing_stop_limit(Action::Buy, dec!(100), dec!(0.50), None, None).is_err()
        );
        assert!(
            Order::trailing_stop_limit(
                Action::Buy,
                dec!(100),
                dec!(0.50),
                Some(dec!(2.0)),
                Some(dec!(2.5))
            )
            .is_err()
        );
    }

    #[test]
    fn test_trailing_stop_limit_rejects_negative_offset() {
        let err = Order::trailing_stop_limit(
            Action::Buy,
            dec!(100),
            dec!(-0.25),
            Some(dec!(2.0)),
            None,
        )
        .unwrap_err();
        match err {
            ModelError::InvalidField { field, .. } => assert_eq!(field, "limit_offset"),
            other => panic!("unexpected error: {other:?}"),
        }

        // zero offset is allowed
        assert!(
            Order::trailing_stop_limit(Action::Buy, dec!(100), dec!(0), Some(dec!(2.0)), None)
                .is_ok()
        );
    }

    #[test]
    fn test_execution_time_mutation() {
        let mut order = Order::stop(Action::Sell, dec!(100), dec!(145.00)).unwrap();
        let state = order.stop_state_mut().unwrap();
        state.triggered = true;
        state.trigger_price = Some(dec!(144.97));
        assert!(order.stop_state().unwrap().triggered);
        assert_eq!(order.stop_state().unwrap().trigger_price, Some(dec!(144.97)));

        let mut order =
            Order::trailing_stop_market(Action::Sell, dec!(50), Some(dec!(1.50)), None).unwrap();
        let trailing = order.trailing_mut().unwrap();
        trailing.extreme_price = Some(dec!(100.00));
        trailing.stop_price = Some(dec!(98.50));
        assert_eq!(order.trailing().unwrap().extreme_price, Some(dec!(100.00)));
        assert_eq!(order.trailing().unwrap().stop_price, Some(dec!(98.50)));
    }

    #[test]
    fn test_trailing_state_is_per_instance() {
        let mut order1 =
            Order::trailing_stop_market(Action::Buy, dec!(100), Some(dec!(1.00)), None).unwrap();
        let order2 =
            Order::trailing_stop_market(Action::Buy, dec!(100), Some(dec!(2.00)), None).unwrap();

        let trailing = order1.trailing_mut().unwrap();
        trailing.stop_price = Some(dec!(100.00));
        trailing.extreme_price = Some(dec!(101.00));

        assert_eq!(order2.trailing().unwrap().stop_price, None);
        assert_eq!(order2.trailing().unwrap().extreme_price, None);
        assert_eq!(order2.trailing().unwrap().distance(), Some(dec!(2.00)));
    }

    #[test]
    fn test_non_trailing_orders_have_no_trail_state() {
        let mut order = Order::limit(Action::Buy, dec!(10), dec!(100)).unwrap();
        assert!(order.trailing().is_none());
        assert!(order.trailing_mut().is_none());
        assert!(order.limit_offset().is_none());
        assert!(order.limit_price().is_none());
    }

    #[test]
    fn test_action_and_tif_tokens() {
        assert_eq!(Action::Buy.to_string(), "BUY");
        assert_eq!(Action::Sell.to_string(), "SELL");
        assert_eq!(TimeInForce::default(), TimeInForce::Day);
        assert_eq!(TimeInForce::Gtc.to_string(), "GTC");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization_round_trip() {
        let order = Order::stop_limit(Action::Buy, dec!(100), dec!(150.50), dec!(150.00)).unwrap();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
