//! Flat order storage and bracket parent/child linkage.

use crate::types::{ModelError, ModelResult};

use super::order::Order;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat storage for orders with index-based bracket linkage.
///
/// Orders live in one flat collection and bracket relations are index pairs,
/// so a bracket never nests ownership. [`OrderArena::add_child`] writes the
/// child's `parent_id` back-reference (overwrite — the last add wins) and
/// appends the child's index to the parent's children (append-only — repeated
/// calls append again). No cycle check is performed; the caller must not link
/// an order under one of its own descendants.
///
/// # Example
///
/// ```rust
/// use trading_models_rs::dec;
/// use trading_models_rs::orders::{Action, Order, OrderArena};
///
/// let mut arena = OrderArena::new();
/// let parent = arena.insert(Order::limit(Action::Buy, dec!(100), dec!(150.00)).unwrap());
/// let take_profit = arena.insert(Order::limit(Action::Sell, dec!(100), dec!(155.00)).unwrap());
/// let stop_loss = arena.insert(Order::stop(Action::Sell, dec!(100), dec!(145.00)).unwrap());
///
/// arena.add_child(parent, take_profit).unwrap();
/// arena.add_child(parent, stop_loss).unwrap();
///
/// let parent_id = arena.get(parent).unwrap().order_id();
/// assert_eq!(arena.get(take_profit).unwrap().parent_id(), parent_id);
/// assert_eq!(arena.get(parent).unwrap().children(), &[take_profit, stop_loss]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderArena {
    orders: Vec<Order>,
}

impl OrderArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Stores an order and returns its index.
    pub fn insert(&mut self, order: Order) -> usize {
        self.orders.push(order);
        self.orders.len() - 1
    }

    /// Order at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Order> {
        self.orders.get(index)
    }

    /// Mutable order at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Order> {
        self.orders.get_mut(index)
    }

    /// Number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true when no orders are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates over stored orders in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Links `child` under `parent`.
    ///
    /// Sets the child's `parent_id` to the parent's order ID, overwriting any
    /// previous parent, and appends `child` to the parent's children. Calling
    /// twice with the same pair leaves `parent_id` unchanged but appends a
    /// duplicate child entry.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownOrder`] if either index is not stored;
    /// nothing is written in that case.
    pub fn add_child(&mut self, parent: usize, child: usize) -> ModelResult<()> {
        let parent_id = self
            .orders
            .get(parent)
            .ok_or(ModelError::UnknownOrder(parent))?
            .order_id();
        self.orders
            .get_mut(child)
            .ok_or(ModelError::UnknownOrder(child))?
            .set_parent_id(parent_id);
        self.orders[parent].push_child(child);
        Ok(())
    }
}
