//! Order-ID assignment.

use std::sync::atomic::{AtomicI32, Ordering};

/// Monotonic order-ID source, starting at 1.
///
/// IDs are unique within one running process; the counter is never persisted
/// or reset, so numbering restarts with the process. Callers needing
/// cross-restart uniqueness must map IDs externally (typically to the
/// broker's permanent ID).
///
/// The order constructors draw from a process-wide instance via
/// [`next_order_id`]; pass a generator of your own where explicit control
/// over the ID stream is wanted.
///
/// # Example
///
/// ```rust
/// use trading_models_rs::orders::OrderIdGenerator;
///
/// let ids = OrderIdGenerator::new();
/// assert_eq!(ids.next_id(), 1);
/// assert_eq!(ids.next_id(), 2);
/// ```
#[derive(Debug)]
pub struct OrderIdGenerator {
    next: AtomicI32,
}

impl OrderIdGenerator {
    /// Creates a generator whose first ID is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicI32::new(1),
        }
    }

    /// Returns the next ID and advances the counter.
    ///
    /// The increment is atomic, so concurrent construction still yields
    /// unique, strictly increasing IDs.
    pub fn next_id(&self) -> i32 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide generator backing the order constructors. Initialized at
/// process start, never reset.
static PROCESS_IDS: OrderIdGenerator = OrderIdGenerator::new();

/// Draws the next process-wide order ID.
pub fn next_order_id() -> i32 {
    PROCESS_IDS.next_id()
}
