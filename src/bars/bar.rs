//! Validated OHLCV bars.

use chrono::{DateTime, Utc};

use crate::Decimal;
use crate::types::{ModelError, ModelResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One OHLCV bar from a market-data feed.
///
/// Construction is the only interface: [`BarData::new`] either returns a bar
/// whose OHLC relationships all hold, or fails naming the violated
/// relationship and the offending values. The check runs once over the
/// fully-populated bar — it is cross-field, so per-field validation cannot
/// express it. There is no partially-valid bar; a rejected bar is the feed's
/// problem to handle, and no corrected bar is produced here.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use trading_models_rs::bars::BarData;
/// use trading_models_rs::dec;
///
/// let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
/// let bar = BarData::new(date, dec!(10), dec!(12), dec!(9), dec!(11), 1_000).unwrap();
/// assert_eq!(bar.high(), dec!(12));
///
/// // low above open is rejected
/// assert!(BarData::new(date, dec!(10), dec!(12), dec!(11), dec!(11), 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarData {
    date: DateTime<Utc>,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: u64,
}

impl BarData {
    /// Validates OHLC consistency and constructs the bar.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidBar`] when any of `high >= low`,
    /// `high >= open`, `high >= close`, `low <= open`, `low <= close` fails.
    pub fn new(
        date: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> ModelResult<Self> {
        if high < low {
            return Err(ModelError::InvalidBar(format!(
                "high ({}) must be >= low ({})",
                high, low
            )));
        }
        if high < open {
            return Err(ModelError::InvalidBar(format!(
                "high ({}) must be >= open ({})",
                high, open
            )));
        }
        if high < close {
            return Err(ModelError::InvalidBar(format!(
                "high ({}) must be >= close ({})",
                high, close
            )));
        }
        if low > open {
            return Err(ModelError::InvalidBar(format!(
                "low ({}) must be <= open ({})",
                low, open
            )));
        }
        if low > close {
            return Err(ModelError::InvalidBar(format!(
                "low ({}) must be <= close ({})",
                low, close
            )));
        }
        Ok(Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Bar timestamp.
    #[must_use]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Opening price.
    #[must_use]
    pub fn open(&self) -> Decimal {
        self.open
    }

    /// Highest traded price.
    #[must_use]
    pub fn high(&self) -> Decimal {
        self.high
    }

    /// Lowest traded price.
    #[must_use]
    pub fn low(&self) -> Decimal {
        self.low
    }

    /// Closing price.
    #[must_use]
    pub fn close(&self) -> Decimal {
        self.close
    }

    /// Traded volume.
    #[must_use]
    pub fn volume(&self) -> u64 {
        self.volume
    }
}
