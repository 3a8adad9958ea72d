//! Trailing-stop parameters and execution-time tracking state.

use crate::Decimal;
use crate::types::{ModelError, ModelResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trail configuration and tracking state of a trailing stop order.
///
/// The trail is defined by exactly one of an absolute price `distance` or a
/// `percent` of the extreme price. Supplying both or neither fails
/// construction, and because the pair can only be replaced through
/// [`Trailing::set_params`], the same check runs on every mutation — no
/// intermediate invalid state is observable.
///
/// `stop_price` and `extreme_price` are execution-time state written by the
/// routing engine as market data arrives. Both start unset. The model stores
/// them without relating one to the other; re-deriving `stop_price` from
/// `extreme_price` and the trail is the engine's job.
///
/// # Example
///
/// ```rust
/// use trading_models_rs::dec;
/// use trading_models_rs::orders::Trailing;
///
/// let mut trail = Trailing::new(Some(dec!(2.0)), None).unwrap();
/// assert_eq!(trail.distance(), Some(dec!(2.0)));
/// assert_eq!(trail.percent(), None);
///
/// // the engine tracks the market
/// trail.extreme_price = Some(dec!(100.0));
/// trail.stop_price = Some(dec!(98.0));
///
/// // both-set is rejected, at construction and on mutation
/// assert!(Trailing::new(Some(dec!(2.0)), Some(dec!(1.0))).is_err());
/// assert!(trail.set_params(None, None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trailing {
    distance: Option<Decimal>,
    percent: Option<Decimal>,
    /// Current stop trigger level. Engine-written.
    pub stop_price: Option<Decimal>,
    /// Best price seen so far. Engine-written.
    pub extreme_price: Option<Decimal>,
}

impl Trailing {
    /// Creates trail parameters from the distance/percent pair.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidTrailing`] unless exactly one of
    /// `distance`/`percent` is `Some`.
    pub fn new(distance: Option<Decimal>, percent: Option<Decimal>) -> ModelResult<Self> {
        Self::check(distance, percent)?;
        Ok(Self {
            distance,
            percent,
            stop_price: None,
            extreme_price: None,
        })
    }

    /// Trail by an absolute price distance.
    #[must_use]
    pub fn by_distance(distance: Decimal) -> Self {
        Self {
            distance: Some(distance),
            percent: None,
            stop_price: None,
            extreme_price: None,
        }
    }

    /// Trail by a percentage of the extreme price.
    #[must_use]
    pub fn by_percent(percent: Decimal) -> Self {
        Self {
            distance: None,
            percent: Some(percent),
            stop_price: None,
            extreme_price: None,
        }
    }

    /// Absolute trail distance, if that mode is selected.
    #[must_use]
    pub fn distance(&self) -> Option<Decimal> {
        self.distance
    }

    /// Percentage trail, if that mode is selected.
    #[must_use]
    pub fn percent(&self) -> Option<Decimal> {
        self.percent
    }

    /// Replaces the distance/percent pair.
    ///
    /// Both fields are taken together and validated as a whole before either
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidTrailing`] unless exactly one of
    /// `distance`/`percent` is `Some`; the stored pair is left untouched on
    /// failure.
    pub fn set_params(
        &mut self,
        distance: Option<Decimal>,
        percent: Option<Decimal>,
    ) -> ModelResult<()> {
        Self::check(distance, percent)?;
        self.distance = distance;
        self.percent = percent;
        Ok(())
    }

    fn check(distance: Option<Decimal>, percent: Option<Decimal>) -> ModelResult<()> {
        match (distance, percent) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (Some(_), Some(_)) => Err(ModelError::InvalidTrailing(
                "exactly one of distance or percent must be set, got both".to_string(),
            )),
            (None, None) => Err(ModelError::InvalidTrailing(
                "exactly one of distance or percent must be set, got neither".to_string(),
            )),
        }
    }
}
