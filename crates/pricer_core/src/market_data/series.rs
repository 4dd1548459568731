//! Price and return series.
//!
//! Both series types validate their observations once at construction and
//! are immutable afterwards. An optional `chrono::NaiveDate` index travels
//! with the values so that multi-asset combinations can refuse misaligned
//! inputs instead of silently reindexing them.

use chrono::NaiveDate;

use super::error::MarketDataError;

/// Validates an optional date index against the number of values.
fn validate_index(dates: &[NaiveDate], n_values: usize) -> Result<(), MarketDataError> {
    if dates.len() != n_values {
        return Err(MarketDataError::IndexLengthMismatch {
            dates: dates.len(),
            values: n_values,
        });
    }
    if let Some(position) = dates.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(MarketDataError::UnorderedIndex {
            position: position + 1,
        });
    }
    Ok(())
}

fn validate_finite(values: &[f64]) -> Result<(), MarketDataError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MarketDataError::NonFiniteValue {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Ordered closing prices for a single asset.
///
/// Prices must be finite and strictly positive.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::PriceSeries;
///
/// let prices = PriceSeries::new(vec![150.0, 151.5, 149.0]).unwrap();
/// assert_eq!(prices.len(), 3);
/// assert_eq!(prices.last(), 149.0);
///
/// assert!(PriceSeries::new(vec![150.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceSeries {
    dates: Option<Vec<NaiveDate>>,
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Creates an un-dated price series.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::EmptySeries` if `prices` is empty
    /// - `MarketDataError::NonFiniteValue` for NaN/Inf prices
    /// - `MarketDataError::NonPositivePrice` for prices <= 0
    pub fn new(prices: Vec<f64>) -> Result<Self, MarketDataError> {
        Self::validate_prices(&prices)?;
        Ok(Self {
            dates: None,
            prices,
        })
    }

    /// Creates a price series indexed by strictly increasing dates.
    ///
    /// # Errors
    ///
    /// As [`PriceSeries::new`], plus index length and ordering errors.
    pub fn with_dates(dates: Vec<NaiveDate>, prices: Vec<f64>) -> Result<Self, MarketDataError> {
        Self::validate_prices(&prices)?;
        validate_index(&dates, prices.len())?;
        Ok(Self {
            dates: Some(dates),
            prices,
        })
    }

    fn validate_prices(prices: &[f64]) -> Result<(), MarketDataError> {
        if prices.is_empty() {
            return Err(MarketDataError::EmptySeries);
        }
        validate_finite(prices)?;
        if let Some(index) = prices.iter().position(|&p| p <= 0.0) {
            return Err(MarketDataError::NonPositivePrice {
                index,
                price: prices[index],
            });
        }
        Ok(())
    }

    /// Returns the number of prices.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false; empty price series cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the prices in time order.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Returns the date index, if any.
    #[inline]
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Returns the most recent price.
    #[inline]
    pub fn last(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }
}

/// Ordered periodic fractional returns (e.g. daily simple returns).
///
/// Invariants: non-empty, all values finite, optional date index of equal
/// length and strictly increasing.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::ReturnSeries;
///
/// let returns = ReturnSeries::new(vec![0.01, -0.02, 0.005]).unwrap();
/// assert_eq!(returns.len(), 3);
/// assert!(returns.dates().is_none());
///
/// assert!(ReturnSeries::new(vec![]).is_err());
/// assert!(ReturnSeries::new(vec![0.01, f64::NAN]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReturnSeries {
    dates: Option<Vec<NaiveDate>>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Creates an un-dated return series.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::EmptySeries` if `values` is empty
    /// - `MarketDataError::NonFiniteValue` for NaN/Inf returns
    pub fn new(values: Vec<f64>) -> Result<Self, MarketDataError> {
        Self::validate_values(&values)?;
        Ok(Self {
            dates: None,
            values,
        })
    }

    /// Creates a return series indexed by strictly increasing dates.
    ///
    /// # Errors
    ///
    /// As [`ReturnSeries::new`], plus index length and ordering errors.
    pub fn with_dates(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self, MarketDataError> {
        Self::validate_values(&values)?;
        validate_index(&dates, values.len())?;
        Ok(Self {
            dates: Some(dates),
            values,
        })
    }

    /// Derives simple returns `p[i] / p[i-1] - 1` from consecutive prices.
    ///
    /// The resulting series is one observation shorter than the prices and,
    /// when the prices are dated, is indexed by the later date of each pair.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InsufficientData` if fewer than two prices are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::market_data::{PriceSeries, ReturnSeries};
    ///
    /// let prices = PriceSeries::new(vec![100.0, 110.0, 99.0]).unwrap();
    /// let returns = ReturnSeries::from_prices(&prices).unwrap();
    ///
    /// assert!((returns.values()[0] - 0.10).abs() < 1e-12);
    /// assert!((returns.values()[1] + 0.10).abs() < 1e-12);
    /// ```
    pub fn from_prices(prices: &PriceSeries) -> Result<Self, MarketDataError> {
        if prices.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: prices.len(),
                need: 2,
            });
        }

        let values: Vec<f64> = prices
            .prices()
            .windows(2)
            .map(|pair| pair[1] / pair[0] - 1.0)
            .collect();

        match prices.dates() {
            Some(dates) => Self::with_dates(dates[1..].to_vec(), values),
            None => Self::new(values),
        }
    }

    fn validate_values(values: &[f64]) -> Result<(), MarketDataError> {
        if values.is_empty() {
            return Err(MarketDataError::EmptySeries);
        }
        validate_finite(values)
    }

    /// Returns the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; empty return series cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the observations in time order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the date index, if any.
    #[inline]
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Returns true when both series share the same length and date index.
    ///
    /// Two un-dated series of equal length are considered aligned; a dated
    /// and an un-dated series never are.
    pub fn is_aligned_with(&self, other: &ReturnSeries) -> bool {
        self.values.len() == other.values.len() && self.dates == other.dates
    }
}
