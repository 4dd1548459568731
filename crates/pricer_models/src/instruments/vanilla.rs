//! European option contract terms.
//!
//! An [`OptionContract`] bundles the five Black-Scholes inputs with the
//! option variant. It is validated once at construction and never mutated;
//! every derived quantity (d1, d2, price, Greeks) is a pure function of it.

use num_traits::Float;

use super::error::ContractError;
use super::payoff::OptionType;

/// Relative tolerance under which spot and strike count as at-the-money.
const ATM_TOLERANCE: f64 = 1e-8;

/// Relation of spot to strike from the holder's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Moneyness {
    /// Positive intrinsic value
    InTheMoney,
    /// Spot equals strike (within tolerance)
    AtTheMoney,
    /// Zero intrinsic value and spot away from strike
    OutOfTheMoney,
}

/// Terms of a European option.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (defaults to `f64`)
///
/// # Domain
/// - spot S > 0, strike K > 0
/// - expiry T >= 0 (years)
/// - volatility σ >= 0 (annualised)
/// - rate r any finite value (continuously compounded)
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Moneyness, OptionContract, OptionType};
///
/// let call = OptionContract::new(110.0, 100.0, 0.5, 0.03, 0.2, OptionType::Call).unwrap();
/// assert_eq!(call.intrinsic_value(), 10.0);
/// assert_eq!(call.moneyness(), Moneyness::InTheMoney);
///
/// // Invalid terms are rejected, not clamped
/// assert!(OptionContract::new(110.0, 100.0, -0.5, 0.03, 0.2, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionContract<T: Float = f64> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
}

impl<T: Float> OptionContract<T> {
    /// Creates a validated option contract.
    ///
    /// # Errors
    /// - `ContractError::InvalidSpot` if spot <= 0 or non-finite
    /// - `ContractError::InvalidStrike` if strike <= 0 or non-finite
    /// - `ContractError::InvalidExpiry` if expiry < 0 or non-finite
    /// - `ContractError::InvalidRate` if rate is non-finite
    /// - `ContractError::InvalidVolatility` if volatility < 0 or non-finite
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, ContractError> {
        let zero = T::zero();
        let as_f64 = |x: T| x.to_f64().unwrap_or(f64::NAN);

        if !spot.is_finite() || spot <= zero {
            return Err(ContractError::InvalidSpot { spot: as_f64(spot) });
        }
        if !strike.is_finite() || strike <= zero {
            return Err(ContractError::InvalidStrike {
                strike: as_f64(strike),
            });
        }
        if !expiry.is_finite() || expiry < zero {
            return Err(ContractError::InvalidExpiry {
                expiry: as_f64(expiry),
            });
        }
        if !rate.is_finite() {
            return Err(ContractError::InvalidRate { rate: as_f64(rate) });
        }
        if !volatility.is_finite() || volatility < zero {
            return Err(ContractError::InvalidVolatility {
                volatility: as_f64(volatility),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        })
    }

    /// Creates a call with the given terms.
    pub fn call(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Result<Self, ContractError> {
        Self::new(spot, strike, expiry, rate, volatility, OptionType::Call)
    }

    /// Creates a put with the given terms.
    pub fn put(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> Result<Self, ContractError> {
        Self::new(spot, strike, expiry, rate, volatility, OptionType::Put)
    }

    /// Returns the same terms with a different variant.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years (T).
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the option variant.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.expiry).exp()
    }

    /// Returns the immediate exercise value.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Classifies the contract as in-, at- or out-of-the-money.
    pub fn moneyness(&self) -> Moneyness {
        let tolerance = T::from(ATM_TOLERANCE).unwrap() * self.strike;
        if (self.spot - self.strike).abs() <= tolerance {
            Moneyness::AtTheMoney
        } else if self.intrinsic_value() > T::zero() {
            Moneyness::InTheMoney
        } else {
            Moneyness::OutOfTheMoney
        }
    }
}
