//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! - **T = 0**: price is the intrinsic value and every Greek is zero.
//! - **σ = 0, T > 0**: the terminal spot is deterministic. The option is
//!   valued against the discounted strike D = K·e^(-rT) and only theta
//!   and rho carry the rate sensitivity of the in-the-money leg.
//!
//! ## Units
//!
//! Theta is per year, vega per 1.00 of volatility, rho per 1.00 of rate.
//! Use [`Greeks::theta_per_day`] and [`Greeks::vega_per_vol_point`] for
//! desk conventions.

use std::ops::Add;

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use crate::instruments::{ContractError, OptionContract, OptionType};

/// Price and first-order sensitivities of an option position.
///
/// # Examples
/// ```
/// use pricer_models::analytical::greeks;
/// use pricer_models::instruments::OptionContract;
///
/// let call: OptionContract<f64> = OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let g = greeks(&call);
/// assert!(g.delta > 0.6 && g.delta < 0.65);
/// assert!(g.theta < 0.0);
/// assert!((g.vega_per_vol_point() * 100.0 - g.vega).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks<T: Float = f64> {
    /// Option value
    pub price: T,
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂t, per year
    pub theta: T,
    /// ∂V/∂σ, per 1.00 of volatility
    pub vega: T,
    /// ∂V/∂r, per 1.00 of rate
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// All-zero Greeks.
    pub fn zero() -> Self {
        let zero = T::zero();
        Self {
            price: zero,
            delta: zero,
            gamma: zero,
            theta: zero,
            vega: zero,
            rho: zero,
        }
    }

    /// Theta per calendar day (365-day year).
    #[inline]
    pub fn theta_per_day(&self) -> T {
        self.theta / T::from(365.0).unwrap()
    }

    /// Vega per one volatility point (0.01).
    #[inline]
    pub fn vega_per_vol_point(&self) -> T {
        self.vega / T::from(100.0).unwrap()
    }

    /// Multiplies every field by `factor` (e.g. a signed position size).
    pub fn scale(&self, factor: T) -> Self {
        Self {
            price: self.price * factor,
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            theta: self.theta * factor,
            vega: self.vega * factor,
            rho: self.rho * factor,
        }
    }

    /// Returns true if every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.price, self.delta, self.gamma, self.theta, self.vega, self.rho,
        ]
        .iter()
        .all(|x| x.is_finite())
    }
}

impl<T: Float> Add for Greeks<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            price: self.price + rhs.price,
            delta: self.delta + rhs.delta,
            gamma: self.gamma + rhs.gamma,
            theta: self.theta + rhs.theta,
            vega: self.vega + rhs.vega,
            rho: self.rho + rhs.rho,
        }
    }
}

/// Evaluation regime selected once per call.
enum Regime<T> {
    /// T = 0
    Expired,
    /// σ√T = 0 with T > 0; carries the discounted strike
    Deterministic { discounted_strike: T },
    /// Regular lognormal case
    Diffusive {
        d1: T,
        d2: T,
        sqrt_t: T,
        discounted_strike: T,
    },
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); contract terms
/// (strike, expiry, variant) are passed per call so one model can price
/// a whole strip.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call);
/// let put = bs.price(100.0, 1.0, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `ContractError::InvalidSpot` if spot <= 0 or non-finite
    /// - `ContractError::InvalidRate` if rate is non-finite
    /// - `ContractError::InvalidVolatility` if volatility < 0 or non-finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, -0.2).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ContractError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(ContractError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !rate.is_finite() {
            return Err(ContractError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !volatility.is_finite() || volatility < zero {
            return Err(ContractError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from the market state of a validated contract.
    pub fn from_contract(contract: &OptionContract<T>) -> Self {
        Self {
            spot: contract.spot(),
            rate: contract.rate(),
            volatility: contract.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// Returns `None` when σ√T = 0, where d1 is undefined.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> Option<T> {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        if vol_sqrt_t <= T::zero() {
            return None;
        }
        let half = T::from(0.5).unwrap();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        Some(((self.spot / strike).ln() + drift) / vol_sqrt_t)
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> Option<T> {
        self.d1(strike, expiry)
            .map(|d1| d1 - self.volatility * expiry.sqrt())
    }

    fn regime(&self, strike: T, expiry: T) -> Regime<T> {
        if expiry <= T::zero() {
            return Regime::Expired;
        }
        let discounted_strike = strike * (-self.rate * expiry).exp();
        let sqrt_t = expiry.sqrt();
        match self.d1(strike, expiry) {
            None => Regime::Deterministic { discounted_strike },
            Some(d1) => Regime::Diffusive {
                d1,
                d2: d1 - self.volatility * sqrt_t,
                sqrt_t,
                discounted_strike,
            },
        }
    }

    /// Prices a European option.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiry in years (T)
    /// * `option_type` - Call or put
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let zero = T::zero();
        match self.regime(strike, expiry) {
            Regime::Expired => option_type.intrinsic(self.spot, strike),
            Regime::Deterministic { discounted_strike } => {
                option_type.intrinsic(self.spot, discounted_strike)
            }
            Regime::Diffusive {
                d1,
                d2,
                discounted_strike,
                ..
            } => {
                let value = match option_type {
                    OptionType::Call => {
                        self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2)
                    }
                    OptionType::Put => {
                        discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
                    }
                };
                value.max(zero)
            }
        }
    }

    /// Prices a European call option.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.price(strike, expiry, OptionType::Call)
    }

    /// Prices a European put option.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.price(strike, expiry, OptionType::Put)
    }

    /// Delta: ∂V/∂S.
    ///
    /// Call: N(d₁), Put: N(d₁) - 1. Zero once expired.
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let one = T::one();
        let call_delta = match self.regime(strike, expiry) {
            Regime::Expired => return T::zero(),
            Regime::Deterministic { discounted_strike } => {
                step(self.spot - discounted_strike)
            }
            Regime::Diffusive { d1, .. } => norm_cdf(d1),
        };
        match option_type {
            OptionType::Call => call_delta,
            OptionType::Put => call_delta - one,
        }
    }

    /// Gamma: ∂²V/∂S², identical for calls and puts.
    ///
    /// Γ = φ(d₁) / (S·σ·√T)
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        match self.regime(strike, expiry) {
            Regime::Diffusive { d1, sqrt_t, .. } => {
                norm_pdf(d1) / (self.spot * self.volatility * sqrt_t)
            }
            _ => T::zero(),
        }
    }

    /// Vega: ∂V/∂σ, identical for calls and puts.
    ///
    /// ν = S·φ(d₁)·√T
    pub fn vega(&self, strike: T, expiry: T) -> T {
        match self.regime(strike, expiry) {
            Regime::Diffusive { d1, sqrt_t, .. } => self.spot * norm_pdf(d1) * sqrt_t,
            _ => T::zero(),
        }
    }

    /// Theta: ∂V/∂t (calendar time), per year.
    ///
    /// - Call: -S·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put: -S·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂)
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let zero = T::zero();
        match self.regime(strike, expiry) {
            Regime::Expired => zero,
            Regime::Deterministic { discounted_strike } => {
                let carry = self.rate * discounted_strike;
                match option_type {
                    OptionType::Call if self.spot > discounted_strike => -carry,
                    OptionType::Put if self.spot < discounted_strike => carry,
                    _ => zero,
                }
            }
            Regime::Diffusive {
                d1,
                d2,
                sqrt_t,
                discounted_strike,
            } => {
                let two = T::from(2.0).unwrap();
                let decay = -self.spot * norm_pdf(d1) * self.volatility / (two * sqrt_t);
                let carry = self.rate * discounted_strike;
                match option_type {
                    OptionType::Call => decay - carry * norm_cdf(d2),
                    OptionType::Put => decay + carry * norm_cdf(-d2),
                }
            }
        }
    }

    /// Rho: ∂V/∂r.
    ///
    /// - Call: K·T·e^(-rT)·N(d₂)
    /// - Put: -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        let zero = T::zero();
        match self.regime(strike, expiry) {
            Regime::Expired => zero,
            Regime::Deterministic { discounted_strike } => {
                let exposure = expiry * discounted_strike;
                match option_type {
                    OptionType::Call if self.spot > discounted_strike => exposure,
                    OptionType::Put if self.spot < discounted_strike => -exposure,
                    _ => zero,
                }
            }
            Regime::Diffusive {
                d2,
                discounted_strike,
                ..
            } => {
                let exposure = expiry * discounted_strike;
                match option_type {
                    OptionType::Call => exposure * norm_cdf(d2),
                    OptionType::Put => -exposure * norm_cdf(-d2),
                }
            }
        }
    }

    /// Computes price and all Greeks in one pass.
    pub fn greeks(&self, strike: T, expiry: T, option_type: OptionType) -> Greeks<T> {
        Greeks {
            price: self.price(strike, expiry, option_type),
            delta: self.delta(strike, expiry, option_type),
            gamma: self.gamma(strike, expiry),
            theta: self.theta(strike, expiry, option_type),
            vega: self.vega(strike, expiry),
            rho: self.rho(strike, expiry, option_type),
        }
    }
}

/// Heaviside step with H(0) = 1/2.
#[inline]
fn step<T: Float>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        T::zero()
    } else {
        T::from(0.5).unwrap()
    }
}

/// Prices a validated option contract.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::OptionContract;
///
/// let call: OptionContract<f64> = OptionContract::call(150.0, 155.0, 0.25, 0.05, 0.25).unwrap();
/// assert!((price(&call) - 6.11).abs() < 0.01);
/// ```
#[inline]
pub fn price<T: Float>(contract: &OptionContract<T>) -> T {
    BlackScholes::from_contract(contract).price(
        contract.strike(),
        contract.expiry(),
        contract.option_type(),
    )
}

/// Computes price and Greeks of a validated option contract.
#[inline]
pub fn greeks<T: Float>(contract: &OptionContract<T>) -> Greeks<T> {
    BlackScholes::from_contract(contract).greeks(
        contract.strike(),
        contract.expiry(),
        contract.option_type(),
    )
}
