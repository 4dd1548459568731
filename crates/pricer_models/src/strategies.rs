//! Multi-leg option strategies.
//!
//! A strategy is a list of signed option legs on one underlying. Net
//! premium and Greeks are quantity-weighted sums of the leg values.
//!
//! # Examples
//! ```
//! use pricer_models::strategies::OptionStrategy;
//!
//! let spread = OptionStrategy::bull_call_spread(100.0, 95.0, 105.0, 0.5, 0.05, 0.2).unwrap();
//! let premium = spread.net_premium();
//! assert!(premium > 0.0 && premium < 10.0);
//! assert!((spread.max_profit().unwrap() + spread.max_loss().unwrap() - 10.0).abs() < 1e-12);
//! ```

use crate::analytical::{self, Greeks};
use crate::instruments::{ContractError, OptionContract, OptionType};

/// One position in a strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionLeg {
    /// Option terms
    pub contract: OptionContract,
    /// Signed number of contracts (+ long, - short)
    pub quantity: f64,
}

impl OptionLeg {
    /// One long contract.
    pub fn long(contract: OptionContract) -> Self {
        Self {
            contract,
            quantity: 1.0,
        }
    }

    /// One short contract.
    pub fn short(contract: OptionContract) -> Self {
        Self {
            contract,
            quantity: -1.0,
        }
    }

    /// Signed premium of the leg.
    pub fn premium(&self) -> f64 {
        self.quantity * analytical::price(&self.contract)
    }

    /// Signed Greeks of the leg.
    pub fn greeks(&self) -> Greeks {
        analytical::greeks(&self.contract).scale(self.quantity)
    }

    /// Signed exercise value if the underlying settles at `terminal_spot`.
    pub fn payoff_at(&self, terminal_spot: f64) -> f64 {
        self.quantity
            * self
                .contract
                .option_type()
                .intrinsic(terminal_spot, self.contract.strike())
    }
}

/// Recognised strategy shapes and their strikes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StrategyKind {
    /// Arbitrary legs
    Custom,
    /// Long lower-strike call, short upper-strike call
    BullCallSpread {
        /// Long call strike
        lower: f64,
        /// Short call strike
        upper: f64,
    },
    /// Short strangle protected by long wings
    IronCondor {
        /// Long put strike
        put_low: f64,
        /// Short put strike
        put_high: f64,
        /// Short call strike
        call_low: f64,
        /// Long call strike
        call_high: f64,
    },
}

/// A collection of option legs priced together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionStrategy {
    kind: StrategyKind,
    legs: Vec<OptionLeg>,
}

impl OptionStrategy {
    /// Creates a custom strategy from arbitrary legs.
    ///
    /// # Errors
    /// `ContractError::InvalidStrategy` if there are no legs or a quantity
    /// is non-finite.
    pub fn new(legs: Vec<OptionLeg>) -> Result<Self, ContractError> {
        Self::with_kind(StrategyKind::Custom, legs)
    }

    fn with_kind(kind: StrategyKind, legs: Vec<OptionLeg>) -> Result<Self, ContractError> {
        if legs.is_empty() {
            return Err(invalid("strategy needs at least one leg"));
        }
        if let Some(leg) = legs.iter().find(|leg| !leg.quantity.is_finite()) {
            return Err(invalid(format!("non-finite leg quantity {}", leg.quantity)));
        }
        Ok(Self { kind, legs })
    }

    /// Bull call spread: long call at `lower`, short call at `upper`.
    ///
    /// # Errors
    /// - `ContractError::InvalidStrategy` unless `lower < upper`
    /// - Any contract validation error for the shared terms
    pub fn bull_call_spread(
        spot: f64,
        lower: f64,
        upper: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, ContractError> {
        if !(lower < upper) {
            return Err(invalid(format!(
                "bull call spread needs lower < upper strike, got {lower} and {upper}"
            )));
        }
        let long = OptionContract::call(spot, lower, expiry, rate, volatility)?;
        let short = OptionContract::call(spot, upper, expiry, rate, volatility)?;
        Self::with_kind(
            StrategyKind::BullCallSpread { lower, upper },
            vec![OptionLeg::long(long), OptionLeg::short(short)],
        )
    }

    /// Iron condor: long put at `put_low`, short put at `put_high`,
    /// short call at `call_low`, long call at `call_high`.
    ///
    /// # Errors
    /// - `ContractError::InvalidStrategy` unless the four strikes are
    ///   strictly increasing
    /// - Any contract validation error for the shared terms
    #[allow(clippy::too_many_arguments)]
    pub fn iron_condor(
        spot: f64,
        put_low: f64,
        put_high: f64,
        call_low: f64,
        call_high: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, ContractError> {
        if !(put_low < put_high && put_high < call_low && call_low < call_high) {
            return Err(invalid(format!(
                "iron condor strikes must be strictly increasing, got \
                 {put_low}, {put_high}, {call_low}, {call_high}"
            )));
        }
        let leg = |strike: f64, option_type: OptionType| {
            OptionContract::new(spot, strike, expiry, rate, volatility, option_type)
        };
        let legs = vec![
            OptionLeg::long(leg(put_low, OptionType::Put)?),
            OptionLeg::short(leg(put_high, OptionType::Put)?),
            OptionLeg::short(leg(call_low, OptionType::Call)?),
            OptionLeg::long(leg(call_high, OptionType::Call)?),
        ];
        Self::with_kind(
            StrategyKind::IronCondor {
                put_low,
                put_high,
                call_low,
                call_high,
            },
            legs,
        )
    }

    /// Returns the strategy shape.
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Returns the legs.
    pub fn legs(&self) -> &[OptionLeg] {
        &self.legs
    }

    /// Net cost of entering the strategy (negative for a credit).
    pub fn net_premium(&self) -> f64 {
        self.legs.iter().map(OptionLeg::premium).sum()
    }

    /// Quantity-weighted sum of leg Greeks.
    pub fn net_greeks(&self) -> Greeks {
        self.legs
            .iter()
            .fold(Greeks::zero(), |acc, leg| acc + leg.greeks())
    }

    /// Exercise value of all legs if the underlying settles at `terminal_spot`.
    pub fn payoff_at(&self, terminal_spot: f64) -> f64 {
        self.legs.iter().map(|leg| leg.payoff_at(terminal_spot)).sum()
    }

    /// Largest gain at expiry, net of premium. `None` for custom strategies.
    pub fn max_profit(&self) -> Option<f64> {
        let premium = self.net_premium();
        match self.kind {
            StrategyKind::Custom => None,
            StrategyKind::BullCallSpread { lower, upper } => Some(upper - lower - premium),
            StrategyKind::IronCondor { .. } => Some(-premium),
        }
    }

    /// Largest loss at expiry, net of premium, as a positive number.
    /// `None` for custom strategies.
    pub fn max_loss(&self) -> Option<f64> {
        let premium = self.net_premium();
        match self.kind {
            StrategyKind::Custom => None,
            StrategyKind::BullCallSpread { .. } => Some(premium),
            StrategyKind::IronCondor {
                put_low,
                put_high,
                call_low,
                call_high,
            } => {
                let widest_wing = (put_high - put_low).max(call_high - call_low);
                Some(widest_wing + premium)
            }
        }
    }

    /// Terminal spot levels at which the position breaks even, ascending.
    pub fn breakevens(&self) -> Vec<f64> {
        let premium = self.net_premium();
        match self.kind {
            StrategyKind::Custom => Vec::new(),
            StrategyKind::BullCallSpread { lower, .. } => vec![lower + premium],
            StrategyKind::IronCondor {
                put_high, call_low, ..
            } => {
                let credit = -premium;
                vec![put_high - credit, call_low + credit]
            }
        }
    }

    /// Lowest breakeven level, if any.
    pub fn breakeven(&self) -> Option<f64> {
        self.breakevens().first().copied()
    }
}

fn invalid(message: impl Into<String>) -> ContractError {
    ContractError::InvalidStrategy {
        message: message.into(),
    }
}
