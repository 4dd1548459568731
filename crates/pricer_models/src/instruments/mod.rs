//! Option contract definitions.
//!
//! - [`OptionContract`]: validated European option terms
//! - [`OptionType`]: call/put variant tag
//! - [`Moneyness`]: ITM / ATM / OTM classification
//! - [`ContractError`]: construction errors

pub mod error;
pub mod payoff;
pub mod vanilla;

pub use error::ContractError;
pub use payoff::OptionType;
pub use vanilla::{Moneyness, OptionContract};
