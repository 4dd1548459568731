//! Cross-module tests for the analytical pricing layer.
//!
//! # Test Categories
//!
//! 1. **No-arbitrage relations**: parity, monotonicity in strike and vol
//! 2. **String-tagged construction**: parsing variants from external input
//! 3. **Error conversion**: contract errors into the shared `PricingError`

use approx::assert_relative_eq;
use pricer_core::types::PricingError;
use pricer_models::analytical::{greeks, price};
use pricer_models::instruments::{ContractError, OptionContract, OptionType};

// ============================================================================
// No-arbitrage relations
// ============================================================================

#[test]
fn test_parity_over_grid() {
    for &strike in &[60.0, 90.0, 100.0, 110.0, 160.0] {
        for &expiry in &[0.0, 0.01, 0.5, 2.0] {
            for &vol in &[0.0, 0.1, 0.6] {
                let call = OptionContract::call(100.0, strike, expiry, 0.03, vol).unwrap();
                let put = call.with_option_type(OptionType::Put);
                let forward_gap = 100.0 - strike * (-0.03_f64 * expiry).exp();
                assert_relative_eq!(
                    price(&call) - price(&put),
                    forward_gap,
                    epsilon = 1e-6
                );
            }
        }
    }
}

#[test]
fn test_call_decreasing_in_strike() {
    let mut previous = f64::INFINITY;
    for i in 0..40 {
        let strike = 50.0 + 5.0 * i as f64;
        let value = price(&OptionContract::call(100.0, strike, 1.0, 0.05, 0.3).unwrap());
        assert!(value <= previous);
        previous = value;
    }
}

#[test]
fn test_price_increasing_in_volatility() {
    let mut previous = 0.0;
    for i in 1..20 {
        let vol = 0.05 * i as f64;
        let value = price(&OptionContract::put(100.0, 100.0, 1.0, 0.05, vol).unwrap());
        assert!(value > previous);
        previous = value;
    }
}

#[test]
fn test_price_continuous_near_expiry() {
    // A very short expiry prices close to intrinsic; Greeks drop to zero at expiry
    let near = greeks(&OptionContract::call(120.0, 100.0, 1e-8, 0.05, 0.2).unwrap());
    let expired = greeks(&OptionContract::call(120.0, 100.0, 0.0, 0.05, 0.2).unwrap());
    assert_relative_eq!(near.price, expired.price, epsilon = 1e-4);
    assert_relative_eq!(near.delta, 1.0, epsilon = 1e-12);
    assert_eq!(expired.delta, 0.0);
}

// ============================================================================
// String-tagged construction
// ============================================================================

#[test]
fn test_contract_from_tag() {
    let option_type: OptionType = "Put".parse().unwrap();
    let contract = OptionContract::new(100.0, 105.0, 0.5, 0.01, 0.25, option_type).unwrap();
    assert!(contract.option_type().is_put());
    assert!(price(&contract) > contract.intrinsic_value());
}

#[test]
fn test_unknown_tag_rejected() {
    let err = "butterfly".parse::<OptionType>().unwrap_err();
    assert!(matches!(err, ContractError::UnknownOptionType { .. }));
}

// ============================================================================
// Error conversion
// ============================================================================

fn build(spot: f64) -> Result<f64, PricingError> {
    let contract = OptionContract::call(spot, 100.0, 1.0, 0.05, 0.2)?;
    Ok(price(&contract))
}

#[test]
fn test_contract_error_propagates_as_pricing_error() {
    assert!(build(100.0).is_ok());
    match build(-1.0) {
        Err(PricingError::InvalidInput(msg)) => assert!(msg.contains("spot")),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}
