//! Monte Carlo simulation of portfolio value.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── SimulationConfig   (trials, horizon, seed, limits)
//! ├── RandomWalkParams   (μ, σ, V₀)
//! ├── PricerRng          (one stream per block of trials)
//! └── SimulationResult   (terminal values + summary statistics)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_core::market_data::ReturnSeries;
//! use pricer_pricing::mc::{MonteCarloSimulator, RandomWalkParams, SimulationConfig};
//!
//! let history = ReturnSeries::new(vec![0.004, -0.002, 0.001, 0.003, -0.001]).unwrap();
//! let params = RandomWalkParams::from_return_series(&history, 1_000_000.0).unwrap();
//! let config = SimulationConfig::builder().n_trials(1_000).horizon(252).build().unwrap();
//!
//! let summary = MonteCarloSimulator::new(config, params).unwrap().run().summary();
//! assert!(summary.p5 <= summary.p95);
//! ```

pub mod config;
pub mod error;
pub mod params;
pub mod result;
pub mod simulator;

pub use config::{
    SimulationConfig, SimulationConfigBuilder, DEFAULT_MAX_TRIALS, DEFAULT_SEED, MAX_HORIZON,
};
pub use error::SimulationError;
pub use params::RandomWalkParams;
pub use result::{SimulationResult, SimulationSummary};
pub use simulator::{MonteCarloSimulator, BLOCK_SIZE};
