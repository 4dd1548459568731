//! # pricer_pricing: Monte Carlo Simulation (Layer 3)
//!
//! ## Layer 3 Role
//!
//! - [`rng`]: Seeded generators and per-block stream derivation
//! - [`mc`]: Random-walk simulation of portfolio value and its summary
//!   statistics
//!
//! Simulations are reproducible: the same seed, parameters, trial count
//! and horizon yield byte-identical terminal values, whether trial blocks
//! run sequentially or on the rayon pool.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::{MonteCarloSimulator, RandomWalkParams, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_trials(10_000)
//!     .horizon(252)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let params = RandomWalkParams::new(0.0, 0.01, 100.0).unwrap();
//!
//! let result = MonteCarloSimulator::new(config, params).unwrap().run();
//! assert!((result.mean() - 100.0).abs() < 3.0);
//! ```

#![deny(missing_docs)]

pub mod mc;
pub mod rng;
