//! # Random Number Generation
//!
//! Seeded generators for the Monte Carlo simulator.
//!
//! - **Reproducibility**: every generator is built from an explicit seed
//! - **Block streams**: [`derive_stream_seed`] splits one base seed into
//!   independent per-block seeds, so results do not depend on how blocks
//!   are scheduled across threads
//! - **Efficiency**: zero-allocation batch draws via `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut block_rng = PricerRng::for_stream(42, 0);
//! let mut shocks = vec![0.0; 252];
//! block_rng.fill_normal(&mut shocks);
//! ```

pub mod prng;

pub use prng::{derive_stream_seed, PricerRng};
