//! 2D ideal gas in a reflecting box, watched through the imbalance between
//! its left and right halves (a discrete Ehrenfest urn).
//!
//! The core is driven one tick at a time by an external scheduler:
//!
//! ```no_run
//! use gasbox::{config::SimConfig, core::Simulation};
//!
//! # fn main() -> gasbox::error::Result<()> {
//! let mut sim = Simulation::new(SimConfig::new(1000, 400.0, 400.0).with_seed(1))?;
//! while !sim.is_finished() {
//!     sim.step();
//!     // draw sim.snapshot(), plot sim.fluctuations() ...
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;
