//! Physics and statistics core: particles, the box, and the fixed-step
//! simulation that tracks left/right occupancy fluctuations.

pub mod container;
pub mod particle;
pub mod sim;
pub mod thermo;

pub use container::{GasBox, NO_IMPACT};
pub use particle::Particle;
pub use sim::{Disc, FluctuationSample, Simulation, StepOutcome};
pub use thermo::ThermoSummary;
