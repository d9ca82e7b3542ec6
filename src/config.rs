//! Construction parameters for a [`Simulation`](crate::core::Simulation).
//!
//! `SimConfig` deserializes from YAML with every key optional; missing keys
//! fall back to the defaults below (the classic 10 000-particle, 800x800 run):
//!
//! ```yaml
//! num_particles: 10000
//! width: 800.0
//! height: 800.0
//! radius: 2.0
//! max_ticks: 2000
//! dt: 0.1
//! mass: 1.0e-26        # kg
//! k_boltzmann: 1.38e-23 # J/K
//! max_speed: 20.0      # initial vx, vy drawn from [-max_speed, max_speed]
//! seed: 42             # omit for a nondeterministic run
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub num_particles: usize,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    /// The run finishes once the tick counter exceeds this value.
    pub max_ticks: u64,
    pub dt: f64,
    pub mass: f64,
    pub k_boltzmann: f64,
    pub max_speed: f64,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_particles: 10_000,
            width: 800.0,
            height: 800.0,
            radius: 2.0,
            max_ticks: 2000,
            dt: 0.1,
            mass: 1e-26,
            k_boltzmann: 1.38e-23,
            max_speed: 20.0,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Config for `num_particles` in a `width` x `height` box; everything else defaulted.
    pub fn new(num_particles: usize, width: f64, height: f64) -> Self {
        Self {
            num_particles,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every constraint, reporting the first violated parameter.
    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(Error::InvalidParam("num_particles must be > 0".into()));
        }
        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("radius", self.radius)?;
        positive("dt", self.dt)?;
        positive("mass", self.mass)?;
        positive("k_boltzmann", self.k_boltzmann)?;
        non_negative("max_speed", self.max_speed)?;

        if !(self.width * self.height).is_finite() {
            return Err(Error::InvalidParam(format!(
                "width * height must be finite (got {} x {})",
                self.width, self.height
            )));
        }
        // Velocities are drawn from [-max_speed, max_speed]; the sampler needs
        // headroom above the range width.
        if !(4.0 * self.max_speed).is_finite() {
            return Err(Error::InvalidParam(format!(
                "max_speed must be below {:e} (got {})",
                f64::MAX / 4.0,
                self.max_speed
            )));
        }
        // Worst case per particle: 1/2 m (v^2 + v^2) = m v^2.
        let ke_max = self.mass * self.max_speed * self.max_speed;
        let total_max = ke_max * self.num_particles as f64;
        let bounded = ke_max.is_finite()
            && total_max.is_finite()
            && (total_max / (self.width * self.height)).is_finite()
            && (ke_max / self.k_boltzmann).is_finite();
        if !bounded {
            return Err(Error::InvalidParam(format!(
                "max_speed {} with mass {} overflows the kinetic energy summary",
                self.max_speed, self.mass
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be finite and > 0 (got {value})"
        )));
    }
    Ok(())
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be finite and >= 0 (got {value})"
        )));
    }
    Ok(())
}
