use crate::config::SimConfig;
use crate::core::particle::DIM;
use crate::core::{GasBox, Particle, ThermoSummary};
use crate::error::{Error, Result};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info, trace};

/// One point of the fluctuation time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluctuationSample {
    /// Tick index at which the sample was taken (0-based).
    pub tick: u64,
    /// |left_count - N/2|.
    pub magnitude: f64,
}

/// What a renderer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: [f64; DIM],
    pub radius: f64,
}

/// Result of a call to [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// The tick ran and produced this sample.
    Advanced(FluctuationSample),
    /// The run was already over; nothing changed.
    Finished,
}

/// Fixed-step ideal gas in a 2D box with reflecting walls.
///
/// Particles start in the right half of the box. Each tick drifts every
/// particle by `dt`, flips velocity components on wall contact, and records how
/// far the left-half occupancy is from N/2.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    gas_box: GasBox,
    particles: Vec<Particle>,
    thermo: ThermoSummary,
    fluctuations: Vec<FluctuationSample>,
    tick: u64,
    left_count: Option<usize>,
}

impl Simulation {
    /// Create a simulation from `config`, seeding the RNG from `config.seed`
    /// (or from the thread RNG when no seed is given).
    pub fn new(config: SimConfig) -> Result<Self> {
        let mut rng: StdRng = match config.seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        Self::with_rng(config, &mut rng)
    }

    /// Create a simulation drawing initial positions and velocities from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng<R: Rng>(config: SimConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let gas_box = GasBox::new(config.width, config.height)?;

        let v_max = config.max_speed;
        let particles: Vec<Particle> = gas_box
            .random_initial_positions(config.num_particles, rng)
            .into_iter()
            .map(|r| {
                let v = [
                    rng.random_range(-v_max..=v_max),
                    rng.random_range(-v_max..=v_max),
                ];
                Particle::new(config.radius, r, v)
            })
            .collect();

        Ok(Self::assemble(config, gas_box, particles))
    }

    /// Create a simulation from pre-built particles, bypassing randomness.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `config` is invalid or `particles.len()` differs
    ///   from `config.num_particles`.
    /// - `Error::InvalidParam` if any particle radius is negative or not finite,
    ///   or any velocity component is not finite. Radii may differ from
    ///   `config.radius`.
    /// - `Error::OutOfBounds` if any particle centre lies outside the box.
    pub fn from_particles(config: SimConfig, particles: Vec<Particle>) -> Result<Self> {
        config.validate()?;
        if particles.len() != config.num_particles {
            return Err(Error::InvalidParam(format!(
                "num_particles is {} but {} particles were supplied",
                config.num_particles,
                particles.len()
            )));
        }
        let gas_box = GasBox::new(config.width, config.height)?;
        for (i, p) in particles.iter().enumerate() {
            let [x, y] = p.r;
            if !gas_box.contains_point(x, y) {
                return Err(Error::OutOfBounds(format!(
                    "particle {i} at ({x}, {y}) lies outside the {} x {} box",
                    gas_box.width(),
                    gas_box.height()
                )));
            }
            let radius = p.radius();
            if !radius.is_finite() || radius < 0.0 {
                return Err(Error::InvalidParam(format!(
                    "particle {i} radius must be finite and >= 0 (got {radius})"
                )));
            }
            if !p.v.iter().all(|c| c.is_finite()) || !p.kinetic_energy(config.mass).is_finite() {
                return Err(Error::InvalidParam(format!(
                    "particle {i} velocity must be finite with finite kinetic energy"
                )));
            }
        }
        Ok(Self::assemble(config, gas_box, particles))
    }

    fn assemble(config: SimConfig, gas_box: GasBox, particles: Vec<Particle>) -> Self {
        let thermo = ThermoSummary::from_particles(
            &particles,
            config.mass,
            gas_box.area(),
            config.k_boltzmann,
        );
        debug!(?config, "simulation configured");
        info!(
            n = particles.len(),
            initial_fluctuation = thermo.initial_fluctuation,
            mean_ke = thermo.mean_kinetic_energy,
            total_ke = thermo.total_kinetic_energy,
            pressure = thermo.pressure,
            temperature = thermo.temperature,
            "initial thermodynamic state"
        );
        let capacity = usize::try_from(config.max_ticks)
            .map_or(0, |t| t.saturating_add(1))
            .min(1 << 16);
        Self {
            config,
            gas_box,
            particles,
            thermo,
            fluctuations: Vec::with_capacity(capacity),
            tick: 0,
            left_count: None,
        }
    }

    /// Advance one tick.
    ///
    /// Once [`is_finished`](Self::is_finished) is true this is a no-op that
    /// returns [`StepOutcome::Finished`].
    pub fn step(&mut self) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::Finished;
        }

        let dt = self.config.dt;
        let (w, h) = (self.gas_box.width(), self.gas_box.height());
        let mid = self.gas_box.center_x();
        let mut left = 0usize;
        for p in &mut self.particles {
            p.advance(dt);
            p.reflect(w, h);
            if p.is_left_of(mid) {
                left += 1;
            }
        }

        let half = self.particles.len() as f64 / 2.0;
        let sample = FluctuationSample {
            tick: self.tick,
            magnitude: (left as f64 - half).abs(),
        };
        trace!(tick = sample.tick, left, magnitude = sample.magnitude, "tick");
        self.fluctuations.push(sample);
        self.left_count = Some(left);
        self.tick += 1;

        if self.is_finished() {
            info!(
                ticks = self.tick,
                mean_fluctuation = self.mean_fluctuation(),
                "maximum tick count reached; simulation finished"
            );
        }
        StepOutcome::Advanced(sample)
    }

    /// Step until finished. Returns the number of ticks taken by this call.
    pub fn run_to_completion(&mut self) -> u64 {
        let start = self.tick;
        while let StepOutcome::Advanced(_) = self.step() {}
        self.tick - start
    }

    /// True once the tick counter has exceeded `max_ticks`; never reverts.
    pub fn is_finished(&self) -> bool {
        self.tick > self.config.max_ticks
    }

    /// Number of ticks taken so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn gas_box(&self) -> &GasBox {
        &self.gas_box
    }

    /// Thermodynamic summary of the initial state.
    pub fn thermo(&self) -> &ThermoSummary {
        &self.thermo
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Left-half occupancy after the most recent tick (`None` before the first).
    pub fn left_count(&self) -> Option<usize> {
        self.left_count
    }

    /// The particle population, in stable order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Positions as a Vec of fixed-size arrays.
    pub fn positions(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.r).collect()
    }

    /// Velocities as a Vec of fixed-size arrays.
    pub fn velocities(&self) -> Vec<[f64; DIM]> {
        self.particles.iter().map(|p| p.v).collect()
    }

    /// Ordered draw list; index i always refers to the same particle.
    pub fn snapshot(&self) -> Vec<Disc> {
        self.particles
            .iter()
            .map(|p| Disc {
                center: p.r,
                radius: p.radius(),
            })
            .collect()
    }

    /// Full fluctuation series, oldest first.
    pub fn fluctuations(&self) -> &[FluctuationSample] {
        &self.fluctuations
    }

    pub fn latest_fluctuation(&self) -> Option<FluctuationSample> {
        self.fluctuations.last().copied()
    }

    /// Mean magnitude over the recorded series (0 when empty).
    pub fn mean_fluctuation(&self) -> f64 {
        if self.fluctuations.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.fluctuations.iter().map(|s| s.magnitude).sum();
        sum / self.fluctuations.len() as f64
    }

    /// Current total kinetic energy (diagnostic). Wall reflection preserves it.
    pub fn kinetic_energy(&self) -> f64 {
        let m = self.config.mass;
        self.particles.iter().map(|p| p.kinetic_energy(m)).sum()
    }
}
