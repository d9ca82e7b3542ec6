use crate::core::Particle;

/// Ideal-gas aggregates computed once from the initial velocities.
///
/// In 2D the `2/3` prefactors are kept as-is; the values are reported, not
/// fed back into the dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoSummary {
    /// |0 - N/2|: the imbalance before the first tick, with every particle on the right.
    pub initial_fluctuation: f64,
    /// Mean kinetic energy per particle.
    pub mean_kinetic_energy: f64,
    /// N * mean kinetic energy.
    pub total_kinetic_energy: f64,
    /// (2/3) * N * <KE> / area.
    pub pressure: f64,
    /// (2/3) * <KE> / k_B.
    pub temperature: f64,
}

impl ThermoSummary {
    /// Compute the summary. `particles` must be non-empty and `area` > 0;
    /// [`Simulation`](crate::core::Simulation) guarantees both.
    pub fn from_particles(particles: &[Particle], mass: f64, area: f64, k_boltzmann: f64) -> Self {
        let n = particles.len() as f64;
        let ke_sum: f64 = particles.iter().map(|p| p.kinetic_energy(mass)).sum();
        let mean = ke_sum / n;
        Self {
            initial_fluctuation: n / 2.0,
            mean_kinetic_energy: mean,
            total_kinetic_energy: n * mean,
            pressure: (2.0 / 3.0) * (n * mean) / area,
            temperature: (2.0 / 3.0) * mean / k_boltzmann,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identical_speeds_give_exact_mean() {
        let m = 2.0;
        let ps = vec![
            Particle::new(1.0, [1.0, 1.0], [3.0, 4.0]),
            Particle::new(1.0, [2.0, 1.0], [-4.0, 3.0]),
            Particle::new(1.0, [3.0, 1.0], [0.0, -5.0]),
        ];
        let s = ThermoSummary::from_particles(&ps, m, 100.0, 1.0);
        assert_eq!(s.mean_kinetic_energy, 0.5 * m * 25.0);
        assert_relative_eq!(s.total_kinetic_energy, 75.0);
        assert_eq!(s.initial_fluctuation, 1.5);
    }

    #[test]
    fn pressure_and_temperature_relations() {
        let ps = vec![
            Particle::new(0.0, [0.0, 0.0], [1.0, 0.0]),
            Particle::new(0.0, [0.0, 0.0], [0.0, 3.0]),
        ];
        // KE = 0.5 and 4.5 with m = 1; mean = 2.5
        let s = ThermoSummary::from_particles(&ps, 1.0, 10.0, 0.5);
        assert_relative_eq!(s.mean_kinetic_energy, 2.5);
        assert_relative_eq!(s.pressure, (2.0 / 3.0) * 5.0 / 10.0);
        assert_relative_eq!(s.temperature, (2.0 / 3.0) * 2.5 / 0.5);
    }
}
