use approx::assert_relative_eq;
use gasbox::config::SimConfig;
use gasbox::core::{Particle, Simulation, StepOutcome};
use gasbox::error::Result;

/// Every particle starts on the right, so the first samples sit near N/2 and the
/// gas then spreads into the left half.
#[test]
fn imbalance_relaxes_from_initial_state() -> Result<()> {
    let n = 400;
    let cfg = SimConfig::new(n, 200.0, 200.0)
        .with_radius(1.0)
        .with_dt(0.5)
        .with_max_ticks(2000)
        .with_seed(31415);
    let mut sim = Simulation::new(cfg)?;
    assert_eq!(sim.thermo().initial_fluctuation, n as f64 / 2.0);

    sim.run_to_completion();
    let series = sim.fluctuations();
    assert_eq!(series.len(), 2001);

    let first = series[0].magnitude;
    assert!(first > 0.8 * n as f64 / 2.0, "first sample {first} should be near N/2");

    // Average over the tail should be far below N/2 once the halves have mixed.
    let tail = &series[1000..];
    let tail_mean: f64 = tail.iter().map(|s| s.magnitude).sum::<f64>() / tail.len() as f64;
    assert!(tail_mean < 0.25 * n as f64 / 2.0, "tail mean {tail_mean} did not relax");
    Ok(())
}

/// Tick indices are 0, 1, 2, ... with no gaps and magnitudes are never negative.
#[test]
fn series_is_append_only_and_monotone() -> Result<()> {
    let mut sim = Simulation::new(
        SimConfig::new(25, 50.0, 50.0)
            .with_radius(0.5)
            .with_max_ticks(99)
            .with_seed(8),
    )?;
    let mut seen = 0;
    while let StepOutcome::Advanced(sample) = sim.step() {
        assert_eq!(sample.tick, seen);
        assert!(sample.magnitude >= 0.0);
        seen += 1;
        assert_eq!(sim.fluctuations().len() as u64, seen);
    }
    assert_eq!(seen, 100);
    for (i, s) in sim.fluctuations().iter().enumerate() {
        assert_eq!(s.tick, i as u64);
    }
    Ok(())
}

/// Three particles with the same speed: mean kinetic energy is exactly 1/2 m v^2.
#[test]
fn thermo_summary_for_equal_speeds() -> Result<()> {
    let cfg = SimConfig::new(3, 10.0, 20.0);
    let m = cfg.mass;
    let kb = cfg.k_boltzmann;
    let ps = vec![
        Particle::new(0.1, [6.0, 1.0], [6.0, 8.0]),
        Particle::new(0.1, [7.0, 2.0], [-10.0, 0.0]),
        Particle::new(0.1, [8.0, 3.0], [0.0, 10.0]),
    ];
    let sim = Simulation::from_particles(cfg, ps)?;
    let t = sim.thermo();
    let ke = 0.5 * m * 100.0;
    assert_relative_eq!(t.mean_kinetic_energy, ke, max_relative = 1e-15);
    assert_relative_eq!(t.total_kinetic_energy, 3.0 * ke, max_relative = 1e-15);
    assert_relative_eq!(t.pressure, (2.0 / 3.0) * 3.0 * ke / 200.0, max_relative = 1e-12);
    assert_relative_eq!(t.temperature, (2.0 / 3.0) * ke / kb, max_relative = 1e-12);
    Ok(())
}

/// The summary is fixed at construction even though velocities change sign later.
#[test]
fn thermo_summary_is_not_recomputed() -> Result<()> {
    let mut sim = Simulation::new(SimConfig::new(50, 30.0, 30.0).with_max_ticks(50).with_seed(4))?;
    let before = *sim.thermo();
    sim.run_to_completion();
    assert_eq!(*sim.thermo(), before);
    Ok(())
}

/// With zero speed nothing moves and the imbalance never changes.
#[test]
fn frozen_gas_keeps_its_imbalance() -> Result<()> {
    let n = 10;
    let mut sim = Simulation::new(
        SimConfig::new(n, 40.0, 40.0)
            .with_max_speed(0.0)
            .with_max_ticks(20)
            .with_seed(6),
    )?;
    let start = sim.positions();
    sim.run_to_completion();
    assert_eq!(sim.positions(), start);
    let left = start.iter().filter(|[x, _]| *x <= 20.0).count();
    let expected = (left as f64 - n as f64 / 2.0).abs();
    assert!(sim.fluctuations().iter().all(|s| s.magnitude == expected));
    assert_eq!(sim.thermo().mean_kinetic_energy, 0.0);
    Ok(())
}
