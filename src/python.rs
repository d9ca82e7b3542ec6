use numpy::ndarray::{Array1, Array2};
use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::SimConfig;
use crate::core::particle::DIM;
use crate::core::{Simulation, StepOutcome};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn rows_to_array(rows: &[[f64; DIM]]) -> Array2<f64> {
    let mut arr = Array2::<f64>::zeros((rows.len(), DIM));
    for (i, row) in rows.iter().enumerate() {
        for k in 0..DIM {
            arr[[i, k]] = row[k];
        }
    }
    arr
}

/// Python-facing wrapper around the Rust Simulation core.
///
/// The host owns the frame timer and drawing: call `step()` once per frame,
/// read `get_positions()` for the scene and `get_fluctuations()` for the chart,
/// and stop when `is_finished()` turns true.
#[pyclass]
pub struct GasBoxSim {
    sim: Simulation,
}

#[pymethods]
impl GasBoxSim {
    /// Initialize a gas of `num_particles` discs in the right half of a `width` x `height` box.
    ///
    /// Errors: raises ValueError naming the first invalid parameter.
    #[new]
    #[pyo3(signature = (
        num_particles,
        width,
        height,
        radius=2.0,
        max_ticks=2000,
        dt=0.1,
        mass=1e-26,
        k_boltzmann=1.38e-23,
        max_speed=20.0,
        seed=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        num_particles: usize,
        width: f64,
        height: f64,
        radius: f64,
        max_ticks: u64,
        dt: f64,
        mass: f64,
        k_boltzmann: f64,
        max_speed: f64,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let config = SimConfig {
            num_particles,
            width,
            height,
            radius,
            max_ticks,
            dt,
            mass,
            k_boltzmann,
            max_speed,
            seed,
        };
        let sim = Simulation::new(config).map_err(py_err)?;
        Ok(Self { sim })
    }

    /// Advance one tick. Returns False (and does nothing) once the run has finished.
    fn step(&mut self) -> bool {
        matches!(self.sim.step(), StepOutcome::Advanced(_))
    }

    /// Step until finished (releases the GIL). Returns the number of ticks taken.
    fn run(&mut self, py: Python<'_>) -> u64 {
        py.detach(|| self.sim.run_to_completion())
    }

    fn is_finished(&self) -> bool {
        self.sim.is_finished()
    }

    fn tick(&self) -> u64 {
        self.sim.tick()
    }

    /// Return positions as a NumPy array of shape (N, 2), dtype=float64.
    fn get_positions<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let arr = rows_to_array(&self.sim.positions());
        Ok(arr.into_pyarray(py).to_owned().into())
    }

    /// Return velocities as a NumPy array of shape (N, 2), dtype=float64.
    fn get_velocities<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let arr = rows_to_array(&self.sim.velocities());
        Ok(arr.into_pyarray(py).to_owned().into())
    }

    /// Return radii as a NumPy array of shape (N,), in the same order as positions.
    fn get_radii<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray1<f64>>> {
        let arr: Array1<f64> = self.sim.snapshot().iter().map(|d| d.radius).collect();
        Ok(arr.into_pyarray(py).to_owned().into())
    }

    /// Return a (M, 2) NumPy array of [tick, |left - N/2|] samples.
    fn get_fluctuations<'py>(&self, py: Python<'py>) -> PyResult<Py<PyArray2<f64>>> {
        let series = self.sim.fluctuations();
        let mut arr = Array2::<f64>::zeros((series.len(), 2));
        for (i, s) in series.iter().enumerate() {
            arr[[i, 0]] = s.tick as f64;
            arr[[i, 1]] = s.magnitude;
        }
        Ok(arr.into_pyarray(py).to_owned().into())
    }

    /// Initial-state summary.
    ///
    /// Returns: (initial_fluctuation, mean_ke, total_ke, pressure, temperature)
    fn get_thermo_summary(&self) -> (f64, f64, f64, f64, f64) {
        let t = self.sim.thermo();
        (
            t.initial_fluctuation,
            t.mean_kinetic_energy,
            t.total_kinetic_energy,
            t.pressure,
            t.temperature,
        )
    }
}

/// The gasbox Python module entry point.
#[pymodule]
fn gasbox(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GasBoxSim>()?;
    Ok(())
}
