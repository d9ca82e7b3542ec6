use crate::core::particle::DIM;
use crate::error::{Error, Result};
use rand::Rng;

/// Returned by [`GasBox::time_to_wall_impact`] when the velocity is zero on
/// both axes and no wall will ever be reached.
pub const NO_IMPACT: f64 = f64::MAX;

/// Simulation domain: static axis-aligned rectangle `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasBox {
    width: f64,
    height: f64,
}

impl GasBox {
    /// Create a box after validating that both edges are finite and > 0.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidParam("width must be finite and > 0".into()));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::InvalidParam("height must be finite and > 0".into()));
        }
        if !(width * height).is_finite() {
            return Err(Error::InvalidParam("width * height must be finite".into()));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The vertical line splitting the box into left and right halves.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Time until a point moving at (vx, vy) first reaches a wall.
    ///
    /// Each axis contributes at most one candidate (the wall it is heading
    /// towards). The point is treated as having no extent. Returns
    /// [`NO_IMPACT`] when neither axis moves.
    pub fn time_to_wall_impact(&self, x: f64, y: f64, vx: f64, vy: f64) -> f64 {
        let extent = [self.width, self.height];
        let mut best = NO_IMPACT;
        for ((&pos, &vel), &len) in [x, y].iter().zip(&[vx, vy]).zip(&extent) {
            let t = if vel > 0.0 {
                (len - pos) / vel
            } else if vel < 0.0 {
                pos / -vel
            } else {
                continue;
            };
            best = best.min(t);
        }
        best
    }

    /// Draw `count` starting positions confined to the right half of the box:
    /// x uniform in `[width/2, width]`, y uniform in `[0, height]`.
    pub fn random_initial_positions<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<[f64; DIM]> {
        let x_lo = self.center_x();
        (0..count)
            .map(|_| {
                [
                    rng.random_range(x_lo..=self.width),
                    rng.random_range(0.0..=self.height),
                ]
            })
            .collect()
    }
}
