/// Fixed spatial dimension (2D).
pub const DIM: usize = 2;

/// A circular gas particle in D=2.
///
/// Fields:
/// - `r`: position [x, y]
/// - `v`: velocity [vx, vy]
/// - `radius`: contact radius, constant for the particle's lifetime
///
/// Position and velocity are stored as whole arrays so a snapshot always
/// holds a coherent (x, y) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position (x, y).
    pub r: [f64; DIM],
    /// Velocity (vx, vy).
    pub v: [f64; DIM],
    radius: f64,
}

impl Particle {
    /// Create a particle. Values are stored verbatim; callers own placement.
    pub fn new(radius: f64, r: [f64; DIM], v: [f64; DIM]) -> Self {
        Self { r, v, radius }
    }

    /// Contact radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Euler drift: `r += v * dt`.
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        for (r_k, &v_k) in self.r.iter_mut().zip(&self.v) {
            *r_k += v_k * dt;
        }
    }

    /// Flip the velocity component of every axis on which the radius-expanded
    /// extent pokes past a wall. Axes are tested independently, so a corner
    /// contact flips both.
    ///
    /// Position is not clamped. With a large `dt` a particle can sit past the
    /// wall for one frame before its flipped velocity carries it back.
    pub fn reflect(&mut self, box_width: f64, box_height: f64) {
        let extent = [box_width, box_height];
        for k in 0..DIM {
            if self.r[k] - self.radius < 0.0 || self.r[k] + self.radius > extent[k] {
                self.v[k] = -self.v[k];
            }
        }
    }

    /// |v|^2
    #[inline]
    pub fn speed_squared(&self) -> f64 {
        self.v.iter().map(|&c| c * c).sum()
    }

    /// Returns the particle's kinetic energy: 1/2 m |v|^2.
    #[inline]
    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        0.5 * mass * self.speed_squared()
    }

    /// True when the centre sits on or left of `x_mid`.
    #[inline]
    pub fn is_left_of(&self, x_mid: f64) -> bool {
        self.r[0] <= x_mid
    }
}
