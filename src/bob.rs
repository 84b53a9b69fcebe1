use std::f64::consts::PI;

/// Kinematic state of the suspended mass.
///
/// Positions are measured from the fixed pivot at the origin, with `y`
/// negative below the pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bob {
    pub x: f64,
    pub y: f64,

    pub vx: f64,
    pub vy: f64,

    pub ax: f64,
    pub ay: f64,
}

impl Bob {
    /// Bob at rest, `theta0` radians off the downward vertical at
    /// spring length `l0`, displaced by the static `(dx, dy)` offset.
    pub fn hanging(l0: f64, theta0: f64, dx: f64, dy: f64) -> Self {
        Bob {
            x: l0 * theta0.sin() + dx,
            y: -l0 * theta0.cos() + dy,
            ..Bob::default()
        }
    }

    /// Current spring length, pivot to bob.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Pendulum angle reconstructed from the current position.
    ///
    /// `atan2(x, |y|)` measures from the downward vertical; once the
    /// bob swings above the pivot the angle is reflected through
    /// `sign(x)·π`. The reflection uses the zero-at-zero sign
    /// convention so both branches agree at `x == 0` (`f64::signum`
    /// returns 1.0 there and would not).
    pub fn angle(&self) -> f64 {
        let theta = self.x.atan2(self.y.abs());
        if self.y > 0.0 {
            sign(self.x) * PI - theta
        } else {
            theta
        }
    }

    pub fn kinetic_energy(&self, m: f64) -> f64 {
        0.5 * m * (self.vx * self.vx + self.vy * self.vy)
    }
}

fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
