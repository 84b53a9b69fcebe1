//! Semi-implicit (symplectic) Euler. First order: the velocity update
//! uses the acceleration at the current position, and the position
//! update uses the already-updated velocity. The ordering keeps the
//! energy error bounded instead of drifting; the reverse ordering is
//! explicit Euler.

use crate::integrator::{ForceSplit, StepContext};

pub struct SymplecticEuler;

impl ForceSplit for SymplecticEuler {
    fn pre_force(&mut self, _ctx: &mut StepContext<'_>) {}

    fn post_force(&mut self, ctx: &mut StepContext<'_>) {
        let bob = &mut *ctx.bob;

        bob.vx += bob.ax * ctx.dt;
        bob.vy += bob.ay * ctx.dt;

        // position advances with the velocity updated just above
        bob.x += bob.vx * ctx.dt;
        bob.y += bob.vy * ctx.dt;

        *ctx.t += ctx.dt;
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use crate::bob::Bob;

    #[test]
    fn position_uses_the_updated_velocity() {
        let mut bob = Bob {
            y: 1.0,
            vy: 1.0,
            ay: -9.81,
            ..Bob::default()
        };
        let mut t = 0.0;
        let mut scheme = SymplecticEuler;

        let mut ctx = StepContext {
            bob: &mut bob,
            t: &mut t,
            dt: 0.01,
        };
        scheme.pre_force(&mut ctx);
        scheme.post_force(&mut ctx);

        assert!(approx_eq!(f64, bob.vy, 0.9019, epsilon = 1e-12));
        assert!(approx_eq!(f64, bob.y, 1.0 + 0.9019 * 0.01, epsilon = 1e-12));
        assert!(approx_eq!(f64, t, 0.01, epsilon = 1e-15));
    }
}
