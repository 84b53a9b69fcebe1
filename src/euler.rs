//! Fully explicit Euler. Same cost per step as the semi-implicit
//! scheme but not symplectic: on conservative systems the energy grows
//! without bound. Kept for side-by-side drift comparisons.

use crate::integrator::{ForceSplit, StepContext};

pub struct ExplicitEuler;

impl ForceSplit for ExplicitEuler {
    fn pre_force(&mut self, _ctx: &mut StepContext<'_>) {}

    fn post_force(&mut self, ctx: &mut StepContext<'_>) {
        let bob = &mut *ctx.bob;

        // position advances with the pre-update velocity
        bob.x += bob.vx * ctx.dt;
        bob.y += bob.vy * ctx.dt;

        bob.vx += bob.ax * ctx.dt;
        bob.vy += bob.ay * ctx.dt;

        *ctx.t += ctx.dt;
    }
}
