//! This is the standard leap frog integrator. It is second order
//! and symplectic. No configuration is available
//! (the timestep is set in the simulation structure).

use crate::integrator::{ForceSplit, StepContext};

pub struct LeapFrog;

impl ForceSplit for LeapFrog {
    fn pre_force(&mut self, ctx: &mut StepContext<'_>) {
        let bob = &mut *ctx.bob;
        bob.x += 0.5 * ctx.dt * bob.vx;
        bob.y += 0.5 * ctx.dt * bob.vy;
        *ctx.t += ctx.dt / 2.0;
    }

    fn post_force(&mut self, ctx: &mut StepContext<'_>) {
        let bob = &mut *ctx.bob;
        bob.vx += ctx.dt * bob.ax;
        bob.vy += ctx.dt * bob.ay;

        bob.x += 0.5 * ctx.dt * bob.vx;
        bob.y += 0.5 * ctx.dt * bob.vy;
        *ctx.t += ctx.dt / 2.0;
    }
}
