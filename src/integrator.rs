use crate::bob::Bob;
use crate::euler::ExplicitEuler;
use crate::leapfrog::LeapFrog;
use crate::symplectic::SymplecticEuler;

/// Fixed-step integration schemes.
pub enum Integrator {
    SymplecticEuler(SymplecticEuler),
    ExplicitEuler(ExplicitEuler),
    LeapFrog(LeapFrog),
}

impl ForceSplit for Integrator {
    fn pre_force(&mut self, ctx: &mut StepContext<'_>) {
        match self {
            Integrator::SymplecticEuler(i) => i.pre_force(ctx),
            Integrator::ExplicitEuler(i) => i.pre_force(ctx),
            Integrator::LeapFrog(i) => i.pre_force(ctx),
        }
    }

    fn post_force(&mut self, ctx: &mut StepContext<'_>) {
        match self {
            Integrator::SymplecticEuler(i) => i.post_force(ctx),
            Integrator::ExplicitEuler(i) => i.post_force(ctx),
            Integrator::LeapFrog(i) => i.post_force(ctx),
        }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator::SymplecticEuler(SymplecticEuler)
    }
}

/// Mutable view of the simulation state handed to an integrator on
/// each side of the force evaluation.
pub struct StepContext<'a> {
    pub bob: &'a mut Bob,
    pub t: &'a mut f64,
    pub dt: f64,
}

/// An integration scheme split around the per-step force evaluation:
/// `pre_force` runs before accelerations are recomputed, `post_force`
/// after. Accelerations are only valid inside `post_force`.
pub trait ForceSplit {
    fn pre_force(&mut self, ctx: &mut StepContext<'_>);
    fn post_force(&mut self, ctx: &mut StepContext<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_is_symplectic_euler() {
        assert!(matches!(
            Integrator::default(),
            Integrator::SymplecticEuler(_)
        ));
    }
}
