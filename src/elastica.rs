use crate::bob::Bob;
use crate::config::{Config, ConfigError};
use crate::force::{ForceContext, SpringLaw};
use crate::integrator::{ForceSplit, Integrator, StepContext};
use crate::trajectory::Trajectory;

/// A springy-pendulum run: one bob on an elastic spring anchored at
/// the origin, advanced in fixed steps until the simulated time budget
/// is spent.
///
/// The pivot is not part of the state; every position is relative to
/// it. Scalar parameters and the force law are public and may be
/// adjusted between construction and [`Simulation::run`], in the
/// spirit of configuring a freshly initialized simulation.
pub struct Simulation {
    /// Simulated elapsed time.
    pub t: f64,
    /// Fixed timestep.
    pub dt: f64,
    pub g: f64,
    pub l0: f64,
    pub m: f64,
    pub k: f64,
    pub softening: f64,

    pub force: SpringLaw,
    pub integrator: Integrator,

    total: f64,
    steps_done: u64,
    bob: Bob,
    trajectory: Trajectory,
}

impl Simulation {
    /// Validate `config` and set up the run, with the bob hanging at
    /// its release position and that position already recorded as the
    /// trajectory's first sample.
    pub fn new(config: Config, integrator: Integrator) -> Result<Self, ConfigError> {
        config.validate()?;

        let bob = Bob::hanging(config.l0, config.theta0, config.dx, config.dy);
        // capacity hint only; clamped so an unbounded total cannot ask
        // for an absurd reservation up front
        let n_samples = step_count(config.total, config.dt).saturating_add(1);
        let mut trajectory = Trajectory::with_capacity(n_samples.min(1 << 24) as usize);
        trajectory.push(bob.x, bob.y);

        Ok(Simulation {
            t: 0.0,
            dt: config.dt,
            g: config.g,
            l0: config.l0,
            m: config.m,
            k: config.k,
            softening: config.softening,
            force: SpringLaw::default(),
            integrator,
            total: config.total,
            steps_done: 0,
            bob,
            trajectory,
        })
    }

    pub fn bob(&self) -> &Bob {
        &self.bob
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Configured total simulated duration.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Advance one fixed step and record the new position.
    pub fn step(&mut self) {
        let mut ctx = StepContext {
            bob: &mut self.bob,
            t: &mut self.t,
            dt: self.dt,
        };
        self.integrator.pre_force(&mut ctx);

        let mut ctx = ForceContext {
            bob: &mut self.bob,
            l0: self.l0,
            k: self.k,
            m: self.m,
            g: self.g,
            softening: self.softening,
        };
        self.force.update(&mut ctx);

        let mut ctx = StepContext {
            bob: &mut self.bob,
            t: &mut self.t,
            dt: self.dt,
        };
        self.integrator.post_force(&mut ctx);

        self.trajectory.push(self.bob.x, self.bob.y);
        self.steps_done += 1;
    }

    /// Step until the whole-step count covers `t_end`. Already
    /// integrated time is never re-run, so calling with increasing
    /// targets continues the same run.
    pub fn integrate(&mut self, t_end: f64) {
        let n_steps = step_count(t_end, self.dt);
        while self.steps_done < n_steps {
            self.step();
        }
    }

    /// Integrate the configured total duration.
    pub fn run(&mut self) {
        let t_end = self.total;
        self.integrate(t_end);
    }

    /// Mechanical energy: kinetic plus elastic plus gravitational.
    /// Conserved up to the integration scheme's error, which makes it
    /// the standard drift diagnostic.
    pub fn energy(&self) -> f64 {
        let stretch = self.bob.length() - self.l0;
        self.bob.kinetic_energy(self.m)
            + 0.5 * self.k * stretch * stretch
            + self.m * self.g * self.bob.y
    }
}

/// Number of whole steps in `t_end`, i.e. `floor(t_end/dt)`, guarded
/// for commensurate durations: a quotient like `15.0 / 1e-3` can land
/// a few ULPs below the exact 15000 and must still count as 15000.
fn step_count(t_end: f64, dt: f64) -> u64 {
    let ratio = t_end / dt;
    let whole = ratio.floor();
    if ratio - whole > 1.0 - 1e-9 {
        whole as u64 + 1
    } else {
        whole as u64
    }
}
