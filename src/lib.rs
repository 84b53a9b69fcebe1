//! Springy-pendulum simulation.
//!
//! A point mass hangs from an elastic spring anchored at the origin and
//! swings under gravity. A [`elastica::Simulation`] advances the mass
//! with a fixed-timestep force-split integrator and records every
//! position in an append-only [`trajectory::Trajectory`]; [`plot`]
//! turns the finished record into a picture.

pub mod bob;
pub mod config;
pub mod elastica;
pub mod euler;
pub mod force;
pub mod integrator;
pub mod leapfrog;
pub mod plot;
pub mod symplectic;
pub mod trajectory;
