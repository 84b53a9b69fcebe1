//! Run the same configuration through each integration scheme and
//! report the relative mechanical-energy drift. The symplectic schemes
//! stay bounded; explicit Euler does not.

use anyhow::Result;
use mt_logger::{mt_flush, mt_log, mt_new, Level, OutputStream};

use elastica::config::Config;
use elastica::elastica::Simulation;
use elastica::euler::ExplicitEuler;
use elastica::integrator::Integrator;
use elastica::leapfrog::LeapFrog;
use elastica::symplectic::SymplecticEuler;

fn drift(integrator: Integrator) -> Result<f64> {
    let mut sim = Simulation::new(Config::default(), integrator)?;
    let e0 = sim.energy();
    sim.run();
    Ok(((sim.energy() - e0) / e0).abs())
}

fn main() -> Result<()> {
    mt_new!(None, Level::Info, OutputStream::StdOut);

    let total = Config::default().total;
    mt_log!(Level::Info, "relative energy drift over {total} s:");
    mt_log!(
        Level::Info,
        "  symplectic euler  {:.3e}",
        drift(Integrator::SymplecticEuler(SymplecticEuler))?
    );
    mt_log!(
        Level::Info,
        "  leapfrog          {:.3e}",
        drift(Integrator::LeapFrog(LeapFrog))?
    );
    mt_log!(
        Level::Info,
        "  explicit euler    {:.3e}",
        drift(Integrator::ExplicitEuler(ExplicitEuler))?
    );

    mt_flush!().ok();
    Ok(())
}
