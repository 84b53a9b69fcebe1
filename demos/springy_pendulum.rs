//! The reference springy-pendulum run: simulate with the default
//! configuration, then render the path and the pivot to a PNG.

use std::path::Path;

use anyhow::Result;
use mt_logger::{mt_flush, mt_log, mt_new, Level, OutputStream};

use elastica::config::Config;
use elastica::elastica::Simulation;
use elastica::integrator::Integrator;
use elastica::plot;

fn main() -> Result<()> {
    mt_new!(None, Level::Info, OutputStream::StdOut);

    let config = Config::default();
    let mut sim = Simulation::new(config, Integrator::default())?;

    mt_log!(
        Level::Info,
        "integrating {} s at dt = {} s",
        sim.total(),
        sim.dt
    );
    sim.run();
    mt_log!(
        Level::Info,
        "recorded {} samples, final energy {:.4} J",
        sim.trajectory().len(),
        sim.energy()
    );

    let out = Path::new("springy_pendulum.png");
    plot::render(sim.trajectory(), out)?;
    mt_log!(Level::Info, "wrote {}", out.display());

    mt_flush!().ok();
    Ok(())
}
