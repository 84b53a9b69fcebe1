//! Plotting collaborator: renders a finished trajectory.
//!
//! Pure consumer of the recorded positions; nothing here feeds back
//! into the integration loop.

use std::iter;
use std::ops::Range;
use std::path::Path;

use itertools::{Itertools, MinMaxResult};
use plotters::prelude::*;
use thiserror::Error;

use crate::trajectory::Trajectory;

const CANVAS: (u32, u32) = (800, 800);

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("cannot plot an empty trajectory")]
    EmptyTrajectory,

    #[error("rendering failed: {0}")]
    Render(String),
}

/// Draw the trajectory as a path and the pivot as a filled red dot on
/// equal-aspect axes, written as a PNG at `path`.
pub fn render(trajectory: &Trajectory, path: &Path) -> Result<(), PlotError> {
    if trajectory.is_empty() {
        return Err(PlotError::EmptyTrajectory);
    }
    draw(trajectory, path).map_err(|e| PlotError::Render(e.to_string()))
}

fn draw(trajectory: &Trajectory, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_range) = square_bounds(trajectory);

    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(x_range, y_range)?;
    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(
        trajectory.iter().map(|s| (s.x, s.y)),
        &BLUE,
    ))?;
    chart.draw_series(iter::once(Circle::new((0.0, 0.0), 4, RED.filled())))?;

    root.present()?;
    Ok(())
}

/// Equal-aspect bounds: both axes get the span of the wider one, so a
/// square canvas keeps x and y to the same scale. The pivot is always
/// in frame.
fn square_bounds(trajectory: &Trajectory) -> (Range<f64>, Range<f64>) {
    let (x_min, x_max) = spread(trajectory.iter().map(|s| s.x));
    let (y_min, y_max) = spread(trajectory.iter().map(|s| s.y));

    // 0.55: half the square span plus a 10% margin
    let half = 0.55 * (x_max - x_min).max(y_max - y_min).max(1e-3);
    let cx = 0.5 * (x_min + x_max);
    let cy = 0.5 * (y_min + y_max);

    (cx - half..cx + half, cy - half..cy + half)
}

/// Min and max of `values`, with the pivot folded in.
fn spread(values: impl Iterator<Item = f64>) -> (f64, f64) {
    match values.chain(iter::once(0.0)).minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => (0.0, 0.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    }
}
