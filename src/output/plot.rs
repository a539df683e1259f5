//! Comparison of the numerical and analytic solutions, drawn
//! as four side-by-side panels in an SVG file

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use ndarray::prelude::*;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::trajectory::Trajectory;
use super::OutputError;

const PANEL_SIZE: (u32, u32) = (560, 480);
const NUMERICAL: u32 = 2;
const ANALYTIC: u32 = 1;

/// Writes the figure for `traj` to `path`, creating the parent
/// directory if necessary. The panels are:
/// 1. x and z (right axis) against phase, with the drift,
/// 2. x against z - drift,
/// 3. px and pz (right axis) against phase,
/// 4. px against pz.
///
/// Points that are not finite are skipped.
pub fn render(traj: &Trajectory, path: &Path) -> Result<(), OutputError> {
    let name = path.display().to_string();

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .map_err(|_| OutputError::Directory(dir.display().to_string()))?;
    }

    let size = (4 * PANEL_SIZE.0, PANEL_SIZE.1);
    let root = SVGBackend::new(path, size).into_drawing_area();

    draw_all(traj, &root)
        .and_then(|_| root.present().map_err(|e| e.into()))
        .map_err(|e| OutputError::draw(&name, &*e))
}

fn draw_all<DB>(traj: &Trajectory, root: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
where DB: DrawingBackend, DB::ErrorType: 'static {
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 4));

    positions(traj, &panels[0])?;
    orbit(traj, &panels[1])?;
    momenta(traj, &panels[2])?;
    momentum_space(traj, &panels[3])?;

    Ok(())
}

/// Pairs up the finite elements of `x` and `y`
fn finite_points<'a>(x: ArrayView1<'a, f64>, y: ArrayView1<'a, f64>) -> impl Iterator<Item = (f64, f64)> + 'a {
    x.into_iter()
        .zip(y.into_iter())
        .map(|(&x, &y)| (x, y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
}

/// Axis range covering every finite value, with a small margin.
/// Degenerate ranges are widened so that they can still be drawn.
fn span<'a, I>(values: I) -> Range<f64> where I: IntoIterator<Item = &'a f64> {
    let (min, max) = values.into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| (min.min(v), max.max(v)));

    if min > max {
        // nothing finite to draw
        -1.0..1.0
    } else if max > min {
        let pad = 0.05 * (max - min);
        (min - pad)..(max + pad)
    } else {
        let pad = 0.5 * min.abs().max(1.0);
        (min - pad)..(max + pad)
    }
}

fn legend(colour: RGBColor) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
}

fn positions<DB>(traj: &Trajectory, area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
where DB: DrawingBackend, DB::ErrorType: 'static {
    let phase = traj.grid.phase();
    let sol = &traj.analytic;

    let mut chart = ChartBuilder::on(area)
        .caption("position", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(span(phase), span(traj.x.iter().chain(sol.x.iter())))?
        .set_secondary_coord(span(phase), span(traj.z.iter().chain(sol.z.iter()).chain(sol.drift.iter())));

    chart.configure_mesh()
        .disable_mesh()
        .x_desc("ξ")
        .y_desc("x")
        .draw()?;

    chart.configure_secondary_axes()
        .y_desc("z")
        .draw()?;

    chart.draw_series(LineSeries::new(finite_points(phase, traj.x.view()), BLUE.stroke_width(NUMERICAL)))?
        .label("x")
        .legend(legend(BLUE));

    chart.draw_series(LineSeries::new(finite_points(phase, sol.x.view()), BLACK.stroke_width(ANALYTIC)))?
        .label("x (analytic)")
        .legend(legend(BLACK));

    chart.draw_secondary_series(LineSeries::new(finite_points(phase, traj.z.view()), RED.stroke_width(NUMERICAL)))?
        .label("z")
        .legend(legend(RED));

    chart.draw_secondary_series(LineSeries::new(finite_points(phase, sol.z.view()), MAGENTA.stroke_width(ANALYTIC)))?
        .label("z (analytic)")
        .legend(legend(MAGENTA));

    chart.draw_secondary_series(LineSeries::new(finite_points(phase, sol.drift.view()), GREEN.stroke_width(ANALYTIC)))?
        .label("drift")
        .legend(legend(GREEN));

    chart.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn orbit<DB>(traj: &Trajectory, area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
where DB: DrawingBackend, DB::ErrorType: 'static {
    let sol = &traj.analytic;
    let z = &traj.z - &sol.drift;
    let z_an = &sol.z - &sol.drift;

    let mut chart = ChartBuilder::on(area)
        .caption("drift frame", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(span(z.iter().chain(z_an.iter())), span(traj.x.iter().chain(sol.x.iter())))?;

    chart.configure_mesh()
        .disable_mesh()
        .x_desc("z - drift")
        .y_desc("x")
        .draw()?;

    chart.draw_series(LineSeries::new(finite_points(z.view(), traj.x.view()), BLUE.stroke_width(NUMERICAL)))?
        .label("numerical")
        .legend(legend(BLUE));

    chart.draw_series(LineSeries::new(finite_points(z_an.view(), sol.x.view()), BLACK.stroke_width(ANALYTIC)))?
        .label("analytic")
        .legend(legend(BLACK));

    chart.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn momenta<DB>(traj: &Trajectory, area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
where DB: DrawingBackend, DB::ErrorType: 'static {
    let phase = traj.grid.phase();
    let u = &traj.momenta;

    let mut chart = ChartBuilder::on(area)
        .caption("momentum", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(span(phase), span(u.px.iter()))?
        .set_secondary_coord(span(phase), span(u.pz.iter()));

    chart.configure_mesh()
        .disable_mesh()
        .x_desc("ξ")
        .y_desc("px")
        .draw()?;

    chart.configure_secondary_axes()
        .y_desc("pz")
        .draw()?;

    chart.draw_series(LineSeries::new(finite_points(phase, u.px.view()), BLUE.stroke_width(NUMERICAL)))?
        .label("px")
        .legend(legend(BLUE));

    chart.draw_secondary_series(LineSeries::new(finite_points(phase, u.pz.view()), RED.stroke_width(NUMERICAL)))?
        .label("pz")
        .legend(legend(RED));

    chart.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn momentum_space<DB>(traj: &Trajectory, area: &DrawingArea<DB, Shift>) -> Result<(), Box<dyn Error>>
where DB: DrawingBackend, DB::ErrorType: 'static {
    let u = &traj.momenta;

    let mut chart = ChartBuilder::on(area)
        .caption("momentum space", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(span(u.pz.iter()), span(u.px.iter()))?;

    chart.configure_mesh()
        .disable_mesh()
        .x_desc("pz")
        .y_desc("px")
        .draw()?;

    chart.draw_series(LineSeries::new(finite_points(u.pz.view(), u.px.view()), BLUE.stroke_width(NUMERICAL)))?;

    Ok(())
}
