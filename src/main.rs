use std::error::Error;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;

mod analytic;
mod field;
mod input;
mod kinematics;
mod output;
mod quadrature;
mod special_functions;
mod trajectory;

use field::*;
use input::*;
use trajectory::*;

fn main() -> Result<(), Box<dyn Error>> {
    println!("{} v{}", "pulse-drift".bold(), env!("CARGO_PKG_VERSION"));

    let setup = match std::env::args().nth(1) {
        Some(path) => {
            println!("{} configuration from {}...", "Reading".bold().cyan(), path.bold().blue());
            let mut config = Config::from_file(Path::new(&path))?;
            config.with_context("constants")?;
            Setup::from_config(&config)?
        },
        None => {
            println!("{} default parameters, pass an input file to change them.", "Using".bold().cyan());
            Setup::default()
        },
    };

    let start = Instant::now();

    let grid = PhaseGrid::with_extent(setup.pulse.duration(), setup.extent, setup.points);
    let traj = Trajectory::compute(&setup.pulse, &grid);
    output::print_setup(&traj);
    output::print_summary(&traj);

    if let Some(&smallest) = setup.convergence.iter().min() {
        let rows: Vec<(usize, Residuals)> = setup.convergence.iter()
            .map(|&n| {
                let grid = PhaseGrid::with_extent(setup.pulse.duration(), setup.extent, n);
                (n, Trajectory::compute(&setup.pulse, &grid).residuals())
            })
            .collect();
        let order = convergence_order(&setup.pulse, setup.extent, smallest);
        output::print_convergence(&rows, order);
    }

    println!("{} figure to {}...", "Rendering".bold().cyan(), setup.plot.display().to_string().bold().blue());
    output::render(&traj, &setup.plot)?;

    println!("{} in {:.3?}.", "Completed".bold().bright_green(), start.elapsed());

    Ok(())
}
