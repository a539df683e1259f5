//! Progress and diagnostics printed to the terminal

use colored::Colorize;

use crate::trajectory::{Residuals, Trajectory};

/// Prints the pulse and grid parameters
pub fn print_setup(traj: &Trajectory) {
    let pulse = &traj.pulse;
    println!(
        "{} trajectory for a0 = {}, tau = {} [{:.2} periods], centred at phase {}...",
        "Computing".bold().cyan(),
        format!("{:.3}", pulse.a0()).bold(),
        format!("{:.3}", pulse.duration()).bold(),
        pulse.duration() / (2.0 * std::f64::consts::PI),
        format!("{:.3}", pulse.centre()).bold(),
    );
    let phase = traj.grid.phase();
    let n = traj.len();
    if n > 0 {
        println!(
            "\t* grid of {} points from {:.3} to {:.3}, step = {:.3e}",
            n, phase[0], phase[n - 1], traj.grid.step(),
        );
    }
}

/// Prints the final state of the particle and the residuals
/// of the analytic solution
pub fn print_summary(traj: &Trajectory) {
    if !traj.is_finite() {
        eprintln!(
            "{}: non-finite values were produced (is the pulse duration zero?), continuing anyway.",
            "Warning".bold().yellow(),
        );
    }

    println!("\t* peak gamma = {:.6}", traj.max_gamma());

    if let Some((numerical, analytic)) = traj.final_positions() {
        println!(
            "\t* final x = {:.6e} [analytic {:.6e}], final z = {:.6e} [analytic {:.6e}]",
            numerical[0], analytic[0], numerical[1], analytic[1],
        );
    }
    println!("\t* net drift across the pulse = {:.6e}", -traj.pulse.net_drift());

    let res = traj.residuals();
    println!("\t* max |x - xan| = {:.3e}, max |z - zan| = {:.3e}", res.x, res.z);
}

/// Prints the residuals obtained at each grid size, and, if available,
/// the empirical order of the quadrature
pub fn print_convergence(rows: &[(usize, Residuals)], order: Option<f64>) {
    if rows.is_empty() {
        return;
    }

    println!("{} numerical and analytic solutions:", "Comparing".bold().cyan());
    println!("\t{: >10} {: >12} {: >12}", "points", "max |dx|", "max |dz|");
    for (n, res) in rows.iter() {
        println!("\t{: >10} {: >12.3e} {: >12.3e}", n, res.x, res.z);
    }

    if let Some(order) = order {
        println!("\t* quadrature converges at order {:.2}", order);
    }
}
