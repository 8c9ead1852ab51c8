//! # Pretty Printing Module for Batch Growth Tasks
//!
//! Formatted output methods for displaying the task configuration, the assembled
//! equations and the solved trajectory, using prettytable for tabular presentation.

use super::BatchGrowthIVP::BatchGrowthTask;

impl BatchGrowthTask {
    /// Displays a summary of the growth task: parameters, time grid and solver setup
    pub fn pretty_print_task(&self) {
        use prettytable::{Table, row};

        println!("\n=== BATCH GROWTH TASK SUMMARY ===");

        println!("Problem Name: {:?}", self.problem_name);
        println!("Problem Description: {:?}", self.problem_description);

        if let Some(params) = &self.params {
            let mut table = Table::new();
            table.add_row(row!["Parameter", "Value", "Units"]);
            table.add_row(row!["Max growth rate (mu)", format!("{:.6}", params.mu), "1/time"]);
            table.add_row(row![
                "Half-saturation (K)",
                format!("{:.6}", params.K),
                "conc"
            ]);
            table.add_row(row!["Death/respiration (b)", format!("{:.6}", params.b), "1/time"]);
            table.add_row(row!["Yield (Y)", format!("{:.6}", params.Y), "-"]);
            table.add_row(row![
                "Initial biomass (C_M_ini)",
                format!("{:.6}", params.C_M_ini),
                "conc"
            ]);
            table.add_row(row![
                "Initial substrate (C_S_ini)",
                format!("{:.6}", params.C_S_ini),
                "conc"
            ]);
            println!("\nGrowth Parameters:");
            table.printstd();
        } else {
            println!("\nGrowth Parameters: not set");
        }

        if self.times.is_empty() {
            println!("\nTime Grid: not set");
        } else {
            println!(
                "\nTime Grid: {} points on [{}, {}]",
                self.times.len(),
                self.times[0],
                self.times[self.times.len() - 1]
            );
        }
    }

    /// Displays the assembled ODE system
    ///
    /// Prints nothing useful before `solve()` or `create_growth_equations()` was called
    pub fn pretty_print_equations(&self) {
        println!("\nODE system:");
        for (unknown, eq) in self.unknowns.iter().zip(self.eq_system.iter()) {
            println!("  d{}/dt = {}", unknown, eq);
        }
    }

    /// Debug print of the solved trajectory: first and last few values of each variable
    pub fn debug_trajectory(&self) {
        if let Some(trajectory) = &self.trajectory {
            println!("\n=== TRAJECTORY DEBUG ===");
            let n = trajectory.len();
            println!("Trajectory length: {}", n);
            for (name, values) in [("C_M", &trajectory.C_M), ("C_S", &trajectory.C_S)] {
                if n >= 2 {
                    println!(
                        "{}: [first: {:.6}, {:.6}, ... last: {:.6}, {:.6}]",
                        name,
                        values[0],
                        values[1.min(n - 1)],
                        values[n - 2],
                        values[n - 1]
                    );
                } else if n == 1 {
                    println!("{}: [{:.6}]", name, values[0]);
                }
            }
            println!("=== END DEBUG ===\n");
        }
    }
}
