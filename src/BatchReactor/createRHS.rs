//! # Growth RHS Creation Module
//!
//! Assembles the right-hand side of the batch growth ODE system in symbolic form.
//! The parameters are held by [`BatchGrowthTask`](super::BatchGrowthIVP::BatchGrowthTask)
//! and baked into the expressions as constants, which lets the solver differentiate
//! the system analytically for its Newton iterations.
//!
//! ## Equations
//!
//! ```text
//! dCM/dt = mu * CS/(K + CS) * CM - b * CM
//! dCS/dt = -(1/Y) * mu * CS/(K + CS) * CM
//! ```
//!
//! Both equations share the Monod uptake factor `mu * CS/(K + CS)`; for `CS >> K` it
//! saturates toward `mu`, for `CS -> 0` growth stops. No division guard is applied:
//! `K + CS == 0` or `Y == 0` yield non-finite expression values by design.

use super::BatchGrowthIVP::{BatchGrowthTask, KineticsError};
use RustedSciThe::symbolic::symbolic_engine::Expr;

impl BatchGrowthTask {
    /// Create the symbolic ODE system for the current parameters
    ///
    /// Populates:
    /// - `self.eq_system`: RHS expressions `[dCM/dt, dCS/dt]`
    /// - `self.unknowns`: variable names `["CM", "CS"]`
    ///
    /// Solver variable names carry no underscores.
    pub fn create_growth_equations(&mut self) -> Result<(), KineticsError> {
        let params = match &self.params {
            Some(params) => params,
            None => {
                return Err(KineticsError::MissingData(
                    "growth parameters not set".to_string(),
                ));
            }
        };

        let C_M = Expr::Var("CM".to_owned());
        let C_S = Expr::Var("CS".to_owned());

        let mu = Expr::Const(params.mu);
        let K = Expr::Const(params.K);
        let b = Expr::Const(params.b);
        let Y = Expr::Const(params.Y);

        // Monod uptake factor: mu*CS/(K + CS)
        let uptake = mu * C_S.clone() / (K + C_S.clone());

        let r_M = (uptake.clone() * C_M.clone() - b * C_M.clone()).simplify_();
        let r_S = (Expr::Const(-1.0) / Y * uptake * C_M).simplify_();

        self.unknowns = vec!["CM".to_owned(), "CS".to_owned()];
        self.eq_system = vec![r_M, r_S];
        Ok(())
    }
}
