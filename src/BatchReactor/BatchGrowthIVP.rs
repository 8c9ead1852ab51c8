//! # Batch Growth IVP Module
//!
//! This module provides the simulation core for microbial growth on a substrate in a
//! batch reactor. It owns the ODE definition and drives numerical integration across a
//! user-provided time grid, producing biomass and substrate trajectories.
//!
//! ## Main Structures
//!
//! - **`BatchGrowthTask`**: main modeling structure that aggregates parameters, time grid,
//!   symbolic equations and solver settings
//! - **`GrowthParameters`**: strongly typed parameter record with documented positional
//!   order `[mu, K, b, Y, C_M_ini, C_S_ini]`
//! - **`Trajectory`**: parallel `time`/`C_M`/`C_S` sequences, one entry per requested
//!   time point
//! - **`KineticsError`**: error taxonomy of the crate
//!
//! ## Key Features
//!
//! - **Multiple solver backends**: BDF by default (the kinetics can be stiff for large
//!   `mu` or small `K`), Radau, BackwardEuler and the non-stiff RK family selectable
//! - **Exact grid reporting**: the driver marches segment by segment across the grid,
//!   carrying the state between segments, so reported values land exactly on the
//!   requested time points and `(C_M[0], C_S[0])` equal the initial concentrations
//!   with no drift
//! - **No hidden validation**: only the parameter count and the time grid are checked;
//!   `Y == 0` or `K + C_S == 0` propagate as non-finite values rather than being
//!   rejected up front
//!
//! ## Usage Pattern
//! 1. `new()` -> `set_parameters()` -> `set_time_grid()`
//! 2. `solve()` -> `get_trajectory()` or `save_result()`
//!
//! or the one-call form [`simulate_batch_growth`] for positional-array callers.

use RustedSciThe::numerical::ODE_api2::{SolverParam, SolverType, UniversalODESolver};
use RustedSciThe::symbolic::symbolic_engine::Expr;
use log::info;
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Number of entries expected in a positional growth-parameter array
pub const N_GROWTH_PARAMETERS: usize = 6;

/// Error taxonomy of the kinetics models
///
/// All failures propagate synchronously to the caller; there is no retry, no fallback
/// model and no partial-result suppression. Non-finite values in trajectories are NOT
/// errors (the models do not pre-validate `Y != 0` or `K + C > 0`).
#[derive(Debug, Error)]
pub enum KineticsError {
    /// Positional parameter array is too short; raised before any computation
    #[error("wrong number of parameters provided: expected at least {expected}, got {got}")]
    InvalidParameterCount { expected: usize, got: usize },
    /// Empty or decreasing time grid; the forward-marching driver cannot use it
    #[error("invalid time grid: {0}")]
    InvalidTimeGrid(String),
    /// The solver could not reach a requested grid point
    #[error("integration failure: {0}")]
    IntegrationFailure(String),
    /// Task is not configured completely
    #[error("missing data: {0}")]
    MissingData(String),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Parameters of the batch growth model
///
/// Positional order for array callers: `[mu, K, b, Y, C_M_ini, C_S_ini]`. Inside the
/// crate the fields are always accessed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthParameters {
    /// Maximum specific growth rate of microorganisms (1/time)
    pub mu: f64,
    /// Half-saturation concentration of growth rate with respect to substrate
    pub K: f64,
    /// Rate of death and respiration processes of microorganisms (1/time)
    pub b: f64,
    /// Yield of the growth process (biomass produced per substrate consumed)
    pub Y: f64,
    /// Initial concentration of microorganisms
    pub C_M_ini: f64,
    /// Initial concentration of substrate
    pub C_S_ini: f64,
}

impl GrowthParameters {
    pub fn new(mu: f64, K: f64, b: f64, Y: f64, C_M_ini: f64, C_S_ini: f64) -> Self {
        Self {
            mu,
            K,
            b,
            Y,
            C_M_ini,
            C_S_ini,
        }
    }

    /// Construct from a positional array `[mu, K, b, Y, C_M_ini, C_S_ini]`
    ///
    /// Entries beyond the sixth are ignored.
    pub fn from_slice(par: &[f64]) -> Result<Self, KineticsError> {
        if par.len() < N_GROWTH_PARAMETERS {
            return Err(KineticsError::InvalidParameterCount {
                expected: N_GROWTH_PARAMETERS,
                got: par.len(),
            });
        }
        Ok(Self {
            mu: par[0],
            K: par[1],
            b: par[2],
            Y: par[3],
            C_M_ini: par[4],
            C_S_ini: par[5],
        })
    }

    /// Positional array form, inverse of [`GrowthParameters::from_slice`]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.mu, self.K, self.b, self.Y, self.C_M_ini, self.C_S_ini]
    }
}

/// Solved concentrations at the requested time points
///
/// `time` echoes the input grid verbatim; `C_M` and `C_S` hold the solved biomass and
/// substrate concentrations in the same order, so all three sequences always have equal
/// length. `C_M[0]` and `C_S[0]` equal the supplied initial concentrations exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub C_M: Vec<f64>,
    pub C_S: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn to_json(&self) -> Result<String, KineticsError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    pub fn from_json(contents: &str) -> Result<Self, KineticsError> {
        let trajectory = serde_json::from_str(contents)?;
        Ok(trajectory)
    }
}

/// Main modeling structure for the batch growth simulation
///
/// Aggregates the growth parameters, the time grid, the symbolic ODE system and the
/// solver configuration; the pipeline is strictly validate -> integrate -> package,
/// with no state shared between calls.
pub struct BatchGrowthTask {
    /// Optional problem identifier
    pub problem_name: Option<String>,
    /// Optional problem description
    pub problem_description: Option<String>,
    /// Growth model parameters
    pub params: Option<GrowthParameters>,
    /// Time points at which the trajectory is evaluated; the first point is the time
    /// origin corresponding to the initial state
    pub times: Vec<f64>,
    /// Type of numerical solver to use
    pub solvertype: SolverType,
    /// Numerical solver parameters (tolerances, step bounds, etc.)
    pub solver_params: HashMap<String, SolverParam>,
    /// Names of the state variables in the symbolic system
    pub unknowns: Vec<String>,
    /// System of differential equations dy/dt = f(t, y)
    pub eq_system: Vec<Expr>,
    /// Solution at the requested time points - filled by solve()
    pub trajectory: Option<Trajectory>,
}

impl Default for BatchGrowthTask {
    fn default() -> Self {
        Self::new(SolverType::BDF)
    }
}

impl BatchGrowthTask {
    /// Create a new task with default solver parameters and no problem data
    pub fn new(solvertype: SolverType) -> Self {
        let map_of_params = HashMap::from([
            ("step_size".to_owned(), SolverParam::Float(1e-3)),
            ("tolerance".to_owned(), SolverParam::Float(1e-6)),
            ("max_iterations".to_owned(), SolverParam::Int(100000)),
            ("rtol".to_owned(), SolverParam::Float(1e-6)),
            ("atol".to_owned(), SolverParam::Float(1e-8)),
            ("max_step".to_owned(), SolverParam::Float(0.1)),
            ("first_step".to_owned(), SolverParam::OptionalFloat(None)),
            ("vectorized".to_owned(), SolverParam::Bool(false)),
            ("jac_sparsity".to_owned(), SolverParam::OptionalMatrix(None)),
            ("parallel".to_owned(), SolverParam::Bool(false)),
        ]);
        Self {
            problem_name: None,
            problem_description: None,
            params: None,
            times: Vec::new(),
            solvertype,
            solver_params: map_of_params,
            unknowns: Vec::new(),
            eq_system: Vec::new(),
            trajectory: None,
        }
    }

    /////////////////////////////////SETTERS////////////////////////////////////////////////

    /// Set problem name for identification
    pub fn set_problem_name(&mut self, name: &str) {
        self.problem_name = Some(name.to_string());
    }

    /// Set problem description
    pub fn set_problem_description(&mut self, description: &str) {
        self.problem_description = Some(description.to_string());
    }

    /// Set the growth parameters from the typed record
    pub fn set_parameters(&mut self, params: GrowthParameters) {
        self.params = Some(params);
    }

    /// Set the growth parameters from a positional array `[mu, K, b, Y, C_M_ini, C_S_ini]`
    pub fn set_parameters_from_slice(&mut self, par: &[f64]) -> Result<(), KineticsError> {
        let params = GrowthParameters::from_slice(par)?;
        self.params = Some(params);
        Ok(())
    }

    /// Set the time grid; the first point is the time origin of the initial state
    pub fn set_time_grid(&mut self, times: Vec<f64>) {
        self.times = times;
    }

    /// Override the numerical solver parameters
    pub fn set_solver_params(&mut self, params: HashMap<String, SolverParam>) {
        self.solver_params = params;
    }

    ///////////////////////////////////VALIDATION////////////////////////////////////////////

    /// Validate the task configuration
    ///
    /// Checks that parameters and a usable time grid are present. Deliberately does NOT
    /// check `Y != 0`, `K > 0` or sign of the rates: those surface as non-finite values
    /// or as solver failures, matching the no-pre-validation contract of the model.
    pub fn check_task(&self) -> Result<(), KineticsError> {
        if self.params.is_none() {
            return Err(KineticsError::MissingData(
                "growth parameters not set".to_string(),
            ));
        }
        if self.times.is_empty() {
            return Err(KineticsError::InvalidTimeGrid(
                "time grid is empty".to_string(),
            ));
        }
        for w in self.times.windows(2) {
            if w[1] < w[0] {
                return Err(KineticsError::InvalidTimeGrid(format!(
                    "time grid must be non-decreasing, got {} after {}",
                    w[1], w[0]
                )));
            }
        }
        Ok(())
    }

    ////////////////////////////////////SOLVING//////////////////////////////////////////////

    /// Solve the growth ODE system across the time grid
    ///
    /// Pipeline: validate -> assemble symbolic RHS -> integrate segment by segment ->
    /// package the [`Trajectory`]. The initial state is reported at the first grid point
    /// without solver involvement; every following grid point is the endpoint of one
    /// integration segment, so the output length always equals the grid length.
    pub fn solve(&mut self) -> Result<(), KineticsError> {
        self.check_task()?;
        self.create_growth_equations()?;

        let params = self
            .params
            .as_ref()
            .ok_or_else(|| KineticsError::MissingData("growth parameters not set".to_string()))?;

        let n = self.times.len();
        let mut C_M: Vec<f64> = Vec::with_capacity(n);
        let mut C_S: Vec<f64> = Vec::with_capacity(n);

        let mut state = DVector::from_vec(vec![params.C_M_ini, params.C_S_ini]);
        C_M.push(state[0]);
        C_S.push(state[1]);

        for w in self.times.windows(2) {
            let (t0, t1) = (w[0], w[1]);
            if t1 == t0 {
                // repeated time point, state unchanged
                C_M.push(state[0]);
                C_S.push(state[1]);
                continue;
            }
            state = self.integrate_segment(state, t0, t1)?;
            C_M.push(state[0]);
            C_S.push(state[1]);
        }

        self.trajectory = Some(Trajectory {
            time: self.times.clone(),
            C_M,
            C_S,
        });
        info!("batch growth trajectory computed at {} time points", n);
        Ok(())
    }

    /// Integrate one grid segment `[t0, t1]` starting from `state`
    ///
    /// The solver must land on `t1`; stopping short is an integration failure, never a
    /// silently truncated trajectory.
    fn integrate_segment(
        &self,
        state: DVector<f64>,
        t0: f64,
        t1: f64,
    ) -> Result<DVector<f64>, KineticsError> {
        let mut ode = UniversalODESolver::new(
            self.eq_system.clone(),
            self.unknowns.clone(),
            "t".to_owned(),
            self.solvertype.clone(),
            t0,
            state,
            t1,
        );
        ode.set_parameters(self.solver_params.clone());
        ode.initialize();
        ode.solve();

        let (t_res, y_res) = ode.get_result();
        let t_res = t_res.ok_or_else(|| {
            KineticsError::IntegrationFailure(format!(
                "solver returned no time mesh on [{}, {}]",
                t0, t1
            ))
        })?;
        let y_res = y_res.ok_or_else(|| {
            KineticsError::IntegrationFailure(format!(
                "solver returned no solution on [{}, {}]",
                t0, t1
            ))
        })?;
        if t_res.len() == 0 || y_res.nrows() == 0 {
            return Err(KineticsError::IntegrationFailure(format!(
                "solver produced an empty solution on [{}, {}]",
                t0, t1
            )));
        }

        let t_end = t_res[t_res.len() - 1];
        if (t_end - t1).abs() > 1e-8 * (t1 - t0).abs().max(1.0) {
            return Err(KineticsError::IntegrationFailure(format!(
                "integration stalled at t = {:e} before reaching t = {:e}",
                t_end, t1
            )));
        }

        Ok(y_res.row(y_res.nrows() - 1).transpose())
    }

    ////////////////////////////////////RESULTS//////////////////////////////////////////////

    /// Get reference to the solved trajectory
    ///
    /// Returns None if solve hasn't been called yet
    pub fn get_trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    /// Save the solved trajectory to a JSON file
    pub fn save_result(&self, path: &str) -> Result<(), KineticsError> {
        let trajectory = self.trajectory.as_ref().ok_or_else(|| {
            KineticsError::MissingData("no trajectory: call solve() first".to_string())
        })?;
        let json = trajectory.to_json()?;
        std::fs::write(path, json)?;
        info!("trajectory saved to {}", path);
        Ok(())
    }
}

/// One-call simulation for positional-array callers
///
/// `par` = `[mu, K, b, Y, C_M_ini, C_S_ini]` (extra entries ignored, fewer is
/// [`KineticsError::InvalidParameterCount`]), `times` = the evaluation grid whose first
/// point is the time origin. Uses the default BDF solver.
pub fn simulate_batch_growth(par: &[f64], times: &[f64]) -> Result<Trajectory, KineticsError> {
    let mut task = BatchGrowthTask::new(SolverType::BDF);
    task.set_parameters_from_slice(par)?;
    task.set_time_grid(times.to_vec());
    task.solve()?;
    task.trajectory
        .ok_or_else(|| KineticsError::MissingData("solver produced no trajectory".to_string()))
}

/////////////////////////////////////////TESTS/////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_from_slice() {
        let par = [1.0, 0.5, 0.1, 0.4, 0.05, 20.0];
        let params = GrowthParameters::from_slice(&par).unwrap();
        assert_eq!(params.mu, 1.0);
        assert_eq!(params.K, 0.5);
        assert_eq!(params.b, 0.1);
        assert_eq!(params.Y, 0.4);
        assert_eq!(params.C_M_ini, 0.05);
        assert_eq!(params.C_S_ini, 20.0);
        assert_eq!(params.to_vec(), par.to_vec());
    }

    #[test]
    fn test_parameters_extra_entries_ignored() {
        let par = [1.0, 0.5, 0.1, 0.4, 0.05, 20.0, 999.0];
        let params = GrowthParameters::from_slice(&par).unwrap();
        assert_eq!(params.C_S_ini, 20.0);
    }

    #[test]
    fn test_wrong_parameter_count() {
        let par = [1.0, 0.5, 0.1, 0.4, 0.05];
        let result = GrowthParameters::from_slice(&par);
        assert!(result.is_err());
        match result {
            Err(KineticsError::InvalidParameterCount { expected, got }) => {
                assert_eq!(expected, 6);
                assert_eq!(got, 5);
            }
            _ => panic!("expected InvalidParameterCount"),
        }
    }

    #[test]
    fn test_simulate_with_short_parameter_array() {
        let result = simulate_batch_growth(&[1.0, 1.0, 0.1, 0.5, 0.1], &[0.0, 1.0]);
        assert!(matches!(
            result,
            Err(KineticsError::InvalidParameterCount { .. })
        ));
    }

    #[test]
    fn test_check_task_no_parameters() {
        let task = BatchGrowthTask::new(SolverType::BDF);
        let result = task.check_task();
        match result {
            Err(KineticsError::MissingData(msg)) => {
                assert!(msg.contains("parameters"));
            }
            _ => panic!("expected MissingData"),
        }
    }

    #[test]
    fn test_check_task_empty_grid() {
        let mut task = BatchGrowthTask::new(SolverType::BDF);
        task.set_parameters(GrowthParameters::new(1.0, 1.0, 0.1, 0.5, 0.1, 10.0));
        let result = task.check_task();
        assert!(matches!(result, Err(KineticsError::InvalidTimeGrid(_))));
    }

    #[test]
    fn test_check_task_backward_grid() {
        let mut task = BatchGrowthTask::new(SolverType::BDF);
        task.set_parameters(GrowthParameters::new(1.0, 1.0, 0.1, 0.5, 0.1, 10.0));
        task.set_time_grid(vec![0.0, 2.0, 1.0]);
        let result = task.check_task();
        assert!(matches!(result, Err(KineticsError::InvalidTimeGrid(_))));
    }

    #[test]
    fn test_solve_without_setup() {
        let mut task = BatchGrowthTask::new(SolverType::BDF);
        let result = task.solve();
        assert!(result.is_err());
        assert!(task.get_trajectory().is_none());
    }

    #[test]
    fn test_save_result_without_solve() {
        let task = BatchGrowthTask::new(SolverType::BDF);
        let result = task.save_result("unused.json");
        match result {
            Err(KineticsError::MissingData(msg)) => assert!(msg.contains("solve")),
            _ => panic!("expected MissingData"),
        }
    }

    #[test]
    fn test_trajectory_json_round_trip() {
        let trajectory = Trajectory {
            time: vec![0.0, 1.0, 2.0],
            C_M: vec![0.1, 0.2, 0.4],
            C_S: vec![10.0, 9.8, 9.4],
        };
        let json = trajectory.to_json().unwrap();
        // key names match the positional-caller convention
        assert!(json.contains("\"C_M\""));
        assert!(json.contains("\"C_S\""));
        assert!(json.contains("\"time\""));
        let restored = Trajectory::from_json(&json).unwrap();
        assert_eq!(restored, trajectory);
    }
}
