//! # Batch Reactor Module
//!
//! Simulation of microbial growth on a single limiting substrate in a closed (batch)
//! reactor: no inflow or outflow during the simulated interval, the state changes only
//! through the internal reaction kinetics.
//!
//! ## Mathematical Model
//!
//! ### Nomenclature
//!
//! | Symbol | Description | Units |
//! |--------|-------------|-------|
//! | `C_M` | Biomass concentration | mass/volume |
//! | `C_S` | Substrate concentration | mass/volume |
//! | `mu` | Maximum specific growth rate | 1/time |
//! | `K` | Half-saturation concentration | mass/volume |
//! | `b` | Death and respiration rate | 1/time |
//! | `Y` | Yield coefficient (biomass per substrate) | - |
//!
//! ### Governing Equations
//!
//! ```text
//! dC_M/dt = mu * C_S/(K + C_S) * C_M - b * C_M
//! dC_S/dt = -(1/Y) * mu * C_S/(K + C_S) * C_M
//! ```
//!
//! The Monod uptake factor `C_S/(K + C_S)` saturates toward 1 for `C_S >> K`, so biomass
//! grows near-exponentially at rate `mu - b` while substrate is abundant and growth stops
//! as the substrate depletes. For `b = 0` the quantity `C_M + Y*C_S` is conserved.
//!
//! ## Numerical Solution
//!
//! The system forms an initial value problem of 2 first-order ODEs which can be stiff for
//! large `mu` or small `K`. Solutions are obtained with adaptive, accuracy-controlled
//! integrators (BDF by default) from the [RustedSciThe](https://crates.io/crates/RustedSciThe)
//! package; the solution is reported exactly at the user-requested time grid points.

pub mod BatchGrowthIVP;
pub mod BatchGrowthIVP2;
/// symbolic right-hand side assembly
pub mod createRHS;
