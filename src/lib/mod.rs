//! Recharge basin assessment.
//!
//! Estimates the hydrologic yield and the simple economics of a groundwater
//! recharge basin from a handful of farmer supplied parameters.
//! The calculator (`modules::recharge::functions::compute`) is a pure function;
//! results should always go through the parity stage
//! (`modules::recharge::models::evaluate`).

pub mod api;
pub mod constants;
pub mod helpers;
pub mod models;
pub mod modules;
pub mod version;

#[cfg(feature = "python-bindings")]
pub mod python;

pub use models::{input::RechargeInput, output::RechargeOutput};
pub use modules::recharge::{
    config::ParityFactors,
    functions::compute,
    models::{adjust, evaluate},
};
