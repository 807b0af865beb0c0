//! Configuration module for loading experiment parameters.

mod parameters;

pub use parameters::{ExperimentParameters, Parameters};
