//! Glycine Titration - acid-base titration engine for a diprotic amino acid
//!
//! Computes solution pH while strong base is added to glycine, and samples
//! full titration curves for preview.

// Allow non-snake-case for unit suffixes in field names (mL, mmol, M, pKa1, etc.)
// This follows the project convention of including units in names.
#![allow(non_snake_case)]

pub mod chemistry;
pub mod config;
pub mod export;
pub mod session;
pub mod state;

pub use chemistry::{
    AcidConstants, CurveSample, EquilibriumSolver, PhFormula, PhReading, SpeciesDistribution,
    TitrationCurve, TitrationRegion, DEFAULT_CURVE_SAMPLES, NEUTRAL_PH,
};
pub use config::{ExperimentParameters, Parameters};
pub use session::{ExperimentSession, Reading, Reagent};
pub use state::SolutionState;
