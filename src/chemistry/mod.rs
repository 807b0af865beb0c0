//! Titration equilibrium engine for a diprotic amino acid.
//!
//! Maps vessel composition (analyte, strong base, volume) to pH:
//! - [`constants`]: pKa values and the isoelectric point
//! - [`species`]: partition of the analyte into H2A / HA / A
//! - [`equilibrium`]: piecewise point-pH solver
//! - [`curve`]: pH vs. titrant volume sampling
//!
//! All functions are pure; nothing here holds state between queries.

pub mod constants;
pub mod curve;
pub mod equilibrium;
pub mod species;

pub use constants::{AcidConstants, PKW};
pub use curve::{CurveIter, CurveSample, TitrationCurve, DEFAULT_CURVE_SAMPLES};
pub use equilibrium::{EquilibriumSolver, PhFormula, PhReading, LOG_EPSILON, NEUTRAL_PH};
pub use species::{SpeciesConcentrations, SpeciesDistribution, TitrationRegion};
