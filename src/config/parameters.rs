//! Parameter structures for the titration experiment.
//!
//! Chemical constants carry their source; experiment settings describe the
//! virtual bench (bottle strengths, pour sizes, burette).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::chemistry::{AcidConstants, DEFAULT_CURVE_SAMPLES};

/// Top-level parameters container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Dissociation constants of the analyte
    pub acid: AcidConstants,
    /// Bench setup
    pub experiment: ExperimentParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        Self::load_from_dir("data/parameters")
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let acid = load_json_or_default(dir.join("acid.json"), "acid");
        let experiment = load_json_or_default(dir.join("experiment.json"), "experiment");

        Self { acid, experiment }
    }
}

fn load_json_or_default<T, P>(path: P, label: &str) -> T
where
    T: for<'de> Deserialize<'de> + Default,
    P: AsRef<Path>,
{
    match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(params) => {
                log::info!("Loaded {} parameters from {:?}", label, path.as_ref());
                params
            }
            Err(e) => {
                log::warn!("Failed to parse {} parameters: {}, using defaults", label, e);
                T::default()
            }
        },
        Err(_) => {
            log::info!("{} parameters file not found, using defaults", label);
            T::default()
        }
    }
}

/// Virtual bench settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentParameters {
    /// Solvent in the beaker before any reagent (mL)
    pub initial_volume_mL: f64,

    /// Strong base (NaOH) bottle and burette concentration (M = mmol/mL)
    pub titrant_molarity_M: f64,

    /// Glycine in one full vial (mmol)
    pub glycine_vial_mmol: f64,

    /// Volume of a glycine pour when none is given (mL)
    pub default_glycine_pour_mL: f64,

    /// Volume of a NaOH pour when none is given (mL)
    pub default_naoh_pour_mL: f64,

    /// Volume of a water pour when none is given (mL)
    pub default_water_pour_mL: f64,

    /// Burette capacity (mL)
    pub burette_capacity_mL: f64,

    /// Fine burette increment (mL)
    pub burette_step_mL: f64,

    /// Burette increment per auto-titration tick (mL)
    pub auto_step_mL: f64,

    /// Samples in a preview titration curve
    pub curve_samples: usize,
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        Self {
            initial_volume_mL: 50.0,
            titrant_molarity_M: 0.1,
            glycine_vial_mmol: 10.0,
            default_glycine_pour_mL: 10.0,
            default_naoh_pour_mL: 1.0,
            default_water_pour_mL: 20.0,
            burette_capacity_mL: 50.0,
            burette_step_mL: 0.1,
            auto_step_mL: 0.2,
            curve_samples: DEFAULT_CURVE_SAMPLES,
        }
    }
}
