//! Reagents available on the bench.

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::Serialize;

/// Bottle the user pours from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reagent {
    /// Glycine vial (analyte)
    Glycine,
    /// NaOH bottle at the titrant molarity
    SodiumHydroxide,
    /// Distilled water (diluent)
    Water,
}

impl fmt::Display for Reagent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reagent::Glycine => "glycine",
            Reagent::SodiumHydroxide => "NaOH",
            Reagent::Water => "water",
        };
        f.write_str(name)
    }
}

impl FromStr for Reagent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glycine" | "gly" => Ok(Reagent::Glycine),
            "naoh" | "base" => Ok(Reagent::SodiumHydroxide),
            "water" | "h2o" => Ok(Reagent::Water),
            other => Err(anyhow!("unknown reagent: {:?}", other)),
        }
    }
}

/// What a pour did to the beaker
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PourOutcome {
    pub reagent: Reagent,
    /// Volume poured (mL)
    pub volume_mL: f64,
    /// Solute delivered (mmol); zero for water
    pub amount_mmol: f64,
    /// pH after the pour
    pub ph: f64,
}
