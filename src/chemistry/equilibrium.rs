//! Point pH of a glycine solution partially neutralized by strong base.
//!
//! The species partition selects one of five closed-form approximations:
//!
//! | Species present        | Formula                                   |
//! |------------------------|-------------------------------------------|
//! | H2A and HA             | pH = pKa1 + log10(HA / H2A)               |
//! | HA and A               | pH = pKa2 + log10(A / HA)                 |
//! | HA only                | pH = (pKa1 + pKa2) / 2                    |
//! | A only, excess base    | pH = pKw + log10([OH⁻])                   |
//! | H2A only, no base      | pH = -log10(sqrt(Ka1 · c))                |
//!
//! Anything else, or a non-finite result, reads as neutral pH 7.0.
//!
//! The formulas do not join continuously at the equivalence points; this is
//! inherent to the piecewise model and is reproduced as-is.
//!
//! References:
//! - Henderson LJ. Am J Physiol. 1908;21:173-179 (buffer equation)
//! - Harris DC. Quantitative Chemical Analysis. 2015, ch. 10 (diprotic titrations)

use serde::Serialize;

use super::constants::{AcidConstants, PKW};
use super::species::SpeciesDistribution;
use crate::state::SolutionState;

/// Guard added to concentrations inside the buffer logarithms
pub const LOG_EPSILON: f64 = 1e-16;

/// pH reported when no formula applies or the result is undefined
pub const NEUTRAL_PH: f64 = 7.0;

/// Which approximation produced a pH value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhFormula {
    /// H2A/HA buffer around pKa1
    FirstBuffer,
    /// HA/A buffer around pKa2
    SecondBuffer,
    /// Exactly at the first equivalence point
    Isoelectric,
    /// Strong-base excess past the second equivalence point
    ExcessBase,
    /// Weak monoprotic acid, nothing added yet
    WeakAcid,
    /// No formula applied or result was not finite
    NeutralFallback,
}

/// pH value together with the formula that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhReading {
    pub ph: f64,
    pub formula: PhFormula,
}

/// Stateless pH solver for a diprotic acid
///
/// # Example
/// ```
/// use glycine_titration::chemistry::{EquilibriumSolver, PhFormula};
///
/// let solver = EquilibriumSolver::default();
///
/// // First equivalence point sits at the isoelectric point
/// let reading = solver.evaluate(10.0, 10.0, 60.0);
/// assert_eq!(reading.formula, PhFormula::Isoelectric);
/// assert!((reading.ph - 5.97).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EquilibriumSolver {
    pub constants: AcidConstants,
}

impl EquilibriumSolver {
    pub fn new(constants: AcidConstants) -> Self {
        Self { constants }
    }

    /// pH of a solution state snapshot
    pub fn ph(&self, state: &SolutionState) -> f64 {
        self.ph_from_amounts(state.analyte_mmol(), state.titrant_mmol(), state.volume_mL())
    }

    /// pH from analyte (mmol), strong base (mmol) and total volume (mL)
    pub fn ph_from_amounts(&self, analyte_mmol: f64, titrant_mmol: f64, volume_mL: f64) -> f64 {
        self.evaluate(analyte_mmol, titrant_mmol, volume_mL).ph
    }

    /// Isoelectric point of the configured acid
    pub fn isoelectric_point(&self) -> f64 {
        self.constants.isoelectric_point()
    }

    /// Compute pH and report which formula was used
    ///
    /// Never fails: malformed input (negative amounts, zero or negative
    /// volume) yields the neutral fallback.
    pub fn evaluate(&self, analyte_mmol: f64, titrant_mmol: f64, volume_mL: f64) -> PhReading {
        let AcidConstants { pKa1, pKa2 } = self.constants;
        let n_oh = titrant_mmol;
        let n_gly = analyte_mmol;

        let species = SpeciesDistribution::from_amounts(n_gly, n_oh);
        let c = species.concentrations(volume_mL);
        let (c_H2A, c_HA, c_A) = (c.c_H2A_M, c.c_HA_M, c.c_A_M);

        let (ph, formula) = if c_H2A > 0.0 && c_HA > 0.0 {
            (
                pKa1 + ((c_HA + LOG_EPSILON) / (c_H2A + LOG_EPSILON)).log10(),
                PhFormula::FirstBuffer,
            )
        } else if c_HA > 0.0 && c_A > 0.0 {
            (
                pKa2 + ((c_A + LOG_EPSILON) / (c_HA + LOG_EPSILON)).log10(),
                PhFormula::SecondBuffer,
            )
        } else if c_HA > 0.0 && c_H2A == 0.0 && c_A == 0.0 {
            (0.5 * (pKa1 + pKa2), PhFormula::Isoelectric)
        } else if c_A > 0.0 && n_oh > 2.0 * n_gly {
            let excess_oh_mmol = n_oh - 2.0 * n_gly;
            let c_OH = (excess_oh_mmol / 1000.0) / (volume_mL / 1000.0);
            (PKW + c_OH.log10(), PhFormula::ExcessBase)
        } else if c_H2A > 0.0 && n_oh == 0.0 {
            // Weak monoprotic acid: [H⁺] ≈ sqrt(Ka1 · c)
            let h = (self.constants.ka1() * c_H2A).sqrt();
            (-h.log10(), PhFormula::WeakAcid)
        } else {
            (NEUTRAL_PH, PhFormula::NeutralFallback)
        };

        if !ph.is_finite() {
            log::trace!(
                "Non-finite pH from {:?} (analyte={} mmol, base={} mmol, V={} mL), using neutral",
                formula, analyte_mmol, titrant_mmol, volume_mL
            );
            return PhReading {
                ph: NEUTRAL_PH,
                formula: PhFormula::NeutralFallback,
            };
        }

        if formula == PhFormula::NeutralFallback {
            log::trace!(
                "No pH formula applies (analyte={} mmol, base={} mmol, V={} mL), using neutral",
                analyte_mmol, titrant_mmol, volume_mL
            );
        }

        PhReading { ph, formula }
    }
}
