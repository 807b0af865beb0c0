//! Vessel composition during a titration run.

use serde::{Deserialize, Serialize};

use crate::chemistry::SpeciesDistribution;

/// Amounts of analyte and strong base in the vessel, and the total volume
///
/// Created at experiment start with zero amounts and the configured initial
/// volume. Mutated in place by addition events; there is no undo, a new
/// state is constructed to restart.
///
/// # Example
/// ```
/// use glycine_titration::state::SolutionState;
///
/// let mut beaker = SolutionState::new(50.0);
/// beaker.add_analyte(10.0, 10.0);
/// beaker.add_titrant(0.1, 1.0);
/// assert_eq!(beaker.volume_mL(), 61.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolutionState {
    analyte_mmol: f64,
    titrant_mmol: f64,
    volume_mL: f64,
}

impl SolutionState {
    /// Empty vessel holding `initial_volume_mL` of solvent
    pub fn new(initial_volume_mL: f64) -> Self {
        Self {
            analyte_mmol: 0.0,
            titrant_mmol: 0.0,
            volume_mL: initial_volume_mL,
        }
    }

    /// Snapshot from explicit amounts
    pub fn from_amounts(analyte_mmol: f64, titrant_mmol: f64, volume_mL: f64) -> Self {
        Self {
            analyte_mmol,
            titrant_mmol,
            volume_mL,
        }
    }

    /// Total analyte introduced (mmol)
    pub fn analyte_mmol(&self) -> f64 {
        self.analyte_mmol
    }

    /// Total strong base equivalents delivered (mmol)
    pub fn titrant_mmol(&self) -> f64 {
        self.titrant_mmol
    }

    /// Total solution volume (mL)
    pub fn volume_mL(&self) -> f64 {
        self.volume_mL
    }

    /// Add analyte together with the volume it was dissolved in
    pub fn add_analyte(&mut self, amount_mmol: f64, added_volume_mL: f64) {
        self.analyte_mmol += amount_mmol;
        self.volume_mL += added_volume_mL;
        log::debug!(
            "Analyte +{:.3} mmol, +{:.2} mL -> {:.3} mmol in {:.2} mL",
            amount_mmol, added_volume_mL, self.analyte_mmol, self.volume_mL
        );
    }

    /// Add a discrete pour of strong base
    pub fn add_titrant(&mut self, amount_mmol: f64, added_volume_mL: f64) {
        self.titrant_mmol += amount_mmol;
        self.volume_mL += added_volume_mL;
        log::debug!(
            "Titrant +{:.3} mmol, +{:.2} mL -> {:.3} mmol in {:.2} mL",
            amount_mmol, added_volume_mL, self.titrant_mmol, self.volume_mL
        );
    }

    /// Replace the titrant amount from an absolute delivered volume
    ///
    /// Sets `titrant_mmol = molarity × delivered volume` (M × mL = mmol).
    /// Volume is left untouched. Do not combine with [`add_titrant`] for the
    /// same physical addition.
    ///
    /// [`add_titrant`]: SolutionState::add_titrant
    pub fn set_titrant_absolute(&mut self, delivered_volume_mL: f64, titrant_molarity_M: f64) {
        self.titrant_mmol = titrant_molarity_M * delivered_volume_mL;
        log::debug!(
            "Titrant set to {:.3} mmol ({:.2} mL at {} M)",
            self.titrant_mmol, delivered_volume_mL, titrant_molarity_M
        );
    }

    /// Add solvent only
    pub fn add_diluent(&mut self, volume_mL: f64) {
        self.volume_mL += volume_mL;
        log::debug!("Diluent +{:.2} mL -> {:.2} mL", volume_mL, self.volume_mL);
    }

    /// Current protonation-state amounts
    pub fn species(&self) -> SpeciesDistribution {
        SpeciesDistribution::from_amounts(self.analyte_mmol, self.titrant_mmol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = SolutionState::new(50.0);
        assert_eq!(state.analyte_mmol(), 0.0);
        assert_eq!(state.titrant_mmol(), 0.0);
        assert_eq!(state.volume_mL(), 50.0);
    }

    #[test]
    fn test_additions_accumulate() {
        let mut state = SolutionState::new(50.0);
        state.add_analyte(10.0, 10.0);
        state.add_titrant(0.5, 5.0);
        state.add_titrant(0.5, 5.0);
        state.add_diluent(20.0);

        assert!((state.analyte_mmol() - 10.0).abs() < 1e-12);
        assert!((state.titrant_mmol() - 1.0).abs() < 1e-12);
        assert!((state.volume_mL() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_absolute_titrant_replaces() {
        let mut state = SolutionState::new(60.0);
        state.add_titrant(3.0, 30.0);
        state.set_titrant_absolute(12.0, 0.1);

        assert!(
            (state.titrant_mmol() - 1.2).abs() < 1e-12,
            "Absolute setting should replace, not accumulate: {}",
            state.titrant_mmol()
        );
        // Volume is not touched by the absolute setter
        assert!((state.volume_mL() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_species_follow_state() {
        let mut state = SolutionState::new(60.0);
        state.add_analyte(10.0, 0.0);
        state.add_titrant(12.0, 0.0);
        let species = state.species();
        assert!((species.n_HA_mmol - 8.0).abs() < 1e-12);
        assert!((species.n_A_mmol - 2.0).abs() < 1e-12);
    }
}
