//! Protonation-state partition of a diprotic acid under strong base.
//!
//! Each millimole of hydroxide removes one proton, first from the fully
//! protonated form and then from the zwitterion:
//!
//! - Region I   (nOH ≤ n):       H2A → HA
//! - Region II  (n < nOH ≤ 2n):  HA → A
//! - Region III (nOH > 2n):      all A, excess strong base

use serde::Serialize;

/// Titration region selected by comparing base against analyte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TitrationRegion {
    /// First equivalence not passed (nOH ≤ n)
    BeforeFirstEquivalence,
    /// Between first and second equivalence (n < nOH ≤ 2n)
    BetweenEquivalences,
    /// Excess strong base (nOH > 2n)
    PastSecondEquivalence,
}

impl TitrationRegion {
    /// Classify a composition by millimoles of analyte and base
    pub fn classify(analyte_mmol: f64, titrant_mmol: f64) -> Self {
        if titrant_mmol <= analyte_mmol {
            Self::BeforeFirstEquivalence
        } else if titrant_mmol <= 2.0 * analyte_mmol {
            Self::BetweenEquivalences
        } else {
            Self::PastSecondEquivalence
        }
    }
}

/// Amounts (mmol) of the three protonation states
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesDistribution {
    /// Fully protonated form
    pub n_H2A_mmol: f64,
    /// Mono-deprotonated (zwitterion) form
    pub n_HA_mmol: f64,
    /// Fully deprotonated form
    pub n_A_mmol: f64,
}

impl SpeciesDistribution {
    /// Partition `analyte_mmol` given `titrant_mmol` of strong base
    ///
    /// # Example
    /// ```
    /// use glycine_titration::chemistry::SpeciesDistribution;
    ///
    /// let species = SpeciesDistribution::from_amounts(10.0, 15.0);
    /// assert_eq!(species.n_H2A_mmol, 0.0);
    /// assert_eq!(species.n_HA_mmol, 5.0);
    /// assert_eq!(species.n_A_mmol, 5.0);
    /// ```
    pub fn from_amounts(analyte_mmol: f64, titrant_mmol: f64) -> Self {
        let n = analyte_mmol;
        let n_oh = titrant_mmol;

        match TitrationRegion::classify(n, n_oh) {
            TitrationRegion::BeforeFirstEquivalence => Self {
                n_H2A_mmol: n - n_oh,
                n_HA_mmol: n_oh,
                n_A_mmol: 0.0,
            },
            TitrationRegion::BetweenEquivalences => Self {
                n_H2A_mmol: 0.0,
                n_HA_mmol: 2.0 * n - n_oh,
                n_A_mmol: n_oh - n,
            },
            TitrationRegion::PastSecondEquivalence => Self {
                n_H2A_mmol: 0.0,
                n_HA_mmol: 0.0,
                n_A_mmol: n,
            },
        }
    }

    /// Sum of all three forms (equals the analyte amount)
    pub fn total_mmol(&self) -> f64 {
        self.n_H2A_mmol + self.n_HA_mmol + self.n_A_mmol
    }

    /// Molar concentrations in a solution of `volume_mL`
    pub fn concentrations(&self, volume_mL: f64) -> SpeciesConcentrations {
        let volume_L = volume_mL / 1000.0;
        let molar = |amount_mmol: f64| (amount_mmol / 1000.0) / volume_L;

        SpeciesConcentrations {
            c_H2A_M: molar(self.n_H2A_mmol),
            c_HA_M: molar(self.n_HA_mmol),
            c_A_M: molar(self.n_A_mmol),
        }
    }
}

/// Molar concentrations (mol/L) of the three protonation states
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpeciesConcentrations {
    pub c_H2A_M: f64,
    pub c_HA_M: f64,
    pub c_A_M: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_boundaries() {
        assert_eq!(TitrationRegion::classify(10.0, 0.0), TitrationRegion::BeforeFirstEquivalence);
        assert_eq!(TitrationRegion::classify(10.0, 10.0), TitrationRegion::BeforeFirstEquivalence);
        assert_eq!(TitrationRegion::classify(10.0, 10.5), TitrationRegion::BetweenEquivalences);
        assert_eq!(TitrationRegion::classify(10.0, 20.0), TitrationRegion::BetweenEquivalences);
        assert_eq!(TitrationRegion::classify(10.0, 20.5), TitrationRegion::PastSecondEquivalence);
    }

    #[test]
    fn test_region_one_partition() {
        let s = SpeciesDistribution::from_amounts(10.0, 4.0);
        assert_eq!(s.n_H2A_mmol, 6.0);
        assert_eq!(s.n_HA_mmol, 4.0);
        assert_eq!(s.n_A_mmol, 0.0);
    }

    #[test]
    fn test_excess_base_partition() {
        let s = SpeciesDistribution::from_amounts(10.0, 25.0);
        assert_eq!(s.n_H2A_mmol, 0.0);
        assert_eq!(s.n_HA_mmol, 0.0);
        assert_eq!(s.n_A_mmol, 10.0);
    }

    #[test]
    fn test_species_sum_to_analyte() {
        for i in 0..=60 {
            let n_oh = i as f64 * 0.5;
            let s = SpeciesDistribution::from_amounts(10.0, n_oh);
            assert!(
                (s.total_mmol() - 10.0).abs() < 1e-12,
                "Species should sum to analyte at nOH={}: {}",
                n_oh, s.total_mmol()
            );
            assert!(s.n_H2A_mmol >= 0.0 && s.n_HA_mmol >= 0.0 && s.n_A_mmol >= 0.0);
        }
    }

    #[test]
    fn test_concentrations() {
        // 10 mmol in 60 mL = 0.1667 M
        let s = SpeciesDistribution::from_amounts(10.0, 0.0);
        let c = s.concentrations(60.0);
        assert!((c.c_H2A_M - 10.0 / 60.0).abs() < 1e-12);
        assert_eq!(c.c_HA_M, 0.0);
        assert_eq!(c.c_A_M, 0.0);
    }
}
