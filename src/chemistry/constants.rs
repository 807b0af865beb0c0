//! Acid dissociation constants for a diprotic amino acid.
//!
//! Glycine carries a carboxyl group (pKa1) and an amino group (pKa2):
//!
//! ```text
//! H2A ⇌ HA + H⁺   (pKa1)
//! HA  ⇌ A  + H⁺   (pKa2)
//! ```
//!
//! References:
//! - Lide DR. CRC Handbook of Chemistry and Physics. 2005 (glycine pKa values)
//! - Nelson DL, Cox MM. Lehninger Principles of Biochemistry. 2017 (pI of amino acids)

use serde::{Deserialize, Serialize};

/// Negative log10 of the ion product of water at 25°C
pub const PKW: f64 = 14.0;

/// Dissociation exponents of a diprotic acid
///
/// # Example
/// ```
/// use glycine_titration::chemistry::AcidConstants;
///
/// let glycine = AcidConstants::GLYCINE;
/// assert!((glycine.isoelectric_point() - 5.97).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcidConstants {
    /// First dissociation exponent (carboxyl group)
    /// Reference: 2.34 for glycine (CRC Handbook)
    pub pKa1: f64,

    /// Second dissociation exponent (amino group)
    /// Reference: 9.60 for glycine (CRC Handbook)
    pub pKa2: f64,
}

impl AcidConstants {
    /// Glycine at 25°C
    pub const GLYCINE: Self = Self {
        pKa1: 2.34,
        pKa2: 9.60,
    };

    pub fn new(pKa1: f64, pKa2: f64) -> Self {
        Self { pKa1, pKa2 }
    }

    /// First acid dissociation constant, Ka1 = 10^(-pKa1)
    pub fn ka1(&self) -> f64 {
        10f64.powf(-self.pKa1)
    }

    /// Second acid dissociation constant, Ka2 = 10^(-pKa2)
    pub fn ka2(&self) -> f64 {
        10f64.powf(-self.pKa2)
    }

    /// Isoelectric point, the midpoint of the two exponents
    pub fn isoelectric_point(&self) -> f64 {
        0.5 * (self.pKa1 + self.pKa2)
    }
}

impl Default for AcidConstants {
    fn default() -> Self {
        Self::GLYCINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glycine_defaults() {
        let acid = AcidConstants::default();
        assert!((acid.pKa1 - 2.34).abs() < 1e-12);
        assert!((acid.pKa2 - 9.60).abs() < 1e-12);
    }

    #[test]
    fn test_dissociation_constants() {
        let acid = AcidConstants::GLYCINE;
        // 10^-2.34 ≈ 4.571e-3, 10^-9.60 ≈ 2.512e-10
        assert!((acid.ka1() - 4.5709e-3).abs() < 1e-6, "Ka1: {}", acid.ka1());
        assert!((acid.ka2() - 2.5119e-10).abs() < 1e-13, "Ka2: {}", acid.ka2());
        assert!(acid.ka1() > acid.ka2());
    }

    #[test]
    fn test_partial_json_keeps_glycine_defaults() {
        let acid: AcidConstants = serde_json::from_str(r#"{ "pKa1": 2.5 }"#).unwrap();
        assert!((acid.pKa1 - 2.5).abs() < 1e-12);
        assert!((acid.pKa2 - 9.60).abs() < 1e-12, "Missing pKa2 should default: {}", acid.pKa2);

        let empty: AcidConstants = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AcidConstants::GLYCINE);
    }

    #[test]
    fn test_isoelectric_point_is_midpoint() {
        let acid = AcidConstants::new(2.0, 10.0);
        assert!((acid.isoelectric_point() - 6.0).abs() < 1e-12);
    }
}
