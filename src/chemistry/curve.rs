//! Titration curve generation (pH vs. cumulative titrant volume).

use serde::Serialize;

use super::equilibrium::EquilibriumSolver;

/// Number of evenly spaced samples in a preview curve
pub const DEFAULT_CURVE_SAMPLES: usize = 201;

/// One point of a titration curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    /// Cumulative titrant volume added (mL)
    pub added_mL: f64,
    /// Solution pH at that point
    pub ph: f64,
}

/// Lazily evaluated titration curve for a fixed starting composition
///
/// The span runs from no titrant to twice the base needed to fully
/// deprotonate the analyte, `2 × analyte / molarity` mL. Each sample is
/// diluted by its own added volume. Only the inputs are stored; call
/// [`iter`](TitrationCurve::iter) as often as needed.
///
/// # Example
/// ```
/// use glycine_titration::chemistry::{EquilibriumSolver, TitrationCurve};
///
/// let curve = TitrationCurve::new(EquilibriumSolver::default(), 10.0, 50.0, 0.1, 201);
/// let samples: Vec<_> = curve.iter().collect();
/// assert_eq!(samples.len(), 201);
/// assert_eq!(samples[0].added_mL, 0.0);
/// assert!((samples[200].added_mL - 200.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TitrationCurve {
    solver: EquilibriumSolver,
    analyte_mmol: f64,
    starting_volume_mL: f64,
    titrant_molarity_M: f64,
    samples: usize,
    span_override_mL: Option<f64>,
}

impl TitrationCurve {
    /// `samples` below 2 is raised to 2 so both span endpoints are included
    pub fn new(
        solver: EquilibriumSolver,
        analyte_mmol: f64,
        starting_volume_mL: f64,
        titrant_molarity_M: f64,
        samples: usize,
    ) -> Self {
        Self {
            solver,
            analyte_mmol,
            starting_volume_mL,
            titrant_molarity_M,
            samples: samples.max(2),
            span_override_mL: None,
        }
    }

    /// Sample up to `max_added_mL` instead of the second equivalence span
    pub fn with_max_added(mut self, max_added_mL: f64) -> Self {
        self.span_override_mL = Some(max_added_mL);
        self
    }

    /// Titrant volume at the last sample (mL); zero if undefined
    pub fn max_added_mL(&self) -> f64 {
        let span = self
            .span_override_mL
            .unwrap_or(2.0 * self.analyte_mmol / self.titrant_molarity_M);
        if span.is_finite() && span > 0.0 {
            span
        } else {
            0.0
        }
    }

    /// Titrant volume at the first equivalence point (mL)
    pub fn first_equivalence_mL(&self) -> f64 {
        self.analyte_mmol / self.titrant_molarity_M
    }

    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Evaluate a single titrant volume with its dilution
    pub fn sample_at(&self, added_mL: f64) -> CurveSample {
        let titrant_mmol = self.titrant_molarity_M * added_mL;
        let volume_mL = self.starting_volume_mL + added_mL;
        CurveSample {
            added_mL,
            ph: self.solver.ph_from_amounts(self.analyte_mmol, titrant_mmol, volume_mL),
        }
    }

    pub fn iter(&self) -> CurveIter {
        CurveIter {
            curve: *self,
            max_added_mL: self.max_added_mL(),
            front: 0,
            back: self.samples,
        }
    }
}

impl IntoIterator for &TitrationCurve {
    type Item = CurveSample;
    type IntoIter = CurveIter;

    fn into_iter(self) -> CurveIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`TitrationCurve`]
#[derive(Debug, Clone)]
pub struct CurveIter {
    curve: TitrationCurve,
    max_added_mL: f64,
    front: usize,
    back: usize,
}

impl CurveIter {
    fn sample(&self, index: usize) -> CurveSample {
        let last = (self.curve.samples - 1) as f64;
        let added_mL = (index as f64 / last) * self.max_added_mL;
        self.curve.sample_at(added_mL)
    }
}

impl Iterator for CurveIter {
    type Item = CurveSample;

    fn next(&mut self) -> Option<CurveSample> {
        if self.front >= self.back {
            return None;
        }
        let sample = self.sample(self.front);
        self.front += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for CurveIter {
    fn next_back(&mut self) -> Option<CurveSample> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.sample(self.back))
    }
}

impl ExactSizeIterator for CurveIter {}
