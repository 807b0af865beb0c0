//! Experiment session: the single owner of a titration run.
//!
//! Bench actions (pouring reagents, moving the burette, auto-titration) are
//! translated into [`SolutionState`] updates here, and pH is derived from
//! the state afterwards. Timers, animation and scoring belong to the
//! front end driving the session.

mod reading;
mod reagent;

pub use reading::Reading;
pub use reagent::{PourOutcome, Reagent};

use anyhow::{bail, Result};

use crate::chemistry::{EquilibriumSolver, SpeciesDistribution, TitrationCurve};
use crate::config::{ExperimentParameters, Parameters};
use crate::state::SolutionState;

/// Analyte assumed for the curve preview while the beaker is empty (mmol)
const PREVIEW_FALLBACK_ANALYTE_MMOL: f64 = 10.0;

/// Starting volume assumed for the curve preview when none is known (mL)
const PREVIEW_FALLBACK_VOLUME_ML: f64 = 50.0;

/// One titration run on the virtual bench
///
/// # Example
/// ```
/// use glycine_titration::config::Parameters;
/// use glycine_titration::session::{ExperimentSession, Reagent};
///
/// let mut session = ExperimentSession::new(&Parameters::default());
/// session.start();
/// session.pour(Reagent::Glycine, None).unwrap();
///
/// // 50 mL of 0.1 M base half-neutralizes 10 mmol glycine: pH = pKa1
/// let ph = session.set_burette(50.0).unwrap();
/// assert!((ph - 2.34).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentSession {
    solver: EquilibriumSolver,
    config: ExperimentParameters,
    solution: SolutionState,
    burette_mL: f64,
    running: bool,
    readings: Vec<Reading>,
}

impl ExperimentSession {
    pub fn new(params: &Parameters) -> Self {
        Self {
            solver: EquilibriumSolver::new(params.acid),
            config: params.experiment.clone(),
            solution: SolutionState::new(params.experiment.initial_volume_mL),
            burette_mL: 0.0,
            running: false,
            readings: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        log::info!("Experiment started");
    }

    pub fn stop(&mut self) {
        self.running = false;
        log::info!("Experiment stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Discard the vessel contents and empty the burette
    ///
    /// The reading log survives a reset.
    pub fn reset(&mut self) {
        self.solution = SolutionState::new(self.config.initial_volume_mL);
        self.burette_mL = 0.0;
        log::info!("Experiment reset ({:.1} mL solvent)", self.config.initial_volume_mL);
    }

    fn ensure_running(&self) -> Result<()> {
        if !self.running {
            bail!("experiment is not running; start it first");
        }
        Ok(())
    }

    /// Pour a reagent into the beaker, `volume_mL = None` for the default pour
    pub fn pour(&mut self, reagent: Reagent, volume_mL: Option<f64>) -> Result<PourOutcome> {
        self.ensure_running()?;

        let (volume_mL, amount_mmol) = match reagent {
            Reagent::Glycine => {
                // A sized pour takes that percentage of the vial
                let amount = match volume_mL {
                    Some(v) => self.config.glycine_vial_mmol * (v / 100.0),
                    None => self.config.glycine_vial_mmol,
                };
                let v = volume_mL.unwrap_or(self.config.default_glycine_pour_mL);
                self.solution.add_analyte(amount, v);
                (v, amount)
            }
            Reagent::SodiumHydroxide => {
                let v = volume_mL.unwrap_or(self.config.default_naoh_pour_mL);
                let amount = self.config.titrant_molarity_M * v;
                self.solution.add_titrant(amount, v);
                self.burette_mL = (self.burette_mL + v).min(self.config.burette_capacity_mL);
                (v, amount)
            }
            Reagent::Water => {
                let v = volume_mL.unwrap_or(self.config.default_water_pour_mL);
                self.solution.add_diluent(v);
                (v, 0.0)
            }
        };

        let ph = self.ph();
        log::info!(
            "Poured {:.2} mL {} ({:.3} mmol), pH {:.2}",
            volume_mL, reagent, amount_mmol, ph
        );

        Ok(PourOutcome {
            reagent,
            volume_mL,
            amount_mmol,
            ph,
        })
    }

    /// Move the burette to an absolute reading and return the new pH
    ///
    /// Delivered base cannot be taken back: the reading is clamped to the
    /// range from the current reading to the burette capacity, and the
    /// titrant amount is only replaced when the reading accounts for at
    /// least the base already in the beaker.
    pub fn set_burette(&mut self, reading_mL: f64) -> Result<f64> {
        self.ensure_running()?;

        let reading_mL = reading_mL
            .max(self.burette_mL)
            .min(self.config.burette_capacity_mL);
        self.burette_mL = reading_mL;

        let molarity = self.config.titrant_molarity_M;
        if molarity * reading_mL >= self.solution.titrant_mmol() {
            self.solution.set_titrant_absolute(reading_mL, molarity);
        } else {
            log::debug!(
                "Burette at {:.2} mL is below the {:.3} mmol already delivered, keeping it",
                reading_mL, self.solution.titrant_mmol()
            );
        }

        Ok(self.ph())
    }

    /// Advance the burette by one fine increment
    pub fn step_burette(&mut self) -> Result<f64> {
        self.set_burette(self.burette_mL + self.config.burette_step_mL)
    }

    /// One auto-titration tick; `None` once the burette is empty
    pub fn auto_titrate_step(&mut self) -> Result<Option<f64>> {
        self.ensure_running()?;
        if self.burette_mL >= self.config.burette_capacity_mL {
            log::debug!("Auto-titration finished at {:.2} mL", self.burette_mL);
            return Ok(None);
        }
        self.set_burette(self.burette_mL + self.config.auto_step_mL)
            .map(Some)
    }

    /// Current burette reading (mL delivered)
    pub fn burette_mL(&self) -> f64 {
        self.burette_mL
    }

    pub fn solution(&self) -> &SolutionState {
        &self.solution
    }

    pub fn config(&self) -> &ExperimentParameters {
        &self.config
    }

    /// Current pH of the beaker
    pub fn ph(&self) -> f64 {
        self.solver.ph(&self.solution)
    }

    /// Current protonation-state amounts
    pub fn species(&self) -> SpeciesDistribution {
        self.solution.species()
    }

    pub fn isoelectric_point(&self) -> f64 {
        self.solver.isoelectric_point()
    }

    /// Preview curve from the current beaker contents
    ///
    /// An empty beaker previews a full vial in the default volume. The span
    /// covers at least 1 mmol of analyte.
    pub fn curve_preview(&self) -> TitrationCurve {
        let analyte_mmol = if self.solution.analyte_mmol() > 0.0 {
            self.solution.analyte_mmol()
        } else {
            PREVIEW_FALLBACK_ANALYTE_MMOL
        };
        let volume_mL = if self.solution.volume_mL() > 0.0 {
            self.solution.volume_mL()
        } else {
            PREVIEW_FALLBACK_VOLUME_ML
        };
        let molarity = self.config.titrant_molarity_M;

        TitrationCurve::new(
            self.solver,
            analyte_mmol,
            volume_mL,
            molarity,
            self.config.curve_samples,
        )
        .with_max_added(2.0 * analyte_mmol.max(1.0) / molarity)
    }

    /// Log the current burette reading and pH
    pub fn record_reading(&mut self, action: &str) -> Reading {
        let reading = Reading::now(self.burette_mL, self.ph(), action);
        log::debug!(
            "Reading: {:.2} mL, pH {:.2} ({})",
            reading.added_mL, reading.ph, reading.action
        );
        self.readings.push(reading.clone());
        reading
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn clear_log(&mut self) {
        self.readings.clear();
    }
}
