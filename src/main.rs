//! Glycine Titration - Entry point
//!
//! CLI Usage:
//!   cargo run                               # Titration curve for 10 mmol glycine
//!   cargo run -- -a 5 -v 40 -m 0.2          # Custom composition
//!   cargo run -- --export curve.csv         # Also write the curve as CSV
//!   cargo run -- --bench --log log.csv      # Scripted bench run with reading log

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use glycine_titration::{
    chemistry::{EquilibriumSolver, TitrationCurve},
    config::Parameters,
    export::{export_curve_csv, export_readings_csv, export_readings_timestamped},
    session::{ExperimentSession, Reagent},
};

/// Command-line options
struct Options {
    analyte_mmol: Option<f64>,
    volume_mL: Option<f64>,
    molarity_M: Option<f64>,
    samples: Option<usize>,
    params_dir: Option<PathBuf>,
    export: Option<PathBuf>,
    bench: bool,
    log: Option<PathBuf>,
}

/// Print the curve for a fixed starting composition
fn run_curve_report(params: &Parameters, opts: &Options) -> Result<()> {
    let solver = EquilibriumSolver::new(params.acid);
    let analyte_mmol = opts.analyte_mmol.unwrap_or(params.experiment.glycine_vial_mmol);
    let volume_mL = opts.volume_mL.unwrap_or(params.experiment.initial_volume_mL);
    let molarity_M = opts.molarity_M.unwrap_or(params.experiment.titrant_molarity_M);
    let samples = opts.samples.unwrap_or(params.experiment.curve_samples);

    if molarity_M <= 0.0 {
        bail!("titrant molarity must be positive, got {}", molarity_M);
    }

    println!("=== Glycine Titration ===\n");
    println!("pKa1 = {:.2}, pKa2 = {:.2}, pI = {:.2}",
        params.acid.pKa1, params.acid.pKa2, solver.isoelectric_point());
    println!("Ka1 = {:.3e}, Ka2 = {:.3e}", params.acid.ka1(), params.acid.ka2());
    println!("Analyte: {:.3} mmol in {:.1} mL, titrant {} M NaOH\n",
        analyte_mmol, volume_mL, molarity_M);

    let curve = TitrationCurve::new(solver, analyte_mmol, volume_mL, molarity_M, samples);
    let first_eq = curve.first_equivalence_mL();

    println!("--- Key points ---");
    for (label, added) in [
        ("start", 0.0),
        ("half first equivalence", 0.5 * first_eq),
        ("first equivalence", first_eq),
        ("half second equivalence", 1.5 * first_eq),
        ("second equivalence", 2.0 * first_eq),
        ("past second equivalence", 2.5 * first_eq),
    ] {
        let titrant_mmol = molarity_M * added;
        let reading = solver.evaluate(analyte_mmol, titrant_mmol, volume_mL + added);
        println!("  {:<24} {:8.2} mL  pH {:6.2}  ({:?})", label, added, reading.ph, reading.formula);
    }

    println!("\n--- Curve ({} samples) ---", curve.len());
    let stride = (curve.len() / 20).max(1);
    for (i, sample) in curve.iter().enumerate() {
        if i % stride == 0 || i + 1 == curve.len() {
            println!("  {:8.2} mL  pH {:6.2}", sample.added_mL, sample.ph);
        }
    }

    if let Some(path) = &opts.export {
        let path = export_curve_csv(&curve, path)
            .with_context(|| format!("exporting curve to {}", path.display()))?;
        println!("\nCurve written to {}", path.display());
    }

    Ok(())
}

/// Pour a vial of glycine and auto-titrate until the burette is spent
fn run_bench(params: &Parameters, opts: &Options) -> Result<()> {
    let mut session = ExperimentSession::new(params);
    session.start();

    let outcome = session.pour(Reagent::Glycine, None)?;
    println!("=== Bench run ===\n");
    println!("Added {:.2} mmol glycine, pH {:.2}", outcome.amount_mmol, outcome.ph);
    session.record_reading("glycine added");

    let mut next_record_mL = 5.0;
    while let Some(ph) = session.auto_titrate_step()? {
        if session.burette_mL() + 1e-9 >= next_record_mL {
            session.record_reading("auto");
            log::debug!("Burette {:.2} mL, pH {:.2}", session.burette_mL(), ph);
            next_record_mL += 5.0;
        }
    }
    session.stop();

    println!("\n  time      added_mL    pH   action");
    for r in session.readings() {
        println!("  {}  {:8.2}  {:5.2}   {}",
            r.time.format("%H:%M:%S"), r.added_mL, r.ph, r.action);
    }

    let species = session.species();
    println!("\nFinal species: H2A {:.3}, HA {:.3}, A {:.3} mmol",
        species.n_H2A_mmol, species.n_HA_mmol, species.n_A_mmol);

    let path = match &opts.log {
        Some(path) => export_readings_csv(session.readings(), path)
            .with_context(|| format!("exporting reading log to {}", path.display()))?,
        None => export_readings_timestamped(session.readings())
            .context("exporting reading log to exports/")?,
    };
    println!("Reading log written to {}", path.display());

    Ok(())
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i)
        .with_context(|| format!("missing value for {}", flag))?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("invalid value for {}: {:?}", flag, raw))
}

/// Parse CLI arguments
fn parse_args() -> Result<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options {
        analyte_mmol: None,
        volume_mL: None,
        molarity_M: None,
        samples: None,
        params_dir: None,
        export: None,
        bench: false,
        log: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-a" | "--analyte" => {
                i += 1;
                opts.analyte_mmol = Some(parse_value(&args, i, "--analyte")?);
            }
            "-v" | "--volume" => {
                i += 1;
                opts.volume_mL = Some(parse_value(&args, i, "--volume")?);
            }
            "-m" | "--molarity" => {
                i += 1;
                opts.molarity_M = Some(parse_value(&args, i, "--molarity")?);
            }
            "-n" | "--samples" => {
                i += 1;
                opts.samples = Some(parse_value(&args, i, "--samples")?);
            }
            "-p" | "--params" => {
                i += 1;
                opts.params_dir = Some(parse_value(&args, i, "--params")?);
            }
            "-e" | "--export" => {
                i += 1;
                opts.export = Some(parse_value(&args, i, "--export")?);
            }
            "-b" | "--bench" => opts.bench = true,
            "-l" | "--log" => {
                i += 1;
                opts.log = Some(parse_value(&args, i, "--log")?);
            }
            "--help" | "-h" => {
                println!("Glycine Titration");
                println!();
                println!("Usage: glycine-titration [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -a, --analyte MMOL   Glycine amount (default: 10)");
                println!("  -v, --volume ML      Starting volume (default: 50)");
                println!("  -m, --molarity M     NaOH concentration (default: 0.1)");
                println!("  -n, --samples N      Curve samples (default: 201)");
                println!("  -p, --params DIR     Parameter directory (default: data/parameters)");
                println!("  -e, --export PATH    Write the curve as CSV");
                println!("  -b, --bench          Scripted bench run with auto-titration");
                println!("  -l, --log PATH       Bench reading log CSV (default: exports/glycine_log_<time>.csv)");
                println!("  --help, -h           Show this help");
                std::process::exit(0);
            }
            other => bail!("unknown option: {}", other),
        }
        i += 1;
    }

    Ok(opts)
}

fn main() -> Result<()> {
    env_logger::init();

    let opts = parse_args()?;

    let params = match &opts.params_dir {
        Some(dir) => Parameters::load_from_dir(dir),
        None => Parameters::load_or_default(),
    };
    log::info!("Parameters loaded: pKa1={}, pKa2={}", params.acid.pKa1, params.acid.pKa2);

    if opts.bench {
        return run_bench(&params, &opts);
    }

    run_curve_report(&params, &opts)
}
