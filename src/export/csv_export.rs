//! CSV export for the reading log and titration curves.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::chemistry::TitrationCurve;
use crate::session::Reading;

/// Row of the exported reading log
#[derive(Debug, Clone, Serialize)]
pub struct ReadingRecord {
    /// Local wall-clock time (HH:MM:SS)
    pub time: String,
    /// Burette reading (mL)
    pub added_mL: String,
    /// pH, two decimals
    #[serde(rename = "pH")]
    pub ph: String,
    /// What triggered the reading
    pub action: String,
}

impl From<&Reading> for ReadingRecord {
    fn from(r: &Reading) -> Self {
        Self {
            time: r.time.format("%H:%M:%S").to_string(),
            added_mL: format!("{:.2}", r.added_mL),
            ph: format!("{:.2}", r.ph),
            action: r.action.clone(),
        }
    }
}

/// Row of an exported titration curve
#[derive(Debug, Clone, Serialize)]
pub struct CurveRecord {
    pub added_mL: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
}

fn create_writer(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(csv::Writer::from_writer(File::create(path)?))
}

/// Write the reading log to `path` as `time,added_mL,pH,action`
pub fn export_readings_csv<P: AsRef<Path>>(readings: &[Reading], path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut writer = create_writer(path)?;

    if readings.is_empty() {
        writer.write_record(["time", "added_mL", "pH", "action"])?;
    }
    for reading in readings {
        writer.serialize(ReadingRecord::from(reading))?;
    }
    writer.flush()?;

    log::info!("CSV reading log exported: {} ({} rows)", path.display(), readings.len());
    Ok(path.to_path_buf())
}

/// Write the reading log to `exports/glycine_log_YYYYMMDD_HHMMSS.csv`
pub fn export_readings_timestamped(readings: &[Reading]) -> Result<PathBuf> {
    export_readings_timestamped_in(readings, "exports")
}

/// Write the reading log to `<dir>/glycine_log_YYYYMMDD_HHMMSS.csv`
pub fn export_readings_timestamped_in<P: AsRef<Path>>(
    readings: &[Reading],
    dir: P,
) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.as_ref().join(format!("glycine_log_{}.csv", timestamp));
    export_readings_csv(readings, path)
}

/// Write every sample of `curve` to `path` as `added_mL,pH`
pub fn export_curve_csv<P: AsRef<Path>>(curve: &TitrationCurve, path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut writer = create_writer(path)?;

    for sample in curve {
        writer.serialize(CurveRecord {
            added_mL: sample.added_mL,
            ph: sample.ph,
        })?;
    }
    writer.flush()?;

    log::info!("CSV titration curve exported: {} ({} rows)", path.display(), curve.len());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::EquilibriumSolver;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("glycine_titration_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_reading_record_formatting() {
        let reading = Reading::now(12.345, 5.9712, "burette adjust");
        let record = ReadingRecord::from(&reading);
        assert_eq!(record.added_mL, "12.35");
        assert_eq!(record.ph, "5.97");
        assert_eq!(record.time.len(), 8);
    }

    #[test]
    fn test_export_readings() {
        let readings = vec![
            Reading::now(0.0, 1.56, "manual"),
            Reading::now(10.0, 1.74, "burette adjust"),
        ];
        let path = export_readings_csv(&readings, scratch_path("log.csv")).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], "time,added_mL,pH,action");
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with(",10.00,1.74,burette adjust"), "Row: {}", lines[2]);
    }

    #[test]
    fn test_export_empty_log_has_header() {
        let path = export_readings_csv(&[], scratch_path("empty.csv")).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim_end(), "time,added_mL,pH,action");
    }

    #[test]
    fn test_timestamped_log_name() {
        let readings = vec![Reading::now(2.5, 1.9, "manual")];
        let dir = scratch_path("timestamped");
        let path = export_readings_timestamped_in(&readings, &dir).unwrap();

        assert_eq!(path.parent(), Some(dir.as_path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        // glycine_log_YYYYMMDD_HHMMSS.csv
        assert!(name.starts_with("glycine_log_") && name.ends_with(".csv"), "Name: {}", name);
        let stamp = &name["glycine_log_".len()..name.len() - ".csv".len()];
        assert_eq!(stamp.len(), 15, "Stamp: {}", stamp);
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(stamp.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_export_curve() {
        let curve = TitrationCurve::new(EquilibriumSolver::default(), 10.0, 50.0, 0.1, 11);
        let path = export_curve_csv(&curve, scratch_path("curve.csv")).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], "added_mL,pH");
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with("0.0,"), "First row: {}", lines[1]);
    }
}
