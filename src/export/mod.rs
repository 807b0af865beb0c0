//! Export functionality for experiment data.
//!
//! Provides CSV export of the reading log and of titration curves.

mod csv_export;

pub use csv_export::{
    export_curve_csv, export_readings_csv, export_readings_timestamped,
    export_readings_timestamped_in, CurveRecord, ReadingRecord,
};
