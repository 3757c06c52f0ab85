//! CSV export for scenario report rows.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

/// Column header for the report CSV.
const HEADER: &str = "time_min,phase,baseline_mw,optimized_mw,savings_mw";

/// Whether a row falls in the live window or the prediction horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Live window.
    Live,
    /// Prediction horizon.
    Prediction,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Phase::Live => "live",
            Phase::Prediction => "prediction",
        }
    }
}

/// One export row. `None` cells are outside the curve's analysis window and
/// serialize as missing values, never as zero.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Time in minutes.
    pub time_min: f32,
    /// Live or prediction sample.
    pub phase: Phase,
    /// Optimizer-off power (MW), when defined for this row.
    pub baseline_mw: Option<f32>,
    /// Optimizer-on power (MW), when defined for this row.
    pub optimized_mw: Option<f32>,
    /// Clipped savings (MW), when the analysis window covers this row.
    pub savings_mw: Option<f32>,
}

/// Exports report rows to a CSV file at the given path.
///
/// Writes a header row followed by one data row per sample. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(rows: &[ReportRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(rows, buf)
}

/// Writes report rows as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(rows: &[ReportRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows; missing cells stay empty
    for r in rows {
        wtr.write_record(&[
            format!("{:.2}", r.time_min),
            r.phase.as_str().to_string(),
            fmt_cell(r.baseline_mw),
            fmt_cell(r.optimized_mw),
            fmt_cell(r.savings_mw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn fmt_cell(value: Option<f32>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.4}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(i: usize) -> ReportRow {
        ReportRow {
            time_min: i as f32 * 0.25,
            phase: if i < 2 { Phase::Live } else { Phase::Prediction },
            baseline_mw: Some(92.0),
            optimized_mw: Some(91.0),
            savings_mw: if i < 2 { None } else { Some(1.0) },
        }
    }

    #[test]
    fn header_matches_schema() {
        let rows = vec![make_row(0)];
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(first_line, "time_min,phase,baseline_mw,optimized_mw,savings_mw");
    }

    #[test]
    fn row_count_matches_sample_count() {
        let rows: Vec<ReportRow> = (0..140).map(make_row).collect();
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 140 data rows
        assert_eq!(lines.len(), 141);
    }

    #[test]
    fn missing_cells_are_empty_not_zero() {
        let rows = vec![ReportRow {
            time_min: 0.0,
            phase: Phase::Live,
            baseline_mw: None,
            optimized_mw: Some(91.0),
            savings_mw: None,
        }];
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let data_line = output.lines().nth(1).unwrap_or("");
        assert_eq!(data_line, "0.00,live,,91.0000,");
    }

    #[test]
    fn deterministic_output() {
        let rows: Vec<ReportRow> = (0..5).map(make_row).collect();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&rows, &mut buf1).ok();
        write_csv(&rows, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let rows: Vec<ReportRow> = (0..4).map(make_row).collect();
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(5));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            let time: Result<f32, _> = rec.unwrap()[0].parse();
            assert!(time.is_ok(), "time_min should parse as f32");
            let phase = &rec.unwrap()[1];
            assert!(phase == "live" || phase == "prediction");
            row_count += 1;
        }
        assert_eq!(row_count, 4);
    }
}
