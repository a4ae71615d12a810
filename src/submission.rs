//! Submission snapshots and their table / CSV renderings.
//!
//! DESIGN
//! ======
//! A snapshot is an immutable copy of the form taken at submit time, one row
//! per instrument in catalog order. The table and the CSV are both derived
//! from it and share the same column layout, so parsing the CSV back yields
//! the table rows.

use serde::Serialize;

use crate::catalog::Instrument;
use crate::form::{FormState, TrackRecord};

pub const CSV_FILE_NAME: &str = "audio_data.csv";
pub const CSV_MIME: &str = "text/csv";

/// Column headers shared by the table and the CSV export.
pub const COLUMNS: [&str; 5] = ["BPM", "Key", "Instrument", "Production Status", "Gear Used"];

// =============================================================================
// SNAPSHOT
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRow {
    pub instrument: Instrument,
    pub record: TrackRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionSnapshot {
    rows: Vec<SnapshotRow>,
}

impl SubmissionSnapshot {
    #[must_use]
    pub fn rows(&self) -> &[SnapshotRow] {
        &self.rows
    }
}

/// Copy every instrument's record out of `form`, in catalog order.
#[must_use]
pub fn snapshot(form: &FormState) -> SubmissionSnapshot {
    let rows = Instrument::ALL
        .into_iter()
        .map(|instrument| SnapshotRow { instrument, record: form.record(instrument).clone() })
        .collect();
    SubmissionSnapshot { rows }
}

// =============================================================================
// TABLE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Row label; not one of the data columns.
    pub label: Instrument,
    pub cells: [String; 5],
    /// Shown next to the table's data columns on the page. Not exported.
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: [&'static str; 5],
    pub rows: Vec<TableRow>,
}

#[must_use]
pub fn to_table(snapshot: &SubmissionSnapshot) -> Table {
    let rows = snapshot
        .rows
        .iter()
        .map(|row| TableRow { label: row.instrument, cells: cells(row), notes: row.record.notes.clone() })
        .collect();
    Table { header: COLUMNS, rows }
}

fn cells(row: &SnapshotRow) -> [String; 5] {
    let record = &row.record;
    [
        record.bpm.to_string(),
        record.key.as_str().to_owned(),
        row.instrument.as_str().to_owned(),
        record.status.as_str().to_owned(),
        record.gear.clone(),
    ]
}

// =============================================================================
// CSV
// =============================================================================

/// Serialize the snapshot as CSV: header row, then one row per instrument.
/// Output depends only on the snapshot contents.
#[must_use]
pub fn to_csv(snapshot: &SubmissionSnapshot) -> String {
    let mut out = String::new();
    write_line(&mut out, COLUMNS.iter().copied());
    for row in &snapshot.rows {
        let cells = cells(row);
        write_line(&mut out, cells.iter().map(String::as_str));
    }
    out
}

fn write_line<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_escape(field));
    }
    out.push('\n');
}

/// Quote a field only when it contains a comma, quote, or line break.
pub(crate) fn csv_escape(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\"")).into()
    } else {
        s.into()
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
