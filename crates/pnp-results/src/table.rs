//! Wide and long tabular projections of a time series.

use pnp_core::Real;
use pnp_sim::TimeSeries;
use serde::{Deserialize, Serialize};

use crate::error::{ResultsError, ResultsResult};

/// Column-per-variable table: `time` plus one column per state
/// variable, one row per recorded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    /// `["time", <variables in declaration order>...]`
    pub columns: Vec<String>,
    /// One row per snapshot, aligned with `columns`.
    pub rows: Vec<Vec<Real>>,
}

impl WideTable {
    pub fn to_csv(&self) -> String {
        let mut csv = self.columns.join(",");
        csv.push('\n');
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            csv.push_str(&line.join(","));
            csv.push('\n');
        }
        csv
    }
}

/// One `(time, variable, value)` observation of the long projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRow {
    pub time: Real,
    pub variable: String,
    pub value: Real,
}

/// Project a time series into a wide table.
///
/// Column order follows the first snapshot's variable declaration
/// order. An empty series has no column set to project and is an error.
pub fn wide_table(series: &TimeSeries) -> ResultsResult<WideTable> {
    let first = series.first().ok_or(ResultsError::EmptySeries)?;

    let mut columns = Vec::with_capacity(first.state.len() + 1);
    columns.push("time".to_string());
    columns.extend(first.state.names().map(str::to_string));

    let mut rows = Vec::with_capacity(series.len());
    for snap in series.snapshots() {
        let mut row = Vec::with_capacity(columns.len());
        row.push(snap.time);
        for name in first.state.names() {
            let value = snap
                .state
                .get(name)
                .ok_or_else(|| ResultsError::MissingVariable {
                    name: name.to_string(),
                    time: snap.time,
                })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(WideTable { columns, rows })
}

/// Project a time series into long (melted) form: one row per
/// snapshot x variable.
pub fn long_table(series: &TimeSeries) -> Vec<LongRow> {
    let mut rows = Vec::new();
    for snap in series.snapshots() {
        for (name, value) in snap.state.iter() {
            rows.push(LongRow {
                time: snap.time,
                variable: name.to_string(),
                value,
            });
        }
    }
    rows
}

/// Render long rows as CSV.
pub fn long_to_csv(rows: &[LongRow]) -> String {
    let mut csv = String::from("time,variable,value\n");
    for row in rows {
        csv.push_str(&format!("{},{},{}\n", row.time, row.variable, row.value));
    }
    csv
}
