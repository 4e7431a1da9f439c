//! Table assembly
//!
//! Decides whether the clustered rows of a page form a table and builds the
//! cell grid. Rows keep their natural width, so tables may be ragged.

use tracing::debug;

use super::detected_data;
use super::rows::Row;
use crate::document::{CellData, TableData};
use crate::vision::TextObservation;

/// Fewest observations on a page before table detection is attempted
pub const MIN_TABLE_OBSERVATIONS: usize = 6;

/// Fewest rows a table can have
pub const MIN_TABLE_ROWS: usize = 2;

/// Smallest average row length (truncated) that counts as tabular
pub const MIN_AVERAGE_COLUMNS: usize = 2;

/// Whether the page qualifies as containing a table
pub fn is_table(rows: &[Row<'_>], observation_count: usize) -> bool {
    if observation_count < MIN_TABLE_OBSERVATIONS || rows.len() < MIN_TABLE_ROWS {
        return false;
    }

    let total: usize = rows.iter().map(Vec::len).sum();
    let average = total / rows.len();
    debug!(
        "Table gate: {} rows, {} observations, average row length {}",
        rows.len(),
        total,
        average
    );

    average >= MIN_AVERAGE_COLUMNS
}

/// Build the tables found in the clustered rows.
///
/// Produces at most one table. With `detect_cell_data` set, each cell is run
/// through the data classifier on its own.
pub fn assemble_tables(
    rows: &[Row<'_>],
    observation_count: usize,
    detect_cell_data: bool,
) -> Vec<TableData> {
    if !is_table(rows, observation_count) {
        return Vec::new();
    }

    let cells: Vec<Vec<CellData>> = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| build_row(row_index, row, detect_cell_data))
        .collect();

    let table = TableData::from_rows(cells);
    debug!(
        "Assembled table {}x{}{}",
        table.row_count,
        table.column_count,
        if table.is_ragged() { " (ragged)" } else { "" }
    );

    vec![table]
}

/// Order one row left to right and turn it into cells
fn build_row(row_index: usize, row: &[&TextObservation], detect_cell_data: bool) -> Vec<CellData> {
    let mut ordered = row.to_vec();
    ordered.sort_by(|a, b| a.x().total_cmp(&b.x()));

    ordered
        .into_iter()
        .enumerate()
        .map(|(column_index, obs)| {
            let text = obs.top_text();
            let detected_data = if detect_cell_data {
                detected_data::classify(text).into_iter().collect()
            } else {
                Vec::new()
            };

            CellData {
                text: text.to_string(),
                row_index,
                column_index,
                detected_data,
            }
        })
        .collect()
}
