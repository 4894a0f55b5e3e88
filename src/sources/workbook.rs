use calamine::{open_workbook_auto, Data, Range, Reader};
use std::collections::HashMap;
use std::path::Path;

use crate::error::WorkbookError;

/// Open the workbook at `path` (format picked from the extension) and read its first sheet.
pub fn first_worksheet(path: &Path) -> Result<Range<Data>, WorkbookError> {
    let mut workbook = open_workbook_auto(path).map_err(WorkbookError::Open)?;

    workbook
        .worksheet_range_at(0)
        .ok_or(WorkbookError::NoWorksheet)?
        .map_err(WorkbookError::Read)
}

/// Header names, with blanks named `Unnamed: <idx>` and repeats suffixed `.1`, `.2`, ...
pub fn column_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    header
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = match cell {
                Data::Empty => format!("Unnamed: {}", idx),
                other => other.to_string(),
            };

            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

/// Index of the column named `name`.
pub fn column_index(columns: &[String], name: &str) -> Result<usize, WorkbookError> {
    columns
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| WorkbookError::MissingColumn(name.to_string()))
}

pub fn is_blank_row(cells: &[Data]) -> bool {
    cells.iter().all(|cell| matches!(cell, Data::Empty))
}

/// 1-based sheet row of the first row under the header.
pub fn first_data_row(range: &Range<Data>) -> usize {
    range.start().map(|(row, _)| row as usize).unwrap_or(0) + 2
}
