use calamine::{Data, Range};
use std::path::Path;

use crate::error::WorkbookError;
use crate::models::Ranking;
use crate::sources::workbook;

const OWGR: &str = "OWGR";
const PLAYER: &str = "Player";
const COUNTRY: &str = "Country";
const TOUR: &str = "Tour";
const AVAILABILITY: &str = "Availability";

/// Read the world rankings workbook at `path`.
///
/// Blocking: call it from `spawn_blocking` inside async code.
pub fn read_rankings(path: &Path) -> Result<Vec<Ranking>, WorkbookError> {
    let range = workbook::first_worksheet(path)?;
    rankings_from_range(&range)
}

/// Map each row under the header to a ranking line, every field as display text.
pub fn rankings_from_range(range: &Range<Data>) -> Result<Vec<Ranking>, WorkbookError> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(WorkbookError::Empty)?;
    let columns = workbook::column_names(header);

    let owgr = workbook::column_index(&columns, OWGR)?;
    let player = workbook::column_index(&columns, PLAYER)?;
    let country = workbook::column_index(&columns, COUNTRY)?;
    let tour = workbook::column_index(&columns, TOUR)?;
    let availability = workbook::column_index(&columns, AVAILABILITY)?;

    let rankings = rows
        .filter(|cells| !workbook::is_blank_row(cells))
        .map(|cells| {
            let cell = move |idx: usize| cells.get(idx).unwrap_or(&Data::Empty);

            Ranking {
                owgr: cell_text(cell(owgr)),
                player: cell_text(cell(player)),
                country: cell_text(cell(country)),
                tour: cell_text(cell(tour)),
                availability: availability_text(cell(availability)),
            }
        })
        .collect();

    Ok(rankings)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

// Availability is kept as a fraction of the season (0.85); shown as "85%".
fn availability_text(cell: &Data) -> String {
    match cell {
        Data::Float(f) => format!("{}%", (f * 100.0).round() as i64),
        Data::Int(i) => format!("{}%", i * 100),
        other => cell_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    fn header() -> Vec<Data> {
        vec![
            text("OWGR"),
            text("Player"),
            text("Country"),
            text("Tour"),
            text("Availability"),
        ]
    }

    fn sheet(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    #[test]
    fn rows_become_ranking_lines() {
        let range = sheet(vec![
            header(),
            vec![
                Data::Float(1.0),
                text("Scottie Scheffler"),
                text("USA"),
                text("PGA"),
                Data::Float(1.0),
            ],
            vec![
                Data::Float(2.0),
                text("Rory McIlroy"),
                text("NIR"),
                text("PGA"),
                Data::Float(0.85),
            ],
        ]);

        let rankings = rankings_from_range(&range).unwrap();

        assert_eq!(
            rankings,
            vec![
                Ranking {
                    owgr: "1".to_string(),
                    player: "Scottie Scheffler".to_string(),
                    country: "USA".to_string(),
                    tour: "PGA".to_string(),
                    availability: "100%".to_string(),
                },
                Ranking {
                    owgr: "2".to_string(),
                    player: "Rory McIlroy".to_string(),
                    country: "NIR".to_string(),
                    tour: "PGA".to_string(),
                    availability: "85%".to_string(),
                },
            ]
        );
    }

    #[test]
    fn columns_are_found_by_header_not_position() {
        let range = sheet(vec![
            vec![
                text("Player"),
                text("Availability"),
                text("OWGR"),
                text("Notes"),
                text("Tour"),
                text("Country"),
            ],
            vec![
                text("Jon Rahm"),
                text("0%"),
                Data::Float(80.0),
                text("LIV"),
                text("LIV"),
                text("ESP"),
            ],
        ]);

        let rankings = rankings_from_range(&range).unwrap();

        assert_eq!(rankings[0].player, "Jon Rahm");
        assert_eq!(rankings[0].owgr, "80");
        assert_eq!(rankings[0].country, "ESP");
        assert_eq!(rankings[0].availability, "0%");
    }

    #[test]
    fn blank_cells_and_rows() {
        let range = sheet(vec![
            header(),
            vec![
                Data::Float(3.0),
                text("Xander Schauffele"),
                Data::Empty,
                text("PGA"),
                Data::Empty,
            ],
            vec![Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        ]);

        let rankings = rankings_from_range(&range).unwrap();

        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].country, "");
        assert_eq!(rankings[0].availability, "");
    }

    #[test]
    fn missing_column_fails() {
        let range = sheet(vec![
            vec![text("OWGR"), text("Player"), text("Country"), text("Tour")],
            vec![Data::Float(1.0), text("Scottie Scheffler"), text("USA"), text("PGA")],
        ]);

        assert!(matches!(
            rankings_from_range(&range),
            Err(WorkbookError::MissingColumn(ref c)) if c == "Availability"
        ));
    }

    #[test]
    fn empty_sheet_fails() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(rankings_from_range(&range), Err(WorkbookError::Empty)));
    }
}
