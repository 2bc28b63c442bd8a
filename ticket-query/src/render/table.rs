//! Terminal table rendering.
//!
//! Projects listings into a fixed-column table: train code, station
//! pair, time pair, duration, then one column per seat class in
//! canonical order. Availability cells are green when seats remain and
//! red when sold out or not offered; a fetched fare is stacked under the
//! availability inside the same cell, keeping the column count fixed.

use comfy_table::{Cell, Color, Table, presets};

use crate::domain::{SeatClass, TrainListing};

/// Leading column labels, before the per-class columns.
const LEAD_COLUMNS: [&str; 4] = ["车次", "车站", "时间", "历时"];

/// Render listings into a table ready for printing.
///
/// An empty slice produces a header-only table.
pub fn build_table(listings: &[TrainListing]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::ASCII_FULL);

    let mut header: Vec<Cell> = LEAD_COLUMNS.iter().map(Cell::new).collect();
    header.extend(SeatClass::ALL.iter().map(|class| Cell::new(class.label())));
    table.set_header(header);

    for listing in listings {
        table.add_row(row_cells(listing));
    }

    table
}

fn row_cells(listing: &TrainListing) -> Vec<Cell> {
    let mut cells = vec![
        Cell::new(&listing.code),
        Cell::new(format!("{}\n{}", listing.from_station, listing.to_station)),
        Cell::new(format!("{}\n{}", listing.departure, listing.arrival)),
        Cell::new(&listing.duration),
    ];
    cells.extend(SeatClass::ALL.map(|class| seat_cell(listing, class)));
    cells
}

/// Availability (plus fare, when fetched) for one seat class.
fn seat_cell(listing: &TrainListing, class: SeatClass) -> Cell {
    let availability = listing.availability.get(class);

    let content = match listing.prices.get(class) {
        Some(fare) => format!("{availability}\n{fare}"),
        None => availability.clone(),
    };

    let color = if listing.has_seats(class) {
        Color::Green
    } else {
        Color::Red
    };

    Cell::new(content).fg(color)
}
