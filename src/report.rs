//! Report Module
//!
//! Plain-text rendering of Store contents for the CLI.
//!
//! ```text
//! +---------+----------+---------+--------+----------+
//! | Country | Code     | Product | Cost   | Quantity |
//! +=========+==========+=========+========+==========+
//! | SA      | SKU00001 | Air Max | 150.00 |        2 |
//! +---------+----------+---------+--------+----------+
//! ```

use crate::record::Record;

/// Column alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// A grid of already-formatted cells
struct Table {
    headers: Vec<&'static str>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| *h).collect(),
            aligns: columns.iter().map(|(_, a)| *a).collect(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let rule = |fill: char| {
            let mut line = String::from("+");
            for width in &widths {
                line.extend(std::iter::repeat(fill).take(width + 2));
                line.push('+');
            }
            line.push('\n');
            line
        };
        let row_line = |cells: &[String], aligns: &[Align]| {
            let mut line = String::from("|");
            for ((cell, width), align) in cells.iter().zip(&widths).zip(aligns) {
                let cell = match align {
                    Align::Left => format!(" {:<width$} |", cell, width = *width),
                    Align::Right => format!(" {:>width$} |", cell, width = *width),
                };
                line.push_str(&cell);
            }
            line.push('\n');
            line
        };

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        let header_aligns = vec![Align::Left; headers.len()];

        let mut out = rule('-');
        out.push_str(&row_line(&headers, &header_aligns));
        out.push_str(&rule('='));
        for row in &self.rows {
            out.push_str(&row_line(row, &self.aligns));
            out.push_str(&rule('-'));
        }
        out
    }
}

const RECORD_COLUMNS: [(&str, Align); 5] = [
    ("Country", Align::Left),
    ("Code", Align::Left),
    ("Product", Align::Left),
    ("Cost", Align::Right),
    ("Quantity", Align::Right),
];

fn record_cells(record: &Record) -> Vec<String> {
    vec![
        record.country().to_string(),
        record.code().to_string(),
        record.product().to_string(),
        format!("{:.2}", record.cost()),
        record.quantity().to_string(),
    ]
}

/// Table of every record in the order given
pub fn render_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut table = Table::new(&RECORD_COLUMNS);
    for record in records {
        table.push(record_cells(record));
    }
    table.render()
}

/// Record table with an extra stock value (cost * quantity) column
pub fn render_values<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut columns = RECORD_COLUMNS.to_vec();
    columns.push(("Value", Align::Right));

    let mut table = Table::new(&columns);
    for record in records {
        let mut cells = record_cells(record);
        cells.push(format!("{:.2}", record.value()));
        table.push(cells);
    }
    table.render()
}

/// Sale banner for the most-stocked product
pub fn sale_notice(record: &Record) -> String {
    format!(
        "{}s on sale now!!! Get 'em fast, only {} left in stock!",
        record.product(),
        record.quantity()
    )
}

/// One-line summary of the least-stocked product
pub fn low_stock_notice(record: &Record) -> String {
    format!(
        "{} ({}) has the least stock ({}).",
        record.product(),
        record.code(),
        record.quantity()
    )
}
