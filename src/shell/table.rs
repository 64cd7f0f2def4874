//! Plain-text grid tables for the shell's listings.
//!
//! ```text
//! +------+--------+
//! | ID   | Name   |
//! +======+========+
//! | 1    | Soup   |
//! +------+--------+
//! ```

use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing trailing cells render empty; extra cells are dropped.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }
}

fn rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", fill.to_string().repeat(width + 2))?;
    }
    writeln!(f, "+")
}

fn line<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = Option<&'a String>>,
) -> fmt::Result {
    for (width, cell) in widths.iter().zip(cells) {
        let text = cell.map(String::as_str).unwrap_or("");
        let pad = width - text.chars().count();
        write!(f, "| {}{} ", text, " ".repeat(pad))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        rule(f, &widths, '-')?;
        line(f, &widths, self.headers.iter().map(Some))?;
        rule(f, &widths, '=')?;
        for row in &self.rows {
            line(f, &widths, (0..widths.len()).map(|i| row.get(i)))?;
            rule(f, &widths, '-')?;
        }
        Ok(())
    }
}

/// Prices are shown with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}
