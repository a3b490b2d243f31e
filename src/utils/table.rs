//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{display_width, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, sep: &str) -> Self {
        self.separator = sep.chars().next().unwrap_or('-');
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Columns grow to fit their widest cell; ANSI colour codes do not count.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .chain([col.width, display_width(&col.header)])
                    .max()
                    .unwrap_or(col.width)
            })
            .collect();

        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total.saturating_sub(1)));
        out.push('\n');

        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(cell, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
