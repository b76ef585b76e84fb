use std::fmt::Display;

use crate::types::Deal;
use crate::utils::{column_width, word_wrap};

fn cell(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

pub const HEADERS: [&str; 6] = ["Name", "Price (CHF)", "Discount", "Store", "Validity", "Misc"];
pub const MISC_WRAP_WIDTH: usize = 40;

/// Bold-bordered table with one row per deal.
#[derive(Debug, Clone)]
pub struct DealTable {
    rows: Vec<[Vec<String>; 6]>,
}

impl DealTable {
    pub fn new(deals: &[Deal]) -> Self {
        let rows = deals
            .iter()
            .map(|deal| {
                [
                    cell(&deal.name),
                    cell(&deal.price),
                    cell(&deal.discount),
                    cell(&deal.store),
                    cell(&deal.validity),
                    word_wrap(&deal.description, MISC_WRAP_WIDTH),
                ]
            })
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_widths(&self) -> [usize; 6] {
        let mut widths = HEADERS.map(column_width);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                let widest = cell.iter().map(|l| column_width(l)).max().unwrap_or(0);
                *width = (*width).max(widest);
            }
        }
        widths
    }
}

fn rule(widths: &[usize; 6], left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "━".repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(&middle.to_string()))
}

fn row_lines(widths: &[usize; 6], cells: [&[String]; 6]) -> Vec<String> {
    let height = cells.iter().map(|c| c.len()).max().unwrap_or(1).max(1);
    (0..height)
        .map(|i| {
            let columns: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| {
                    let text = cell.get(i).map(String::as_str).unwrap_or("");
                    let fill = width.saturating_sub(column_width(text));
                    format!(" {text}{} ", " ".repeat(fill))
                })
                .collect();
            format!("┃{}┃", columns.join("┃"))
        })
        .collect()
}

impl Display for DealTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.column_widths();
        let headers = HEADERS.map(|h| vec![h.to_string()]);

        writeln!(f, "{}", rule(&widths, '┏', '┳', '┓'))?;
        for line in row_lines(&widths, headers.each_ref().map(Vec::as_slice)) {
            writeln!(f, "{line}")?;
        }
        for row in &self.rows {
            writeln!(f, "{}", rule(&widths, '┣', '╋', '┫'))?;
            for line in row_lines(&widths, row.each_ref().map(Vec::as_slice)) {
                writeln!(f, "{line}")?;
            }
        }
        writeln!(f, "{}", rule(&widths, '┗', '┻', '┛'))
    }
}
