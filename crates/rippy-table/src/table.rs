//! The RST table formatter.
//!
//! A [`Table`] holds a title, an optional anchor label, header cells and row
//! cells. Column widths are derived state: every call to
//! [`Table::set_headers`] or [`Table::set_rows`] recomputes
//! [`Table::col_widths`] from scratch over the current headers and rows.
//!
//! ```
//! use rippy_table::Table;
//!
//! let mut table = Table::new().with_title("Ports");
//! table.set_headers(["Name", "Port"]);
//! table.set_rows([["http", "80"], ["https", "443"]]);
//! assert!(table.render().starts_with("Ports\n=====\n\n"));
//! ```

use crate::markup::{self, BORDER_CHAR, COLUMN_PADDING};

use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// Default section heading level for a new table.
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

/// Rendered output for a table with neither headers nor rows.
pub const EMPTY_TABLE: &str = "None\n\n";

/// An RST simple table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    title: String,
    anchor_text: Option<String>,
    heading_level: u8,
    headers: Box<[String]>,
    rows: Box<[Box<[String]>]>,
    /// Column index to rendered width.
    ///
    /// Overwritten by every headers/rows assignment. Writable so that callers
    /// can pin widths before reading markup.
    pub col_widths: BTreeMap<usize, usize>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            title: String::new(),
            anchor_text: None,
            heading_level: DEFAULT_HEADING_LEVEL,
            headers: Box::default(),
            rows: Box::default(),
            col_widths: BTreeMap::new(),
        }
    }
}

impl Table {
    /// Create an empty, untitled table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the anchor label emitted before the title.
    pub fn with_anchor_text(mut self, anchor_text: impl Into<String>) -> Self {
        self.anchor_text = Some(anchor_text.into());
        self
    }

    /// Set the heading level.
    pub fn with_heading_level(mut self, heading_level: u8) -> Self {
        self.heading_level = heading_level;
        self
    }

    /// The title block: optional anchor, title text and `=` underline.
    ///
    /// Empty when the title is empty, whatever the anchor text is.
    pub fn title(&self) -> String {
        if self.title.is_empty() {
            return String::new();
        }
        let underline = BORDER_CHAR
            .to_string()
            .repeat(markup::text_width(&self.title));
        match self.anchor_text().filter(|a| !a.is_empty()) {
            Some(anchor) => format!(".. _{}:\n\n{}\n{}\n\n", anchor, self.title, underline),
            None => format!("{}\n{}\n\n", self.title, underline),
        }
    }

    /// The plain title text as configured.
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// The anchor label as stored. An empty label emits no anchor line.
    pub fn anchor_text(&self) -> Option<&str> {
        self.anchor_text.as_deref()
    }

    /// Replace the anchor label.
    pub fn set_anchor_text(&mut self, anchor_text: Option<String>) {
        self.anchor_text = anchor_text;
    }

    /// The section heading level (3 unless set).
    pub fn heading_level(&self) -> u8 {
        self.heading_level
    }

    /// Replace the section heading level.
    pub fn set_heading_level(&mut self, heading_level: u8) {
        self.heading_level = heading_level;
    }

    /// Replace the header cells and recompute column widths.
    pub fn set_headers<I, S>(&mut self, headers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self.recompute_col_widths();
    }

    /// Replace the rows and recompute column widths.
    pub fn set_rows<I, R, S>(&mut self, rows: I)
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.recompute_col_widths();
    }

    /// The header block as markup lines.
    ///
    /// Border, newline, centered header cells, newline, border, newline.
    /// Empty when no headers are set.
    pub fn headers(&self) -> Vec<String> {
        if self.headers.is_empty() {
            return Vec::new();
        }
        let columns = self.column_count();
        let border = markup::border_line(&self.col_widths, columns);
        let content = markup::content_line(&self.headers, &self.col_widths, columns);
        vec![
            border.clone(),
            "\n".to_string(),
            content,
            "\n".to_string(),
            border,
            "\n".to_string(),
        ]
    }

    /// The header cells as stored.
    pub fn raw_headers(&self) -> &[String] {
        &self.headers
    }

    /// The rows as stored, one vector of cells per row.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }

    /// Whether the table has neither headers nor rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of columns drawn: the widest of the headers, any row, and the
    /// width map.
    pub fn column_count(&self) -> usize {
        let from_widths = self
            .col_widths
            .keys()
            .next_back()
            .map_or(0, |last| last + 1);
        self.data_column_count().max(from_widths)
    }

    fn data_column_count(&self) -> usize {
        let widest_row = self.rows.iter().map(|row| row.len()).max().unwrap_or(0);
        self.headers.len().max(widest_row)
    }

    fn recompute_col_widths(&mut self) {
        let columns = self.data_column_count();
        let mut widths = BTreeMap::new();

        for col in 0..columns {
            let longest = self
                .headers
                .get(col)
                .into_iter()
                .chain(self.rows.iter().filter_map(|row| row.get(col)))
                .map(|cell| markup::text_width(cell))
                .max()
                .unwrap_or(0);
            widths.insert(col, longest + COLUMN_PADDING);
        }

        let ragged = self.rows.iter().filter(|row| row.len() != columns).count();
        if ragged > 0 {
            warn!(
                ragged_rows = ragged,
                columns, "Rows with missing cells render them as empty"
            );
        }

        debug!(
            columns,
            headers = self.headers.len(),
            rows = self.rows.len(),
            "Recomputed column widths"
        );
        self.col_widths = widths;
    }

    /// Render the complete table.
    ///
    /// A table with no headers and no rows renders as [`EMPTY_TABLE`].
    /// Otherwise: title block, header block (or a bare top border), one line
    /// per row, closing border and a blank line.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_TABLE.to_string();
        }

        let columns = self.column_count();
        let border = markup::border_line(&self.col_widths, columns);

        let mut out = self.title();
        if self.headers.is_empty() {
            out.push_str(&border);
            out.push('\n');
        } else {
            out.extend(self.headers());
        }
        for row in self.rows.iter() {
            out.push_str(&markup::content_line(row, &self.col_widths, columns));
            out.push('\n');
        }
        out.push_str(&border);
        out.push_str("\n\n");

        trace!(columns, bytes = out.len(), "Rendered table");
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
