//! Low-level RST simple-table markup.
//!
//! Column widths are looked up by index with a zero default, so a width map
//! that is missing a column still renders (as a zero-width border segment).

use std::collections::BTreeMap;

/// Padding added to the longest cell of every column.
pub const COLUMN_PADDING: usize = 14;

/// Gap between adjacent columns.
pub const COLUMN_SEPARATOR: &str = "    ";

/// Character used for table borders and title underlines.
pub const BORDER_CHAR: char = '=';

/// Display width of a cell: its character count.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Center `text` in a field of `width` characters.
///
/// Odd padding puts the extra space on the right. Text wider than the field
/// is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let len = text_width(text);
    if len >= width {
        return text.to_string();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;

    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// A row of border runs, one per column.
pub fn border_line(widths: &BTreeMap<usize, usize>, columns: usize) -> String {
    (0..columns)
        .map(|col| {
            let width = widths.get(&col).copied().unwrap_or(0);
            BORDER_CHAR.to_string().repeat(width)
        })
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// A content line with every cell centered in its column.
///
/// Cells past the end of `cells` render as empty.
pub fn content_line<S: AsRef<str>>(
    cells: &[S],
    widths: &BTreeMap<usize, usize>,
    columns: usize,
) -> String {
    (0..columns)
        .map(|col| {
            let text = cells.get(col).map(AsRef::as_ref).unwrap_or("");
            center(text, widths.get(&col).copied().unwrap_or(0))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}
