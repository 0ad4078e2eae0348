//! reStructuredText simple-table rendering.
//!
//! Builds RST "simple tables" from header and row cells: `=` border lines,
//! centered cell text, and an optional title with an anchor label that
//! other documents can cross-reference.
//!
//! # Example
//!
//! ```
//! use rippy_table::Table;
//!
//! let mut table = Table::new().with_title("Foo").with_anchor_text("xxx-foo");
//! table.set_headers(["One", "Two", "Three"]);
//! assert_eq!(table.col_widths.get(&2), Some(&19));
//!
//! let rst = table.render();
//! assert!(rst.starts_with(".. _xxx-foo:\n\nFoo\n===\n\n"));
//! ```
//!
//! Tables can also be described in JSON or TOML and loaded as a
//! [`Document`]; see [`spec`].

pub mod error;
pub mod markup;
pub mod spec;
pub mod table;

pub use error::{Result, TableError};
pub use markup::{COLUMN_PADDING, COLUMN_SEPARATOR};
pub use spec::{Document, InputFormat, TableSpec};
pub use table::{Table, DEFAULT_HEADING_LEVEL, EMPTY_TABLE};
