//! Serializable table specs.
//!
//! A [`Document`] is an ordered list of [`TableSpec`]s loaded from JSON or
//! TOML. JSON input may also be a single bare table object.
//!
//! ```toml
//! [[tables]]
//! title = "Ports"
//! anchor_text = "ports"
//! headers = ["Name", "Port"]
//! rows = [["http", "80"], ["https", "443"]]
//! ```

use crate::error::{Result, TableError};
use crate::table::{Table, DEFAULT_HEADING_LEVEL};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Key that marks a multi-table document.
const TABLES_KEY: &str = "tables";

/// Spec file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Toml,
}

impl InputFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }
}

impl FromStr for InputFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "toml" => Ok(InputFormat::Toml),
            other => Err(TableError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Json => write!(f, "json"),
            InputFormat::Toml => write!(f, "toml"),
        }
    }
}

/// One table as written in a spec file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_text: Option<String>,
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

fn default_heading_level() -> u8 {
    DEFAULT_HEADING_LEVEL
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            title: String::new(),
            anchor_text: None,
            heading_level: default_heading_level(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl TableSpec {
    /// Reject specs whose output would silently differ from what was written.
    pub fn validate(&self) -> Result<()> {
        if self.heading_level == 0 {
            return Err(TableError::InvalidSpec(
                "heading_level must be at least 1".to_string(),
            ));
        }
        let has_anchor = self.anchor_text.as_deref().is_some_and(|a| !a.is_empty());
        if has_anchor && self.title.is_empty() {
            return Err(TableError::InvalidSpec(
                "anchor_text requires a title".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a [`Table`] through its setters so widths are computed.
    pub fn into_table(self) -> Table {
        let mut table = Table::new()
            .with_title(self.title)
            .with_heading_level(self.heading_level);
        table.set_anchor_text(self.anchor_text);
        table.set_headers(self.headers);
        table.set_rows(self.rows);
        table
    }
}

impl From<TableSpec> for Table {
    fn from(spec: TableSpec) -> Self {
        spec.into_table()
    }
}

/// An ordered list of tables rendered back to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    pub tables: Vec<TableSpec>,
}

impl Document {
    /// Parse a JSON document or a single bare table object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(TableError::InvalidSpec(
                "expected a JSON object for a table or document".to_string(),
            ));
        }
        let doc: Document = if let Some(tables) = value.get(TABLES_KEY) {
            let positional = tables
                .as_array()
                .and_then(|items| items.iter().position(|item| !item.is_object()));
            if let Some(idx) = positional {
                return Err(TableError::InvalidSpec(format!(
                    "table {}: expected a JSON object",
                    idx
                )));
            }
            serde_json::from_value(value)?
        } else {
            Document {
                tables: vec![serde_json::from_value(value)?],
            }
        };
        doc.validate()?;
        Ok(doc)
    }

    /// Parse a TOML document or a single top-level table.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let value: toml::Table = toml::from_str(text)?;
        let doc: Document = if value.contains_key(TABLES_KEY) {
            toml::Value::Table(value).try_into()?
        } else {
            Document {
                tables: vec![toml::Value::Table(value).try_into()?],
            }
        };
        doc.validate()?;
        Ok(doc)
    }

    /// Parse `text` in the given format.
    pub fn parse(text: &str, format: InputFormat) -> Result<Self> {
        match format {
            InputFormat::Json => Self::from_json_str(text),
            InputFormat::Toml => Self::from_toml_str(text),
        }
    }

    /// Load a spec file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = InputFormat::from_path(path)?;
        let text = std::fs::read_to_string(path)?;
        let doc = Self::parse(&text, format)?;
        debug!(path = %path.display(), %format, tables = doc.tables.len(), "Loaded table spec");
        Ok(doc)
    }

    /// Validate every table, reporting the first failure with its index.
    pub fn validate(&self) -> Result<()> {
        for (idx, spec) in self.tables.iter().enumerate() {
            spec.validate().map_err(|err| match err {
                TableError::InvalidSpec(msg) => {
                    TableError::InvalidSpec(format!("table {}: {}", idx, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Build every table in order.
    pub fn into_tables(self) -> Vec<Table> {
        self.tables.into_iter().map(Table::from).collect()
    }

    /// Render every table and concatenate the output.
    pub fn render(&self) -> String {
        self.tables
            .iter()
            .cloned()
            .map(|spec| spec.into_table().render())
            .collect()
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
