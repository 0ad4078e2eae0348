//! Input loading and rendering for a single CLI invocation.

use crate::error::{CliError, Result};
use rippy_table::{Document, InputFormat, TableError};

use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

const STDIN_NAME: &str = "<stdin>";

/// What to render and how to read it.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    /// Spec files in output order. Empty means stdin.
    pub inputs: Vec<PathBuf>,
    /// Force an input format instead of detecting it from the extension.
    pub format: Option<InputFormat>,
    /// Replace the title of a single-table document.
    pub title: Option<String>,
}

impl RenderRequest {
    /// Request for the given inputs with format detection and no title override.
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Force an input format; `None` detects it per file.
    pub fn with_format(mut self, format: Option<InputFormat>) -> Self {
        self.format = format;
        self
    }

    /// Replace the title of the single input table.
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Load every input and render the tables back to back.
    pub fn execute<R: Read>(&self, mut stdin: R) -> Result<String> {
        let stdin_count = self.inputs.iter().filter(|p| is_stdin(p)).count();
        if stdin_count > 1 {
            return Err(CliError::Args(
                "standard input can only be read once".to_string(),
            ));
        }

        let mut docs = Vec::with_capacity(self.inputs.len().max(1));
        if self.inputs.is_empty() {
            docs.push((STDIN_NAME.to_string(), self.load_stdin(&mut stdin)?));
        }
        for path in &self.inputs {
            let loaded = if is_stdin(path) {
                (STDIN_NAME.to_string(), self.load_stdin(&mut stdin)?)
            } else {
                (path.display().to_string(), self.load_path(path)?)
            };
            docs.push(loaded);
        }

        if let Some(title) = &self.title {
            apply_title(&mut docs, title)?;
        }

        let output: String = docs.iter().map(|(_, doc)| doc.render()).collect();
        info!(
            inputs = docs.len(),
            tables = docs.iter().map(|(_, d)| d.tables.len()).sum::<usize>(),
            bytes = output.len(),
            "Rendered tables"
        );
        Ok(output)
    }

    fn load_stdin<R: Read>(&self, stdin: &mut R) -> Result<Document> {
        let format = self.format.unwrap_or(InputFormat::Json);
        debug!(%format, "Reading spec from stdin");
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .map_err(|e| CliError::input(STDIN_NAME, TableError::Io(e)))?;
        Document::parse(&text, format).map_err(|e| CliError::input(STDIN_NAME, e))
    }

    fn load_path(&self, path: &Path) -> Result<Document> {
        let name = path.display().to_string();
        match self.format {
            Some(format) => {
                debug!(path = %name, %format, "Reading spec with forced format");
                let text = std::fs::read_to_string(path)
                    .map_err(|e| CliError::input(&name, TableError::Io(e)))?;
                Document::parse(&text, format).map_err(|e| CliError::input(&name, e))
            }
            None => Document::load(path).map_err(|e| CliError::input(&name, e)),
        }
    }
}

/// Retitle the only table across all inputs, then validate it again.
fn apply_title(docs: &mut [(String, Document)], title: &str) -> Result<()> {
    let total: usize = docs.iter().map(|(_, d)| d.tables.len()).sum();
    if total != 1 {
        return Err(CliError::Args(format!(
            "--title needs exactly one table, found {}",
            total
        )));
    }
    for (name, doc) in docs.iter_mut().filter(|(_, d)| !d.tables.is_empty()) {
        doc.tables[0].title = title.to_string();
        doc.validate().map_err(|e| CliError::input(name.as_str(), e))?;
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
