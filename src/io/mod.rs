pub mod answers;
pub mod output;

pub use answers::read_answer_file;
pub use output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter, TerminalWriter};

use anyhow::Result;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
