//! Answer-file input: a JSON array of `{"questionId": n, "value": bool}`.

use crate::core::Answer;
use anyhow::{Context, Result};
use std::path::Path;

/// Read and parse an answer file.
///
/// The list may be partial and may answer the same question more than once;
/// upsert semantics are applied by the answer sheet, not here.
pub fn read_answer_file(path: &Path) -> Result<Vec<Answer>> {
    let content = crate::io::read_file(path)
        .with_context(|| format!("failed to read answer file {}", path.display()))?;
    let answers: Vec<Answer> = serde_json::from_str(&content)
        .with_context(|| format!("invalid answer file {}", path.display()))?;
    Ok(answers)
}
