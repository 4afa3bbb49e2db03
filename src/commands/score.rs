use crate::config::EgogramConfig;
use crate::core::catalog;
use crate::io::output::{JsonWriter, MarkdownWriter, OutputFormat, OutputWriter};
use crate::report::DiagnosisReport;
use crate::scoring::{self, ScoringThresholds};
use crate::session::AnswerSheet;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct ScoreConfig {
    pub answers: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub student_id: String,
    pub date: Option<NaiveDate>,
    pub strict: bool,
    pub legacy_cutoff: bool,
}

pub fn score_answers_file(config: ScoreConfig) -> Result<()> {
    let app_config = EgogramConfig::load()?;

    let answers = crate::io::read_answer_file(&config.answers)?;
    log::info!(
        "read {} answers from {}",
        answers.len(),
        config.answers.display()
    );

    let sheet = build_sheet(&answers)?;
    if config.strict && !sheet.is_complete() {
        anyhow::bail!(
            "incomplete answer set: {}/{} questions answered (strict mode)",
            sheet.len(),
            catalog::CATALOG_LEN
        );
    }

    let thresholds = if config.legacy_cutoff {
        ScoringThresholds::legacy()
    } else {
        app_config.thresholds()
    };

    let scores = sheet.scores();
    let result = scoring::classify(&scores, &thresholds);
    log::debug!("scores: {scores:?}, result: {result:?}");

    let date = config
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let report = DiagnosisReport::new(config.student_id.clone(), date, scores, result);

    let format = config
        .format
        .or_else(|| parse_format(&app_config.output.default_format))
        .unwrap_or(OutputFormat::Terminal);

    write_report(&report, format, config.output.as_deref(), &app_config)
}

/// Fold the raw answer list into a sheet, applying upsert semantics.
fn build_sheet(answers: &[crate::core::Answer]) -> Result<AnswerSheet> {
    let mut sheet = AnswerSheet::new();
    for answer in answers {
        sheet
            .record(answer.question_id, answer.value)
            .with_context(|| format!("bad answer for question {}", answer.question_id))?;
    }
    Ok(sheet)
}

fn parse_format(name: &str) -> Option<OutputFormat> {
    match name {
        "json" => Some(OutputFormat::Json),
        "markdown" => Some(OutputFormat::Markdown),
        "terminal" => Some(OutputFormat::Terminal),
        other => {
            log::warn!("unknown default_format {other:?} in config, falling back to terminal");
            None
        }
    }
}

fn write_report(
    report: &DiagnosisReport,
    format: OutputFormat,
    output: Option<&std::path::Path>,
    app_config: &EgogramConfig,
) -> Result<()> {
    match output {
        None => {
            let mut writer = crate::io::create_writer(format);
            writer.write_report(report, app_config.locale)
        }
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut writer: Box<dyn OutputWriter> = match format {
                OutputFormat::Json => Box::new(JsonWriter::new(file)),
                OutputFormat::Markdown => Box::new(MarkdownWriter::new(file)),
                OutputFormat::Terminal => {
                    anyhow::bail!("terminal format cannot be written to a file; use json or markdown")
                }
            };
            writer.write_report(report, app_config.locale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Answer;

    #[test]
    fn test_build_sheet_applies_upsert() {
        let answers = vec![
            Answer { question_id: 1, value: true },
            Answer { question_id: 1, value: false },
            Answer { question_id: 2, value: true },
        ];
        let sheet = build_sheet(&answers).unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(1), Some(false));
    }

    #[test]
    fn test_build_sheet_rejects_unknown_ids() {
        let answers = vec![Answer { question_id: 99, value: true }];
        assert!(build_sheet(&answers).is_err());
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!(parse_format("json"), Some(OutputFormat::Json));
        assert_eq!(parse_format("markdown"), Some(OutputFormat::Markdown));
        assert_eq!(parse_format("terminal"), Some(OutputFormat::Terminal));
        assert_eq!(parse_format("yaml"), None);
    }
}
