//! Report writers for the three output formats.

use crate::config::Locale;
use crate::core::{Factor, FactorScores};
use crate::report::DiagnosisReport;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &DiagnosisReport, locale: Locale) -> anyhow::Result<()>;
}

fn primary_label(report: &DiagnosisReport, locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => report.result.primary.label_ko(),
        Locale::Ja => report.result.primary.label_ja(),
    }
}

fn secondary_label(report: &DiagnosisReport, locale: Locale) -> &'static str {
    match locale {
        Locale::Ko => report.result.secondary.label_ko(),
        Locale::Ja => report.result.secondary.label_ja(),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &DiagnosisReport, _locale: Locale) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &DiagnosisReport, locale: Locale) -> anyhow::Result<()> {
        writeln!(self.writer, "# 성격 진단 결과")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- 학생: {}", report.student_id)?;
        writeln!(self.writer, "- 진단일: {}", report.diagnosis_date)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## 결과")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| 구분 | 유형 | 설명 |"
        )?;
        writeln!(self.writer, "|------|------|------|")?;
        writeln!(
            self.writer,
            "| 기본 유형 | {} | {} |",
            primary_label(report, locale),
            report.result.primary.description_ko()
        )?;
        writeln!(
            self.writer,
            "| 사고 유형 | {} | {} |",
            secondary_label(report, locale),
            report.result.secondary.description_ko()
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## 요인별 점수")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| 요인 | 점수 |")?;
        writeln!(self.writer, "|------|------|")?;
        for factor in Factor::ALL {
            writeln!(
                self.writer,
                "| {} ({}) | {}/10 |",
                factor.title_ko(),
                factor.short_label(),
                report.scores.get(factor)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## 학습 가이드")?;
        writeln!(self.writer)?;
        for line in report.result.primary.guidance_ko() {
            writeln!(self.writer, "- {line}")?;
        }
        for line in report.result.secondary.guidance_ko() {
            writeln!(self.writer, "- {line}")?;
        }
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &DiagnosisReport, locale: Locale) -> anyhow::Result<()> {
        print_header(report);
        print_result(report, locale);
        print_score_table(&report.scores);
        print_guidance(report);
        Ok(())
    }
}

fn print_header(report: &DiagnosisReport) {
    println!("{}", "성격 진단 결과".bold().blue());
    println!("{}", "================".blue());
    println!("  학생: {}", report.student_id);
    println!("  진단일: {}", report.diagnosis_date);
    println!();
}

fn print_result(report: &DiagnosisReport, locale: Locale) {
    println!(
        "  기본 유형: {}",
        primary_label(report, locale).bold().green()
    );
    println!("    {}", report.result.primary.description_ko());
    println!(
        "  사고 유형: {}",
        secondary_label(report, locale).bold().cyan()
    );
    println!("    {}", report.result.secondary.description_ko());
    println!();
}

fn print_score_table(scores: &FactorScores) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["요인", "점수"]);
    for factor in Factor::ALL {
        table.add_row(vec![
            Cell::new(format!("{} ({})", factor.title_ko(), factor.short_label())),
            Cell::new(format!("{}/10", scores.get(factor))),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_guidance(report: &DiagnosisReport) {
    println!("{}", "학습 가이드:".bold());
    for line in report.result.primary.guidance_ko() {
        println!("  - {line}");
    }
    for line in report.result.secondary.guidance_ko() {
        println!("  - {line}");
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Archetype, PersonalityResult, SecondaryAxis};
    use chrono::NaiveDate;

    fn sample_report() -> DiagnosisReport {
        DiagnosisReport::new(
            "student-1",
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            FactorScores {
                a: 2,
                b: 7,
                c: 8,
                d: 6,
                e: 2,
                stress: 3,
            },
            PersonalityResult {
                primary: Archetype::Sakura,
                secondary: SecondaryAxis::Digital,
            },
        )
    }

    #[test]
    fn test_json_writer_emits_parseable_payload() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report(), Locale::Ko)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["primaryType"], "Sakura");
        assert_eq!(value["studentId"], "student-1");
    }

    #[test]
    fn test_markdown_writer_includes_all_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report(), Locale::Ko)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# 성격 진단 결과"));
        assert!(text.contains("벚꽃"));
        assert!(text.contains("디지털"));
        assert!(text.contains("| 논리성 (C) | 8/10 |"));
    }

    #[test]
    fn test_markdown_writer_respects_locale() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report(), Locale::Ja)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("さくら"));
        assert!(text.contains("デジタル"));
    }
}
