use crate::core::{catalog, Factor};
use crate::io::output::OutputFormat;
use anyhow::Result;
use colored::*;

pub struct QuestionsConfig {
    pub format: OutputFormat,
    pub factor: Option<Factor>,
}

pub fn print_questions(config: QuestionsConfig) -> Result<()> {
    let questions: Vec<_> = match config.factor {
        Some(factor) => catalog::questions_for(factor).collect(),
        None => catalog::questions().iter().collect(),
    };

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&questions)?);
        }
        OutputFormat::Markdown => {
            println!("| # | 요인 | 질문 |");
            println!("|---|------|------|");
            for q in questions {
                println!("| {} | {} | {} |", q.id, q.factor.short_label(), q.text);
            }
        }
        OutputFormat::Terminal => {
            let mut current: Option<Factor> = None;
            for q in questions {
                if current != Some(q.factor) {
                    current = Some(q.factor);
                    println!(
                        "{}",
                        format!("{} ({})", q.factor.title_ko(), q.factor.short_label())
                            .bold()
                            .blue()
                    );
                }
                println!("  {:2}. {}", q.id, q.text);
            }
        }
    }
    Ok(())
}
