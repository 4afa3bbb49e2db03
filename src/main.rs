use anyhow::Result;
use clap::Parser;
use egogram::cli::{Cli, Commands};
use egogram::commands::{self, QuestionsConfig, ScoreConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            answers,
            format,
            output,
            student_id,
            date,
            strict,
            legacy_cutoff,
        } => commands::score_answers_file(ScoreConfig {
            answers,
            format: format.map(Into::into),
            output,
            student_id,
            date,
            strict,
            legacy_cutoff,
        }),
        Commands::Questions { format, factor } => commands::print_questions(QuestionsConfig {
            format: format.into(),
            factor: factor.map(Into::into),
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
