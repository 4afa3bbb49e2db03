use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "egogram")]
#[command(about = "Egogram personality-type questionnaire scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an answer file and render the diagnosis report
    Score {
        /// Answer file (JSON list of {"questionId", "value"})
        answers: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Student identifier recorded in the report
        #[arg(long, default_value = "unknown")]
        student_id: String,

        /// Diagnosis date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Fail unless all 60 questions are answered
        #[arg(long)]
        strict: bool,

        /// Score with the earlier revision's secondary cutoff
        #[arg(long)]
        legacy_cutoff: bool,
    },

    /// Print the question catalog
    Questions {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Restrict to one factor (A, B, C, D, E, S)
        #[arg(long)]
        factor: Option<FactorArg>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FactorArg {
    A,
    B,
    C,
    D,
    E,
    S,
}

impl From<FactorArg> for crate::core::Factor {
    fn from(f: FactorArg) -> Self {
        match f {
            FactorArg::A => crate::core::Factor::A,
            FactorArg::B => crate::core::Factor::B,
            FactorArg::C => crate::core::Factor::C,
            FactorArg::D => crate::core::Factor::D,
            FactorArg::E => crate::core::Factor::E,
            FactorArg::S => crate::core::Factor::S,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
