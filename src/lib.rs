// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod report;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    catalog, Answer, Archetype, Factor, FactorScores, PersonalityResult, Question, SecondaryAxis,
};

pub use crate::config::{EgogramConfig, Locale};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::report::DiagnosisReport;
pub use crate::scoring::{classify, classify_default, score_answers, ScoringThresholds};
pub use crate::session::{AnswerSheet, DiagnosisSession, SessionError};
