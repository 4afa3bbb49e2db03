//! CLI command implementations.
//!
//! - **score**: score an answer file and render the diagnosis report
//! - **questions**: print the question catalog
//! - **init**: initialize a new `.egogram.toml` configuration file

pub mod init;
pub mod questions;
pub mod score;

pub use init::init_config;
pub use questions::{print_questions, QuestionsConfig};
pub use score::{score_answers_file, ScoreConfig};
