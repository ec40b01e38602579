//! Command implementations

pub mod answers;
pub mod benchmark;
pub mod check;
pub mod play;

pub use answers::{AnswersResult, list_answers};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::check_word;
pub use play::run_play;
