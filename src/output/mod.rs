//! Terminal output formatting
//!
//! Display utilities for rounds, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_answers_result, print_benchmark_result, print_check_result, print_guess_error,
    print_round_header, print_round_summary, print_used_words,
};
