//! Display functions for rounds and command results

use super::formatters::{column_rows, create_progress_bar, score_badge};
use crate::commands::{AnswersResult, BenchmarkResult};
use crate::core::RootWord;
use crate::game::{AnswerGroup, GuessError, RoundSummary, UsedWord, group_by_length};
use colored::Colorize;

const ANSWER_COLUMNS: usize = 3;
const ANSWER_WIDTH: usize = 12;

/// Print the banner at the start of a round
pub fn print_round_header(root: &RootWord, seconds: u32, high_score: u32) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}   ⏳ {seconds}s   High score: {}",
        root.text().to_uppercase().bright_yellow().bold(),
        high_score.to_string().bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print accepted words, most recent first
pub fn print_used_words(used_words: &[UsedWord]) {
    if used_words.is_empty() {
        println!("  {}", "No words yet".bright_black());
        return;
    }
    for used in used_words {
        println!("  {} {}", score_badge(used.score).bright_cyan(), used.word);
    }
}

/// Print a rejected guess as title and message
pub fn print_guess_error(error: &GuessError) {
    println!(
        "  {} {}",
        format!("✗ {}:", error.title()).red().bold(),
        error.message()
    );
}

/// Print the end-of-round answers, grouped by length
pub fn print_round_summary(summary: &RoundSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ALL ANSWERS FOR".bright_cyan().bold(),
        summary.possible.root().text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    print_groups(&summary.groups());

    if !summary.possible.is_complete() {
        println!(
            "\n{}",
            "(search was still running; the list may be incomplete)".bright_black()
        );
        let unlisted = summary.unlisted_guesses();
        if !unlisted.is_empty() {
            println!("  Also found by you: {}", unlisted.join(", "));
        }
    }

    let coverage = summary.coverage();
    println!(
        "\n📊 Score: {}   High score: {}",
        summary.score.to_string().bright_yellow().bold(),
        summary.high_score.to_string().bright_cyan()
    );
    println!(
        "   Found:  [{}] {:.0}% of {} words",
        create_progress_bar(coverage, 1.0, 30).green(),
        coverage * 100.0,
        summary.possible.len()
    );
}

/// Print every possible word for a root word
pub fn print_answers_result(result: &AnswersResult) {
    print_groups(&group_by_length(&result.possible, &[]));
    println!(
        "\n{} words found in {:.2}s",
        result.possible.len().to_string().bright_yellow().bold(),
        result.duration.as_secs_f64()
    );
}

/// Print a scored word from the check command
pub fn print_check_result(root: &RootWord, result: &Result<UsedWord, GuessError>) {
    match result {
        Ok(used) => println!(
            "{} {} can be made from {} and scores {}",
            "✓".green().bold(),
            used.word.to_uppercase().bright_white().bold(),
            root.text().to_uppercase().bright_yellow(),
            used.score.to_string().bright_cyan()
        ),
        Err(e) => print_guess_error(e),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Root words:       {}", result.total_roots);
    println!("   Candidates:       {}", result.total_candidates);
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).green()
    );
    if let Some((root, count)) = &result.richest_root {
        println!("   Richest root:     {} ({count})", root.to_uppercase());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Candidates/sec:   {:.0}", result.candidates_per_second);

    println!("\n📈 {}", "Words by length:".bright_cyan().bold());
    for (&length, &count) in &result.length_distribution {
        let pct = if result.total_words == 0 {
            0.0
        } else {
            (count as f64 / result.total_words as f64) * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {length}: {bar} {count:5} ({pct:5.1}%)");
    }
}

fn print_groups(groups: &[AnswerGroup]) {
    for group in groups {
        println!(
            "\n{} {}",
            format!("{} Letter Words", group.length).bright_cyan().bold(),
            format!("scoring {}", group.score).bright_black()
        );
        if group.entries.is_empty() {
            println!("  {}", "none".bright_black());
            continue;
        }

        // Pad before coloring so escape codes do not skew the columns
        let cells: Vec<String> = group
            .entries
            .iter()
            .map(|entry| {
                let cell = format!("{:<ANSWER_WIDTH$}", entry.word);
                if entry.guessed {
                    cell.red().bold().to_string()
                } else {
                    cell
                }
            })
            .collect();
        for row in column_rows(&cells, ANSWER_COLUMNS, 0) {
            println!("  {row}");
        }
    }
}
