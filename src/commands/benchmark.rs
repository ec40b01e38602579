//! Benchmark command
//!
//! Times the enumeration pass across multiple root words.

use crate::core::RootWord;
use crate::dictionary::WordValidator;
use crate::enumerate::{CancelToken, SubPermutations, collect_possible_words};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_roots: usize,
    pub total_candidates: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub richest_root: Option<(String, usize)>,
    /// Number of possible words of each length, summed over all roots
    pub length_distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub candidates_per_second: f64,
}

/// Run the enumeration pass for every root word
pub fn run_benchmark<V: WordValidator + ?Sized>(
    roots: &[RootWord],
    validator: &V,
    locale: &str,
) -> BenchmarkResult {
    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_candidates = 0;
    let mut total_words = 0;
    let mut min_words = usize::MAX;
    let mut max_words = 0;
    let mut richest_root: Option<(String, usize)> = None;
    let mut length_distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for root in roots {
        pb.set_message(root.text().to_uppercase());

        total_candidates += SubPermutations::new(root).count();
        let possible = collect_possible_words(root, validator, locale, &CancelToken::new());

        let found = possible.len();
        total_words += found;
        min_words = min_words.min(found);
        max_words = max_words.max(found);
        if richest_root.as_ref().is_none_or(|(_, best)| found > *best) {
            richest_root = Some((root.text().to_string(), found));
        }
        for word in possible.iter() {
            *length_distribution.entry(word.len()).or_insert(0) += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_roots = roots.len();

    BenchmarkResult {
        total_roots,
        total_candidates,
        total_words,
        average_words: if total_roots == 0 {
            0.0
        } else {
            total_words as f64 / total_roots as f64
        },
        min_words: if total_roots == 0 { 0 } else { min_words },
        max_words,
        richest_root,
        length_distribution,
        duration,
        candidates_per_second: total_candidates as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListValidator;
    use crate::wordlists::RootWordList;

    fn roots(words: &[&str]) -> Vec<RootWord> {
        words.iter().map(|w| RootWord::new(w).unwrap()).collect()
    }

    #[test]
    fn benchmark_runs() {
        let validator = WordListValidator::embedded("en");
        let roots = roots(&["drinking", "keyboard", "lemonade"]);

        let result = run_benchmark(&roots, &validator, "en");

        assert_eq!(result.total_roots, 3);
        assert!(result.total_candidates > 0);
        assert!(result.total_words > 0);
        assert!(result.min_words <= result.max_words);
        assert!(result.richest_root.is_some());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let validator = WordListValidator::embedded("en");
        let roots = roots(&["drinking", "keyboard"]);

        let result = run_benchmark(&roots, &validator, "en");

        let distribution_sum: usize = result.length_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        for &len in result.length_distribution.keys() {
            assert!((3..=8).contains(&len));
        }
    }

    #[test]
    fn benchmark_counts_candidates_exactly() {
        let validator = WordListValidator::new("en", ["abc"]);
        let roots = roots(&["abcdefgh"]);

        let result = run_benchmark(&roots, &validator, "en");

        assert_eq!(result.total_candidates, 109_535);
        assert_eq!(result.total_words, 1);
    }

    #[test]
    fn benchmark_empty_root_list() {
        let validator = WordListValidator::embedded("en");
        let result = run_benchmark(&[], &validator, "en");

        assert_eq!(result.total_roots, 0);
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_words, 0);
        assert!(result.richest_root.is_none());
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let validator = WordListValidator::embedded("en");
        let list = RootWordList::embedded().unwrap();
        let roots: Vec<RootWord> = list.words().iter().take(4).cloned().collect();

        let result = run_benchmark(&roots, &validator, "en");

        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }
}
