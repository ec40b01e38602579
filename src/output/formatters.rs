//! Formatting utilities for terminal output

/// Format a score as a circled badge, e.g. `(6)`
#[must_use]
pub fn score_badge(score: u32) -> String {
    format!("({score})")
}

/// Lay words out in rows of `columns` cells, each `width` characters wide
///
/// The last row is not padded with empty cells.
#[must_use]
pub fn column_rows(words: &[String], columns: usize, width: usize) -> Vec<String> {
    words
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn badge_wraps_score() {
        assert_eq!(score_badge(18), "(18)");
    }

    #[test]
    fn rows_of_three() {
        let rows = column_rows(&words(&["din", "dig", "gin", "kid", "rid"]), 3, 6);
        assert_eq!(rows, ["din   dig   gin", "kid   rid"]);
    }

    #[test]
    fn rows_empty() {
        assert!(column_rows(&[], 3, 6).is_empty());
    }

    #[test]
    fn rows_zero_columns_treated_as_one() {
        let rows = column_rows(&words(&["a", "b"]), 0, 2);
        assert_eq!(rows, ["a", "b"]);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
