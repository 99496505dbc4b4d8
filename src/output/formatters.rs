//! Formatting utilities for terminal output

/// Bar for one guess-distribution row
///
/// Scaled against the largest bucket; any nonzero count gets at least one
/// filled cell so rare guess counts stay visible.
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        (count * width / max_count).max(usize::from(count > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_bar_empty() {
        assert_eq!(distribution_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn distribution_bar_full() {
        assert_eq!(distribution_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn distribution_bar_half() {
        assert_eq!(distribution_bar(5, 10, 10), "█████░░░░░");
    }

    #[test]
    fn distribution_bar_small_count_still_visible() {
        // 1 of 100 rounds to scale, still one filled cell
        assert_eq!(distribution_bar(1, 100, 10), "█░░░░░░░░░");
    }

    #[test]
    fn distribution_bar_all_zero_counts() {
        assert_eq!(distribution_bar(0, 0, 5), "░░░░░");
    }
}
