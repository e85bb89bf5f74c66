//! Scoring module - points per lock and level progression
//!
//! One point per cleared row, no multipliers. The level is derived from the
//! score alone: `level = score / 2 + 1`.

/// Points awarded for clearing `lines` rows in one lock
pub fn line_clear_points(lines: usize) -> u32 {
    lines as u32
}

/// Level for a given score (always at least 1)
pub fn level_for_score(score: u32) -> u32 {
    score / 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(1), 1);
        assert_eq!(level_for_score(2), 2);
        assert_eq!(level_for_score(3), 2);
        assert_eq!(level_for_score(10), 6);
    }

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 1);
        assert_eq!(line_clear_points(4), 4);
    }
}
