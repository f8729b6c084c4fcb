//! Status sentences derived from current and predicted availability.
//!
//! Pure functions; everything here is exercised per render and covered
//! by the tests below.

/// "1 space" / "N spaces".
pub fn current_spaces_text(spaces_available: u32) -> String {
    let noun = if spaces_available == 1 { "space" } else { "spaces" };
    format!("{} {}", spaces_available, noun)
}

/// Sentence estimating when the facility fills, from the first predicted
/// zero. `step_minutes` is the interval between prediction points, so a
/// zero at index `i` means full within `(i + 1) * step_minutes` minutes.
pub fn full_at_text(predictions: &[u32], step_minutes: u32) -> String {
    match predictions.iter().position(|&p| p == 0) {
        Some(i) => format!(
            "All spaces are predicted to be taken within the next {} minutes.",
            (i as u32 + 1) * step_minutes
        ),
        None => "Spaces are not expected to run out within the next hour.".to_string(),
    }
}

/// Short qualitative status for the compact page.
///
/// The checks form a priority table; the first matching row wins. The
/// row order is kept exactly as deployed, not re-derived: the rising
/// check deliberately outranks the plain count thresholds.
pub fn graded_status(spaces_available: u32, predictions: &[u32]) -> &'static str {
    if spaces_available == 0 && predictions.iter().any(|&p| p > 0) {
        "Freeing up soon"
    } else if spaces_available < 30 && predictions.last().is_some_and(|&p| p > spaces_available) {
        "More freeing up"
    } else if spaces_available == 0 {
        "Completely full"
    } else if spaces_available == 1 {
        "Literally one left"
    } else if spaces_available < 5 {
        "Hurry up"
    } else if spaces_available < 10 {
        "Going fast"
    } else if spaces_available < 15 {
        "Decent odds"
    } else {
        "Plenty of space"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralization() {
        assert_eq!(current_spaces_text(0), "0 spaces");
        assert_eq!(current_spaces_text(1), "1 space");
        assert_eq!(current_spaces_text(2), "2 spaces");
    }

    #[test]
    fn test_full_at_cites_first_zero() {
        // Zero at index 3, 10-minute steps: (3 + 1) * 10 = 40 minutes
        assert_eq!(
            full_at_text(&[5, 3, 1, 0, 2], 10),
            "All spaces are predicted to be taken within the next 40 minutes."
        );
    }

    #[test]
    fn test_full_at_without_zero() {
        assert_eq!(
            full_at_text(&[5, 4, 3, 2, 1], 10),
            "Spaces are not expected to run out within the next hour."
        );
    }

    #[test]
    fn test_freeing_up_soon_outranks_everything() {
        // Full right now but a later prediction frees up
        assert_eq!(graded_status(0, &[0, 0, 3, 5, 8, 10]), "Freeing up soon");
    }

    #[test]
    fn test_rising_outranks_plain_thresholds() {
        // 3 would match "Hurry up", but the series ends higher
        assert_eq!(graded_status(3, &[2, 2, 4, 4, 5, 6]), "More freeing up");
    }

    #[test]
    fn test_full_with_no_relief() {
        assert_eq!(graded_status(0, &[0, 0, 0, 0, 0, 0]), "Completely full");
    }

    #[test]
    fn test_one_left_is_not_hurry_up() {
        assert_eq!(graded_status(1, &[1, 0, 0, 0, 0, 0]), "Literally one left");
    }

    #[test]
    fn test_count_thresholds() {
        assert_eq!(graded_status(4, &[4, 3, 2, 1, 0, 0]), "Hurry up");
        assert_eq!(graded_status(9, &[9, 8, 7, 6, 5, 4]), "Going fast");
        assert_eq!(graded_status(14, &[14, 12, 10, 9, 8, 7]), "Decent odds");
        assert_eq!(graded_status(80, &[80, 78, 75, 70, 66, 60]), "Plenty of space");
    }

    #[test]
    fn test_plenty_even_when_rising() {
        // The rising check only applies below 30 spaces
        assert_eq!(graded_status(60, &[60, 62, 64, 66, 68, 70]), "Plenty of space");
    }
}
