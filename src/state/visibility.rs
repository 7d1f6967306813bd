use crate::config::PANEL_VISIBILITY_THRESHOLD;

/// Whether the button panel should exist for a given intersection ratio.
pub fn panel_visible(ratio: f64) -> bool {
    ratio > PANEL_VISIBILITY_THRESHOLD
}

/// Ratios the observer reports at. A callback landing exactly on the
/// threshold hides the panel, so a second step just above it makes sure a
/// later callback fires as the widget keeps scrolling in.
pub fn observer_thresholds() -> [f64; 2] {
    [PANEL_VISIBILITY_THRESHOLD, PANEL_VISIBILITY_THRESHOLD + 0.01]
}

/// Ratio reported by the newest observer entry. A batch can hold several
/// entries for the same target; only the last reflects the current layout.
pub fn latest_ratio(ratios: impl IntoIterator<Item = f64>) -> Option<f64> {
    ratios.into_iter().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_above_half() {
        assert!(!panel_visible(0.0));
        assert!(!panel_visible(0.5));
        assert!(panel_visible(0.5001));
        assert!(panel_visible(1.0));
    }

    #[test]
    fn toggles_across_threshold() {
        let seen: Vec<bool> = [0.2, 0.75, 0.49, 0.51, 0.5]
            .into_iter()
            .map(panel_visible)
            .collect();
        assert_eq!(seen, vec![false, true, false, true, false]);
    }

    #[test]
    fn a_step_above_the_threshold_shows_the_panel() {
        let [at, above] = observer_thresholds();
        assert!(!panel_visible(at));
        assert!(panel_visible(above));
    }

    #[test]
    fn last_entry_wins() {
        assert_eq!(latest_ratio([0.9, 0.1]), Some(0.1));
        assert_eq!(latest_ratio(Vec::new()), None);
    }
}
