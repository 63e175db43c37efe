use crate::transform::Step;
use std::cmp::Ordering;

/// Every step whose probability reaches `threshold` (inclusive), in input order.
///
/// Intended for sigmoid results, where each class is judged on its own.
#[must_use]
pub fn select_above<S: Step>(steps: &[S], threshold: f64) -> Vec<&S> {
    steps
        .iter()
        .filter(|s| s.probability() >= threshold)
        .collect()
}

/// The most probable step. Ties go to the earliest; `NaN` never wins.
#[must_use]
pub fn argmax<S: Step>(steps: &[S]) -> Option<&S> {
    steps
        .iter()
        .filter(|s| !s.probability().is_nan())
        .fold(None, |best: Option<&S>, s| match best {
            Some(b) if b.probability() >= s.probability() => Some(b),
            _ => Some(s),
        })
}

/// Steps sorted by descending probability; equal probabilities keep input order.
#[must_use]
pub fn ranked<S: Step>(steps: &[S]) -> Vec<&S> {
    let mut results: Vec<&S> = steps.iter().collect();
    results.sort_by(|a, b| {
        b.probability()
            .partial_cmp(&a.probability())
            .unwrap_or(Ordering::Equal)
    });
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{default_entries, Entry};
    use crate::transform::{sigmoid_steps, softmax_steps};

    #[test]
    fn threshold_is_inclusive() {
        let entries = vec![
            Entry::new("a", "A", 0.0, "#000"),
            Entry::new("b", "B", -1.0, "#000"),
        ];
        let steps = sigmoid_steps(&entries, 1.0);
        let selected = select_above(&steps, 0.5);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "A");
    }

    #[test]
    fn argmax_prefers_first_on_tie() {
        let entries = vec![
            Entry::new("a", "A", 2.0, "#000"),
            Entry::new("b", "B", 2.0, "#000"),
            Entry::new("c", "C", 1.0, "#000"),
        ];
        let steps = softmax_steps(&entries, 1.0);
        assert_eq!(argmax(&steps).map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn argmax_skips_nan() {
        let entries = vec![
            Entry::new("a", "A", 800.0, "#000"),
            Entry::new("b", "B", 900.0, "#000"),
        ];
        let steps = softmax_steps(&entries, 1.0);
        assert!(argmax(&steps).is_none());
    }

    #[test]
    fn ranking_orders_by_probability() {
        let mut entries = default_entries();
        entries.reverse();
        let steps = sigmoid_steps(&entries, 1.0);
        let labels: Vec<_> = ranked(&steps).iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Cat", "Dog", "Car"]);
    }
}
