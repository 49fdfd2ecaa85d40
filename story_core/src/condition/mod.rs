//! Condition evaluation - pure predicates over the player state.

use game_content::{AttributeRule, Condition, PlayerState};

/// Evaluate a condition against the player state.
///
/// A missing condition is always satisfied. The points clause and the
/// attributes clause must both hold, and within each clause every entry must
/// hold. Deterministic, no side effects.
pub fn evaluate(state: &PlayerState, condition: Option<&Condition>) -> bool {
    let Some(condition) = condition else {
        return true;
    };

    points_satisfied(state, condition) && attributes_satisfied(state, condition)
}

fn points_satisfied(state: &PlayerState, condition: &Condition) -> bool {
    condition
        .points
        .iter()
        .all(|(key, threshold)| state.point(key) >= *threshold)
}

fn attributes_satisfied(state: &PlayerState, condition: &Condition) -> bool {
    condition.attribute_rules().all(|rule| match rule {
        AttributeRule::Has(tag) => state.has_attribute(&tag),
        AttributeRule::Lacks(tag) => !state.has_attribute(&tag),
    })
}

/// Explain why a condition fails, listing every unmet requirement.
///
/// Returns an empty string when the condition holds. Reasons are joined with
/// `"; "`, e.g. `"needs coding >= 10, has 5; must not have [burned_out]"`.
/// Point reasons come out sorted by key so the text is stable.
pub fn explain_failure(state: &PlayerState, condition: Option<&Condition>) -> String {
    let Some(condition) = condition else {
        return String::new();
    };

    let mut reasons = Vec::new();

    let mut keys: Vec<&str> = condition.points.keys().map(String::as_str).collect();
    keys.sort_unstable();
    for key in keys {
        let threshold = condition.points[key];
        let current = state.point(key);
        if current < threshold {
            reasons.push(format!("needs {} >= {}, has {}", key, threshold, current));
        }
    }

    for rule in condition.attribute_rules() {
        match rule {
            AttributeRule::Has(tag) => {
                if !state.has_attribute(&tag) {
                    reasons.push(format!("needs [{}]", tag));
                }
            }
            AttributeRule::Lacks(tag) => {
                if state.has_attribute(&tag) {
                    reasons.push(format!("must not have [{}]", tag));
                }
            }
        }
    }

    reasons.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn state(points: &[(&str, i32)], attributes: &[&str]) -> PlayerState {
        PlayerState {
            points: points
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            character_id: "test".to_string(),
        }
    }

    fn points_condition(entries: &[(&str, i32)]) -> Condition {
        Condition {
            points: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        }
    }

    fn attributes_condition(entries: &[&str]) -> Condition {
        Condition {
            attributes: entries.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_condition_is_satisfied() {
        let state = state(&[], &[]);
        assert!(evaluate(&state, None));
    }

    #[test]
    fn test_empty_condition_is_satisfied() {
        let state = state(&[], &[]);
        assert!(evaluate(&state, Some(&Condition::default())));
    }

    #[test]
    fn test_points_threshold() {
        let state = state(&[("coding", 5)], &[]);

        assert!(evaluate(&state, Some(&points_condition(&[("coding", 5)]))));
        assert!(evaluate(&state, Some(&points_condition(&[("coding", 3)]))));
        assert!(!evaluate(&state, Some(&points_condition(&[("coding", 10)]))));
    }

    #[test]
    fn test_points_missing_key_counts_as_zero() {
        let state = state(&[], &[]);
        assert!(!evaluate(&state, Some(&points_condition(&[("coding", 1)]))));
        assert!(evaluate(&state, Some(&points_condition(&[("coding", 0)]))));
    }

    #[test]
    fn test_points_all_entries_must_pass() {
        let state = state(&[("coding", 10), ("energy", 2)], &[]);
        let condition = points_condition(&[("coding", 5), ("energy", 5)]);
        assert!(!evaluate(&state, Some(&condition)));
    }

    #[test]
    fn test_attribute_presence_and_absence() {
        let state = state(&[], &["mentor"]);

        assert!(evaluate(&state, Some(&attributes_condition(&["mentor"]))));
        assert!(!evaluate(&state, Some(&attributes_condition(&["rich"]))));
        assert!(!evaluate(&state, Some(&attributes_condition(&["!mentor"]))));
        assert!(evaluate(&state, Some(&attributes_condition(&["!rich"]))));
    }

    #[test]
    fn test_both_clauses_must_hold() {
        let state = state(&[("coding", 10)], &["mentor"]);

        let mut condition = points_condition(&[("coding", 5)]);
        condition.attributes = vec!["!mentor".to_string()];

        assert!(!evaluate(&state, Some(&condition)));
    }

    #[test]
    fn test_explain_failure_mentions_values() {
        let state = state(&[("coding", 5)], &[]);
        let reason = explain_failure(&state, Some(&points_condition(&[("coding", 10)])));

        assert!(reason.contains("coding"));
        assert!(reason.contains('5'));
        assert!(reason.contains("10"));
    }

    #[test]
    fn test_explain_failure_lists_every_reason() {
        let state = state(&[("coding", 1)], &["burned_out"]);

        let condition = Condition {
            points: HashMap::from([("coding".to_string(), 10)]),
            attributes: vec!["mentor".to_string(), "!burned_out".to_string()],
            priority: 0,
        };

        let reason = explain_failure(&state, Some(&condition));
        assert_eq!(
            reason,
            "needs coding >= 10, has 1; needs [mentor]; must not have [burned_out]"
        );
    }

    #[test]
    fn test_explain_failure_empty_when_satisfied() {
        let state = state(&[("coding", 10)], &["mentor"]);

        let mut condition = points_condition(&[("coding", 5)]);
        condition.attributes = vec!["mentor".to_string()];

        assert_eq!(explain_failure(&state, Some(&condition)), "");
        assert_eq!(explain_failure(&state, None), "");
    }
}
