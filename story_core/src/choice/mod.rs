//! Choice resolution - which options an event actually offers.

use game_content::{Choice, PlayerState};

use crate::condition;

/// Filter an event's choices down to those open to the player.
///
/// Relative order is preserved; a choice without conditions is always open.
pub fn available_choices<'a>(choices: &'a [Choice], state: &PlayerState) -> Vec<&'a Choice> {
    choices
        .iter()
        .filter(|choice| condition::evaluate(state, choice.conditions.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::{Condition, Outcome};
    use std::collections::HashMap;

    fn state(points: &[(&str, i32)]) -> PlayerState {
        PlayerState {
            points: points
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            attributes: Vec::new(),
            character_id: "test".to_string(),
        }
    }

    fn choice(text: &str, conditions: Option<Condition>) -> Choice {
        Choice {
            text: text.to_string(),
            conditions,
            outcome: Outcome::default(),
        }
    }

    fn gated(text: &str, key: &str, threshold: i32) -> Choice {
        choice(
            text,
            Some(Condition {
                points: HashMap::from([(key.to_string(), threshold)]),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn test_unconditioned_choices_always_open() {
        let choices = vec![choice("a", None), choice("b", None)];
        let open = available_choices(&choices, &state(&[]));
        assert_eq!(open.len(), 2);
    }

    #[test]
    fn test_filters_unmet_choices_preserving_order() {
        let choices = vec![
            gated("hard", "coding", 10),
            choice("easy", None),
            gated("medium", "coding", 3),
        ];

        let open: Vec<_> = available_choices(&choices, &state(&[("coding", 5)]))
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(open, vec!["easy", "medium"]);
    }

    #[test]
    fn test_all_choices_can_be_closed() {
        let choices = vec![gated("a", "coding", 10), gated("b", "coding", 20)];
        assert!(available_choices(&choices, &state(&[])).is_empty());
    }

    #[test]
    fn test_empty_choice_list() {
        assert!(available_choices(&[], &state(&[])).is_empty());
    }
}
