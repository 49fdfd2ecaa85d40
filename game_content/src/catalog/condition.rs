//! Conditions - predicates over the player state that gate events and choices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single requirement on the player's attribute tags.
///
/// In authored content a rule is a plain string: `"brave"` means the tag
/// must be held, `"!brave"` means it must not be.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeRule {
    /// The player must hold the tag.
    Has(String),
    /// The player must not hold the tag.
    Lacks(String),
}

impl AttributeRule {
    /// Parse the authored string form (`"tag"` or `"!tag"`).
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('!') {
            Some(tag) => AttributeRule::Lacks(tag.to_string()),
            None => AttributeRule::Has(raw.to_string()),
        }
    }

    /// The tag this rule is about, without the negation marker.
    pub fn tag(&self) -> &str {
        match self {
            AttributeRule::Has(tag) | AttributeRule::Lacks(tag) => tag,
        }
    }
}

/// A condition gating an event or a choice.
///
/// Every field is optional in authored content and an empty field places no
/// constraint on that axis. A missing condition block altogether means
/// "always true" and is modelled as `Option<Condition>` at the use sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Condition {
    /// Minimum point totals, one `>=` threshold per point key.
    #[serde(default)]
    pub points: HashMap<String, i32>,

    /// Attribute requirements in authored string form (`"tag"` / `"!tag"`).
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Selection priority of the event carrying this condition.
    #[serde(default)]
    pub priority: i32,
}

impl Condition {
    /// Iterate the attribute requirements in typed form.
    pub fn attribute_rules(&self) -> impl Iterator<Item = AttributeRule> + '_ {
        self.attributes.iter().map(|raw| AttributeRule::parse(raw))
    }

    /// True when the condition constrains nothing.
    pub fn is_unconstrained(&self) -> bool {
        self.points.is_empty() && self.attributes.is_empty()
    }
}
