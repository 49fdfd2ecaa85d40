//! Outcomes - the state changes a choice applies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The result of picking a choice: narration plus state deltas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// Narration shown to the player. Never interpreted by the engine.
    pub text: String,

    /// Signed point deltas keyed by point name.
    #[serde(default)]
    pub points_change: HashMap<String, i32>,

    /// Attribute tags gained. Adding an already-held tag is a no-op.
    #[serde(default)]
    pub attributes_add: Vec<String>,

    /// Attribute tags lost. Removing an absent tag is a no-op.
    #[serde(default)]
    pub attributes_remove: Vec<String>,
}

impl Outcome {
    /// Human-readable summary of the deltas, one entry per change
    /// (e.g. `"coding +5"`, `"gains [mentor]"`, `"loses [naive]"`).
    ///
    /// Point entries come out sorted by key so the summary is stable.
    /// For shells to display; the engine never reads these strings.
    pub fn impact_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let mut keys: Vec<&str> = self.points_change.keys().map(String::as_str).collect();
        keys.sort_unstable();
        for key in keys {
            let delta = self.points_change[key];
            if delta > 0 {
                lines.push(format!("{} +{}", key, delta));
            } else if delta < 0 {
                lines.push(format!("{} {}", key, delta));
            }
        }

        for tag in &self.attributes_add {
            lines.push(format!("gains [{}]", tag));
        }

        for tag in &self.attributes_remove {
            lines.push(format!("loses [{}]", tag));
        }

        lines
    }
}
