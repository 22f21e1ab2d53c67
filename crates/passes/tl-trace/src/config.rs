//! Tracer configuration

use serde::{Deserialize, Serialize};

/// Knobs for root handling and error wording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Roots with no type of their own; members are traced against every type
    pub pseudo_roots: Vec<String>,

    /// Part index member tracing resumes at after a pseudo-root
    pub pseudo_root_skip: usize,

    /// Free-floating roots always accepted as the generic element type
    pub perpetual_roots: Vec<String>,

    /// Tag base assumed when the first part has no text (`<[name]>`)
    pub empty_root_alias: String,

    /// Largest number of types named in an unresolved-part error
    pub max_listed_types: usize,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            pseudo_roots: vec!["context".to_string(), "entry".to_string()],
            pseudo_root_skip: 2,
            perpetual_roots: ["permission", "text", "name", "amount"]
                .into_iter()
                .map(String::from)
                .collect(),
            empty_root_alias: "definition".to_string(),
            max_listed_types: 4,
        }
    }
}

impl TraceConfig {
    /// Whether `root` (lowercased) is a pseudo-root
    pub fn is_pseudo_root(&self, root: &str) -> bool {
        self.pseudo_roots.iter().any(|pseudo| pseudo == root)
    }

    /// Whether `root` (lowercased) is perpetually valid
    pub fn is_perpetual_root(&self, root: &str) -> bool {
        self.perpetual_roots.iter().any(|perpetual| perpetual == root)
    }
}
