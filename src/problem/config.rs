//! Flowshop evaluation configuration.

use serde::{Deserialize, Serialize};

/// Score assigned to candidates that are not permutations.
pub const DEFAULT_PENALTY: f64 = 1e9;

/// Configuration for [`super::FlowshopProblem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowshopConfig {
    /// Score returned for invalid candidates (default: 1e9).
    ///
    /// Fixed rather than derived from the instance; an instance whose
    /// makespans can reach this value is flagged when the problem is built.
    pub penalty: f64,
}

impl Default for FlowshopConfig {
    fn default() -> Self {
        Self {
            penalty: DEFAULT_PENALTY,
        }
    }
}

impl FlowshopConfig {
    /// Sets the penalty score.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_penalty() {
        assert_eq!(FlowshopConfig::default().penalty, 1e9);
    }

    #[test]
    fn test_with_penalty() {
        let config = FlowshopConfig::default().with_penalty(5e12);
        assert_eq!(config.penalty, 5e12);
    }

    #[test]
    fn test_deserialize_missing_fields_uses_default() {
        let config: FlowshopConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, FlowshopConfig::default());

        let config: FlowshopConfig = serde_json::from_str(r#"{"penalty": 42.0}"#).unwrap();
        assert_eq!(config.penalty, 42.0);
    }
}
