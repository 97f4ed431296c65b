use serde_json::{Map, Value};

use super::SiteConfig;
use crate::error::ConfigError;

/// Result of merging a partial document: the merged configuration plus the
/// top-level keys that were dropped because their value did not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub config: SiteConfig,
    pub skipped: Vec<String>,
}

impl SiteConfig {
    /// Merge a partial document over `self` and return the result.
    ///
    /// Keys are applied one at a time; a key whose value no longer
    /// deserializes (e.g. `vehicles` is a string) is skipped and listed in
    /// [`MergeOutcome::skipped`]. Only a non-object partial is rejected.
    pub fn merge_partial(&self, partial: &Value) -> Result<MergeOutcome, ConfigError> {
        let overlay = partial
            .as_object()
            .ok_or_else(|| ConfigError::NotAnObject { found: json_kind(partial).to_string() })?;

        let mut base = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => return Err(ConfigError::NotAnObject { found: json_kind(&other).to_string() }),
            Err(e) => return Err(ConfigError::from_json_error(&e)),
        };

        let mut config = self.clone();
        let mut skipped = Vec::new();
        for (key, value) in overlay {
            let mut candidate = base.clone();
            merge_key(&mut candidate, key, value);
            match serde_json::from_value::<SiteConfig>(Value::Object(candidate.clone())) {
                Ok(merged) => {
                    base = candidate;
                    config = merged;
                }
                Err(_) => skipped.push(key.clone()),
            }
        }

        Ok(MergeOutcome { config, skipped })
    }

    /// [`merge_partial`](Self::merge_partial) without the skipped-key list.
    pub fn merged_with(&self, partial: &Value) -> Result<Self, ConfigError> {
        self.merge_partial(partial).map(|outcome| outcome.config)
    }

    /// Parse a stored document and merge it over the built-in defaults.
    pub fn from_partial_json(raw: &str) -> Result<MergeOutcome, ConfigError> {
        let partial: Value =
            serde_json::from_str(raw).map_err(|e| ConfigError::from_json_error(&e))?;
        Self::default().merge_partial(&partial)
    }
}

fn merge_key(base: &mut Map<String, Value>, key: &str, value: &Value) {
    match (base.get_mut(key), value) {
        (Some(Value::Object(existing)), Value::Object(incoming)) => {
            for (inner_key, inner_value) in incoming {
                existing.insert(inner_key.clone(), inner_value.clone());
            }
        }
        _ => {
            base.insert(key.to_string(), value.clone());
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
