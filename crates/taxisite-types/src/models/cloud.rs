//! Remote backend connection settings, entered once by the operator.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CloudSettings {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    #[serde(default)]
    pub url: String,
    /// Anon API key, sent as both `apikey` and bearer token
    #[serde(default)]
    pub key: String,
}

impl CloudSettings {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self { url: url.into(), key: key.into() }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.key.trim().is_empty()
    }

    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Copy safe to show in UIs and logs.
    pub fn masked(&self) -> Self {
        Self { url: self.url.clone(), key: mask_key(&self.key) }
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
