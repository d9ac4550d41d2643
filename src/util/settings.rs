//! Output settings for JSON rendering.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use super::{Error, Result};

/// Environment variable overriding [`Settings::indent`].
pub const INDENT_ENV: &str = "CZML_INDENT";

/// Environment variable overriding [`Settings::delete_policy`].
pub const DELETE_POLICY_ENV: &str = "CZML_DELETE_POLICY";

/// Widest indentation `dumps` will write. Wider settings are clamped.
pub const MAX_INDENT: usize = 32;

/// How a composite whose `delete` flag is true is rendered.
///
/// Consumers ignore every other field of a deleted property, so both
/// policies describe the same document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// Emit `delete` first, followed by every other present field.
    #[default]
    EmitAll,
    /// Emit only `{"delete": true}`.
    DeleteOnly,
}

impl DeletePolicy {
    /// Token used in settings files and environment variables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmitAll => "emit_all",
            Self::DeleteOnly => "delete_only",
        }
    }
}

impl FromStr for DeletePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emit_all" => Ok(Self::EmitAll),
            "delete_only" => Ok(Self::DeleteOnly),
            _ => Err(Error::invalid_token("delete policy", s)),
        }
    }
}

/// Settings threaded through every `to_json_with` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spaces per indentation level for `dumps`; 0 writes compact output.
    /// Values above [`MAX_INDENT`] are clamped when encoding.
    pub indent: usize,

    pub delete_policy: DeletePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: 4,
            delete_policy: DeletePolicy::EmitAll,
        }
    }
}

impl Settings {
    /// Compact single-line output, default delete policy.
    pub fn compact() -> Self {
        Self {
            indent: 0,
            ..Self::default()
        }
    }

    /// Parse settings from a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::SettingsNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Defaults overridden by `CZML_INDENT` / `CZML_DELETE_POLICY`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Ok(value) = std::env::var(INDENT_ENV) {
            match value.trim().parse::<usize>() {
                Ok(indent) if indent <= MAX_INDENT => settings.indent = indent,
                _ => tracing::warn!(%value, max = MAX_INDENT, "ignoring invalid {}", INDENT_ENV),
            }
        }

        if let Ok(value) = std::env::var(DELETE_POLICY_ENV) {
            match value.parse::<DeletePolicy>() {
                Ok(policy) => settings.delete_policy = policy,
                Err(_) => tracing::warn!(%value, "ignoring invalid {}", DELETE_POLICY_ENV),
            }
        }

        settings
    }
}
