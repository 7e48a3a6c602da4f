//! Read-only template lookup: name → text.
//!
//! Built-in templates are embedded at compile time. An optional override
//! directory is checked first, so a task can carry site-specific templates
//! without rebuilding.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};

const BUILTIN: [(&str, &str); 3] = [
    ("files.temp", include_str!("../templates/files.temp")),
    ("collapse.temp", include_str!("../templates/collapse.temp")),
    ("inventory.temp", include_str!("../templates/inventory.temp")),
];

#[derive(Debug, Default)]
pub struct TemplateStore {
    override_dir: Option<PathBuf>,
}

impl TemplateStore {
    /// Built-in templates only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Check `dir` for a file named like the template before falling back to
    /// the built-ins.
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Load a template by name (e.g. `"files.temp"`).
    pub fn load(&self, name: &str) -> Result<String> {
        if let Some(dir) = &self.override_dir {
            let path = dir.join(name);
            if path.is_file() {
                tracing::debug!("loading template override: {}", path.display());
                return Ok(fs::read_to_string(&path)?);
            }
        }

        BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }
}
