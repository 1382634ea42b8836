//! `sysmgr-codegen.toml` handling.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CodegenError, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "sysmgr-codegen.toml";

/// Where the service description lives and where sources go.
///
/// ```toml
/// model = "schema/ssm.json"
/// output = "src"
/// format = true
/// ```
///
/// Relative paths are resolved against the directory holding the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub model: PathBuf,
    pub output: PathBuf,
    /// Run `rustfmt` over generated files.
    pub format: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from("schema/service.json"),
            output: PathBuf::from("src"),
            format: true,
        }
    }
}

impl CodegenConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads `path` and anchors relative paths at its parent directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| CodegenError::io(path, err))?;
        let config = Self::from_toml(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        debug!(config = %path.display(), "loaded codegen configuration");
        Ok(config.relative_to(base))
    }

    /// Rebases relative `model` and `output` onto `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if self.model.is_relative() {
            self.model = base.join(&self.model);
        }
        if self.output.is_relative() {
            self.output = base.join(&self.output);
        }
        self
    }
}
