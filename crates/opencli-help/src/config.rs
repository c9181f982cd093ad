//! Help engine configuration.
//!
//! Three layers, later ones winning: built-in defaults, an optional
//! `help.toml`, then command-line flags / environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{HelpError, Result};
use crate::store::ResourceStore;

pub const DEFAULT_TOOL_NAME: &str = "opencli";

/// Where opencli scripts and the manifest are installed.
pub const DEFAULT_INSTALL_ROOT: &str = "/usr/local/opencli";

/// Manifest filename, relative to the install root.
pub const MANIFEST_FILENAME: &str = "aliases.txt";

pub const DEFAULT_SCRIPT_EXTENSION: &str = "sh";

pub const DEFAULT_DOCS_URL: &str = "https://dev.openpanel.com/cli/";

/// Config filename, relative to the install root.
pub const CONFIG_FILENAME: &str = "help.toml";

/// Commented template matching [`HelpConfig::default`].
pub const DEFAULT_CONFIG_TOML: &str = "\
# opencli help configuration

# tool_name = \"opencli\"
# install_root = \"/usr/local/opencli\"
# manifest = \"/usr/local/opencli/aliases.txt\"
# script_extension = \"sh\"
# docs_url = \"https://dev.openpanel.com/cli/\"
";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HelpConfig {
    /// Name the tool is invoked as; prefixes manifest lines and pointers.
    pub tool_name: String,
    pub install_root: PathBuf,
    /// Manifest location. Defaults to `<install_root>/aliases.txt`.
    pub manifest: Option<PathBuf>,
    pub script_extension: String,
    pub docs_url: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            install_root: PathBuf::from(DEFAULT_INSTALL_ROOT),
            manifest: None,
            script_extension: DEFAULT_SCRIPT_EXTENSION.to_string(),
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub install_root: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl HelpConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Parse the config file at `path`.
    pub fn load(store: &dyn ResourceStore, path: &Path) -> Result<Self> {
        let text = store
            .read_to_string(path)
            .map_err(|source| HelpError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml_str(&text).map_err(|source| HelpError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if present, falling back to defaults.
    ///
    /// A missing file is normal and only noted at debug level when it was
    /// not asked for explicitly. An unreadable or invalid file is logged
    /// and ignored: help must still be shown.
    pub fn load_or_default(store: &dyn ResourceStore, path: &Path, explicit: bool) -> Self {
        if !store.exists(path) {
            if explicit {
                tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            } else {
                tracing::debug!(path = %path.display(), "No config file");
            }
            return Self::default();
        }

        match Self::load(store, path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring config file");
                Self::default()
            }
        }
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(root) = overrides.install_root {
            self.install_root = root;
        }
        if let Some(manifest) = overrides.manifest {
            self.manifest = Some(manifest);
        }
        self
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| self.install_root.join(MANIFEST_FILENAME))
    }

    /// Script for `group-action` lives at `<root>/<group>/<action>.<ext>`.
    /// Only the first `-` separates; the action keeps any further dashes.
    pub fn script_path(&self, command: &str) -> PathBuf {
        let file = |stem: &str| format!("{stem}.{}", self.script_extension);
        match command.split_once('-') {
            Some((group, action)) => self.install_root.join(group).join(file(action)),
            None => self.install_root.join(file(command)),
        }
    }
}
