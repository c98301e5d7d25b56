//! Configuration management for HX.
//!
//! Parses `hx.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Path Expansion
//!
//! `views.template_dir` supports `~` and environment variable expansion
//! (`$VAR`, `${VAR}`) and is resolved relative to the config file's
//! directory when not absolute.
//!
//! ## Example
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7878
//!
//! [views]
//! template_dir = "templates"
//! extension = "html"
//!
//! [bootstrap]
//! view = "home/index.html"
//! default_path = "/"
//!
//! [htmx]
//! version = "2.0.4"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hx.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override template directory.
    pub template_dir: Option<PathBuf>,
    /// Override htmx version.
    pub htmx_version: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid TOML.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the file that failed.
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Path expansion failed (e.g. unset environment variable).
    #[error("Failed to expand '{value}': {reason}")]
    Expand {
        /// The raw configured value.
        value: String,
        /// Why expansion failed.
        reason: String,
    },
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// View configuration (paths are relative strings from TOML).
    views: ViewsConfigRaw,
    /// Bootstrap page configuration.
    pub bootstrap: BootstrapConfig,
    /// htmx client configuration.
    pub htmx: HtmxConfig,

    /// Resolved view configuration (set after loading).
    #[serde(skip)]
    pub views_resolved: ViewsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Raw view configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ViewsConfigRaw {
    template_dir: Option<String>,
    extension: Option<String>,
}

/// Resolved view configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ViewsConfig {
    /// Template directory.
    pub template_dir: PathBuf,
    /// Template file extension.
    pub extension: String,
}

/// Bootstrap page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// View rendered for direct navigations (explicit template path).
    pub view: String,
    /// Path re-issued by the bootstrap page when no request context exists.
    pub default_path: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            view: "home/index.html".to_owned(),
            default_path: "/".to_owned(),
        }
    }
}

/// htmx client configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HtmxConfig {
    /// htmx version for the `htmx_script` template global.
    pub version: String,
}

impl Default for HtmxConfig {
    fn default() -> Self {
        Self {
            version: "latest".to_owned(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// Reads `path` when given, otherwise discovers `hx.toml` upward from
    /// the current directory, otherwise falls back to defaults. CLI
    /// settings are applied after resolution.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicitly given file cannot be read,
    /// any file fails to parse, or path expansion fails.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let discovered = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::discover(),
        };

        let mut config = match discovered {
            Some(file) => {
                let base = file
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."))
                    .to_path_buf();
                let mut config = Self::read_file(&file)?;
                config.config_path = Some(file);
                config.resolve(&base)?;
                config
            }
            None => {
                let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Self::default_with_base(&base)
            }
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }

        Ok(config)
    }

    /// Build a default config resolved against `base`.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            views: ViewsConfigRaw::default(),
            bootstrap: BootstrapConfig::default(),
            htmx: HtmxConfig::default(),
            views_resolved: ViewsConfig {
                template_dir: base.join("templates"),
                extension: "html".to_owned(),
            },
            config_path: None,
        }
    }

    /// Read and parse a config file.
    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Discover `hx.toml` upward from the current directory.
    fn discover() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Resolve raw values into `views_resolved`.
    fn resolve(&mut self, base: &Path) -> Result<(), ConfigError> {
        let raw = self
            .views
            .template_dir
            .clone()
            .unwrap_or_else(|| "templates".to_owned());
        let expanded = shellexpand::full(&raw).map_err(|e| ConfigError::Expand {
            value: raw.clone(),
            reason: e.to_string(),
        })?;

        let dir = PathBuf::from(expanded.as_ref());
        let template_dir = if dir.is_absolute() { dir } else { base.join(dir) };

        self.views_resolved = ViewsConfig {
            template_dir,
            extension: self
                .views
                .extension
                .clone()
                .unwrap_or_else(|| "html".to_owned()),
        };
        Ok(())
    }

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(ref host) = cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(ref template_dir) = cli.template_dir {
            self.views_resolved.template_dir = template_dir.clone();
        }
        if let Some(ref version) = cli.htmx_version {
            self.htmx.version = version.clone();
        }
    }
}
