//! Configuration file parsing and settings resolution

use crate::Cli;
use pocogen_core::{EmitOptions, GenError, GenResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pocogen.toml";

/// pocogen.toml structure
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub connection_string: Option<String>,

    #[serde(default)]
    pub schema: Option<String>,

    #[serde(default)]
    pub retain_underscores: Option<bool>,

    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub usings: Option<bool>,
}

impl ConfigFile {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GenError::Config(format!("failed to read {}: {e}", path.display())))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> GenResult<Self> {
        toml::from_str(content).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Load the config for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and an empty config is used otherwise.
    pub fn load(explicit: Option<&Path>) -> GenResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Fully resolved settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub table: String,
    pub connection_string: String,
    pub schema: Option<String>,
    pub retain_underscores: bool,
    pub emit: EmitOptions,
}

impl Settings {
    /// Layer command-line arguments over the config file.
    ///
    /// Boolean options can be switched either way on the command line
    /// (`--usings` / `--no-usings`), overriding the config file.
    ///
    /// Fails with [`GenError::MissingRequiredOption`] when no connection
    /// string is available from any source.
    pub fn resolve(cli: &Cli, file: ConfigFile) -> GenResult<Self> {
        let connection_string = cli
            .connstr
            .clone()
            .or(file.connection_string)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| GenError::MissingRequiredOption("-c/--connstr".to_string()))?;

        let schema = cli.schema.clone().or(file.schema);

        Ok(Self {
            table: cli.table.clone(),
            connection_string,
            retain_underscores: flag(cli.retain_underscores, cli.no_retain_underscores)
                .or(file.retain_underscores)
                .unwrap_or(false),
            emit: EmitOptions {
                class_name: cli.class_name.clone(),
                namespace: cli.namespace.clone().or(file.namespace),
                usings: flag(cli.usings, cli.no_usings)
                    .or(file.usings)
                    .unwrap_or(false),
                schema: schema.clone(),
            },
            schema,
        })
    }
}

/// Value of an `--x` / `--no-x` flag pair, `None` when neither was given.
fn flag(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
