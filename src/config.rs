use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Command;
use serde_json::{Map, Value};

use crate::{info, warn};

/// Name of the optional configuration file, looked up in the working
/// directory.
pub const CONFIG_FILENAME: &str = "create-component.json";

/// Default argument values loaded from the local configuration file.
///
/// The file is a flat JSON object mapping option names to scalar defaults.
/// Keys may be spelled with dashes or underscores; they are normalized to
/// the underscore form the argument ids use.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    defaults: Vec<(String, String)>,
}

impl Config {
    /// Loads the configuration file from `dir` if it exists, announcing
    /// either way. An absent file is an empty configuration; a present but
    /// malformed file is a fatal error.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);

        if !path.exists() {
            info!("No local configuration found");
            return Ok(Self::default());
        }

        info!("Loading local configuration file...");
        Self::from_file(&path)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let object: Map<String, Value> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Self::from_object(object)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Builds a configuration from an already-parsed JSON object.
    pub fn from_object(object: Map<String, Value>) -> Result<Self> {
        let mut defaults = Vec::with_capacity(object.len());

        for (key, value) in object {
            let value = match value {
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => bail!(
                    "Value for \"{key}\" must be a string, boolean or number, got {other}"
                ),
            };
            defaults.push((key.replace('-', "_"), value));
        }

        Ok(Config { defaults })
    }

    /// Overrides the declared default of every matching argument, so that
    /// file values behave exactly like schema defaults: explicit command
    /// line tokens still win, and file values go through the same value
    /// validation as any other token.
    ///
    /// Required arguments keep their status: a default on a mandatory
    /// positional is illegal in clap, and the original front end ignored
    /// file defaults for it as well. Keys naming no declared option are
    /// dropped, not forwarded to the template context; both cases are
    /// reported.
    #[must_use]
    pub fn apply_defaults(&self, mut command: Command) -> Command {
        for (key, value) in &self.defaults {
            let required = command
                .get_arguments()
                .find(|arg| arg.get_id().as_str() == key)
                .map(clap::Arg::is_required_set);

            match required {
                Some(false) => {
                    command =
                        command.mut_arg(key.as_str(), |arg| arg.default_value(value.clone()));
                }
                Some(true) => {
                    warn!(
                        "Option \"{}\" in {} is required on the command line, ignoring the configured default",
                        key, CONFIG_FILENAME
                    );
                }
                None => {
                    warn!(
                        "Unknown option \"{}\" in {}, dropping it (not forwarded to the template context)",
                        key, CONFIG_FILENAME
                    );
                }
            }
        }

        command
    }

    #[must_use]
    pub fn defaults(&self) -> &[(String, String)] {
        &self.defaults
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}
