//! Configuration management for Lunar
//!
//! This crate provides functionality for managing the Lunar configuration, including loading,
//! saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use lunar_common::utils::io::file::{delete_path, read_file, write_file};
use lunar_vm::{core::constants::DEFAULT_GAS_LIMIT, Fork};
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "lunar config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. Commands fall back to
/// it for every setting the user does not pass explicitly.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The gas limit runs get when none is given
    pub gas_limit: u64,

    /// The name of the fork runs use when none is given
    pub fork: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            gas_limit: DEFAULT_GAS_LIMIT,
            fork: Fork::default().to_string().to_lowercase(),
        }
    }
}

/// Returns the path of the configuration file, `$HOME/.lunar/config.toml`.
#[allow(deprecated)]
pub fn config_path() -> Result<PathBuf, Error> {
    let mut home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".lunar");
    home.push("config.toml");
    Ok(home)
}

fn path_str(path: &Path) -> Result<&str, Error> {
    path.to_str().ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

impl Configuration {
    /// Returns the current configuration, creating the default one if none exists yet.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&config_path()?)
    }

    /// Returns the configuration stored at `path`, creating the default one if none exists yet.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        // if the config file doesn't exist, create it
        if !path.exists() {
            debug!(path = %path.display(), "creating default configuration");
            Configuration::default().save_to(path)?;
        }

        // read the config file
        let contents = read_file(path_str(path)?)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&config_path()?)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        write_file(
            path_str(path)?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.lunar/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let path = config_path()?;
        if !delete_path(path_str(&path)?) {
            debug!(path = %path.display(), "no configuration to delete");
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration, checking that the value has the
    /// type the key expects. Does not write to disk.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "gas_limit" => {
                self.gas_limit = value.trim().parse::<u64>().map_err(|_| {
                    Error::ParseError(format!("invalid value: '{value}' is not a valid gas limit."))
                })?;
            }
            "fork" => self.fork = value.parse::<Fork>()?.to_string().to_lowercase(),
            _ => return Err(Error::UnknownKey(key.to_string())),
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration and write it to disk.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.set(key, value)?;

        // write the updated config to disk
        self.save()?;

        Ok(())
    }

    /// Returns the configured fork.
    pub fn fork(&self) -> Result<Fork, Error> {
        Ok(self.fork.parse::<Fork>()?)
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `lunar config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `lunar config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}
