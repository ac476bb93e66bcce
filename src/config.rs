//! Runtime configuration read from the environment (and `.env`).

use crate::error::SubnetError;
use crate::models::clamp_prefix;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_CHILD_PREFIX: &str = "SUBNET_CALC_CHILD_PREFIX";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
const DEFAULT_CHILD_PREFIX: u8 = 26;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SubnetError::Config {
                key: ENV_FORMAT.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file.
    pub log_config: PathBuf,
    /// Default prefix for the subnetter, already clamped.
    pub child_prefix: u8,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            child_prefix: DEFAULT_CHILD_PREFIX,
            format: OutputFormat::Terminal,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, SubnetError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, SubnetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }
        if let Some(prefix) = lookup(ENV_CHILD_PREFIX) {
            config.child_prefix = clamp_prefix(prefix);
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}
