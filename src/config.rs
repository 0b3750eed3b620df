use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Time expressions averaged when none are supplied.
pub const DEFAULT_TIMES: [&str; 3] = ["4,701", "4,644", "4,630"];

/// Averaging configuration.
///
/// Loaded from a TOML file, built from an explicit list, or taken from
/// [`Config::default`], and validated before use.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Time expressions, in input order.
    pub times: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            times: DEFAULT_TIMES.iter().map(|time| time.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// The file must contain a `times` array of strings.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to open {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    /// Build a [`Config`] from an explicit list of time expressions.
    pub fn from_times(times: Vec<String>) -> Result<Self> {
        let config = Config { times };

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.times.len(), 1..=1000).context("invalid number of time expressions")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
