//! User settings, read from `config.toml`.
//!
//! ```toml
//! strict-tokens = false
//! associativity-fix = false
//! pop-strategy = "single"
//! thousands-separators = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::calculator::{AssociativityRule, CalcOptions, PopStrategy, Strictness};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Reject unrecognized tokens, unbalanced parens and unused operands.
    pub strict_tokens: bool,
    /// Group `+ - * /` left and `^` right instead of always folding left.
    pub associativity_fix: bool,
    pub pop_strategy: PopStrategy,
    /// Show `1,000,000` rather than `1000000`.
    pub thousands_separators: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_tokens: false,
            associativity_fix: false,
            pop_strategy: PopStrategy::Single,
            thousands_separators: true,
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Invalid config")
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/yardcalc/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("yardcalc").join("config.toml"))
    }

    /// Load settings from `path`, or from [`Config::default_path`] when
    /// `None`. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = contents
            .parse::<Self>()
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// The evaluator options these settings describe.
    pub fn options(&self) -> CalcOptions {
        CalcOptions {
            strictness: if self.strict_tokens {
                Strictness::Strict
            } else {
                Strictness::Lenient
            },
            pop_strategy: self.pop_strategy,
            associativity: if self.associativity_fix {
                AssociativityRule::Conventional
            } else {
                AssociativityRule::Legacy
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.options(), CalcOptions::default());
    }

    #[test]
    fn test_all_keys() {
        let config: Config = r#"
            strict-tokens = true
            associativity-fix = true
            pop-strategy = "drain"
            thousands-separators = false
        "#
        .parse()
        .unwrap();

        assert!(!config.thousands_separators);
        assert_eq!(config.options(), CalcOptions::hardened());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!("strict = true".parse::<Config>().is_err());
        assert!(r#"pop-strategy = "sometimes""#.parse::<Config>().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("yardcalc-does-not-exist.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("yardcalc-test-{}.toml", std::process::id()));
        fs::write(&path, "associativity-fix = true\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(config.associativity_fix);
        assert_eq!(
            config.options().associativity,
            AssociativityRule::Conventional
        );
    }
}
