//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::{Parser, ValueEnum};
use nbnames::{Prefix, Timezone};

use crate::config::Config;

use super::commands::Commands;
use super::error::AppError;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum PrefixArg {
    /// Subject names (default)
    #[default]
    Sub,
    /// Session names
    Ses,
}

impl From<PrefixArg> for Prefix {
    fn from(arg: PrefixArg) -> Self {
        match arg {
            PrefixArg::Sub => Prefix::Sub,
            PrefixArg::Ses => Prefix::Ses,
        }
    }
}

#[derive(Parser)]
#[command(name = "nbnames")]
#[command(about = "Format and validate NeuroBlueprint subject and session names", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Which key the names start with
    #[arg(short, long, global = true, value_enum)]
    pub(crate) prefix: Option<PrefixArg>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Timezone used for @DATE@ / @TIME@ tags (e.g. "UTC", "Europe/London")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.json && config.json {
            self.json = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.prefix.is_none() {
            self.prefix = config.prefix.map(|prefix| match prefix {
                Prefix::Sub => PrefixArg::Sub,
                Prefix::Ses => PrefixArg::Ses,
            });
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }

    pub(crate) fn prefix(&self) -> Prefix {
        self.prefix.unwrap_or_default().into()
    }

    pub(crate) fn timezone(&self) -> Result<Timezone, AppError> {
        Timezone::parse(self.timezone.as_deref())
            .map_err(|input| AppError::InvalidTimezone { input })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_to_sub_prefix() {
        let cli = parse(&["nbnames", "format", "sub-001"]);
        assert_eq!(cli.prefix(), Prefix::Sub);
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["nbnames", "format", "ses-001", "--prefix", "ses", "-j"]);
        assert_eq!(cli.prefix(), Prefix::Ses);
        assert!(cli.json);
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            prefix: Some(Prefix::Ses),
            json: true,
            debug: true,
            timezone: Some("UTC".to_string()),
        };
        let cli = parse(&["nbnames", "tags"]).with_config(&config);
        assert_eq!(cli.prefix(), Prefix::Ses);
        assert!(cli.json);
        assert!(cli.debug);
        assert_eq!(cli.timezone().unwrap(), Timezone::Named(chrono_tz::UTC));
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            prefix: Some(Prefix::Ses),
            timezone: Some("UTC".to_string()),
            ..Config::default()
        };
        let cli = parse(&["nbnames", "tags", "-p", "sub", "--timezone", "local"]).with_config(&config);
        assert_eq!(cli.prefix(), Prefix::Sub);
        assert_eq!(cli.timezone().unwrap(), Timezone::Local);
    }

    #[test]
    fn bad_timezone_is_reported() {
        let cli = parse(&["nbnames", "tags", "--timezone", "Mars/Olympus"]);
        assert!(matches!(
            cli.timezone().unwrap_err(),
            AppError::InvalidTimezone { .. }
        ));
    }

    #[test]
    fn format_requires_names() {
        assert!(Cli::try_parse_from(["nbnames", "format"]).is_err());
    }
}
