// src/config/cli.rs
// Command-line surface. Accepts single-dash long options
// (`-url x`, `-code=200`) by rewriting them before clap parses.

use super::models::{Config, DEFAULT_TIMEOUT_SECS};
use super::ConfigError;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use url::Url;

const LONG_OPTIONS: [&str; 5] = ["url", "code", "contain", "contains", "timeout"];

#[derive(Parser, Debug)]
#[command(
    name = "httping",
    version,
    about = "Issue one GET request and verify status code and body",
    override_usage = "httping -url <URL> [-code <CODE>]... [-contain <TEXT>] [-timeout <SECONDS>]"
)]
struct Args {
    /// Site to call
    #[arg(long, value_name = "URL", default_value = "")]
    url: String,

    /// Acceptable response code, may be repeated (defaults to 200)
    #[arg(
        long = "code",
        value_name = "CODE",
        value_parser = parse_code,
        allow_negative_numbers = true
    )]
    codes: Vec<i64>,

    /// Text the response body must contain
    #[arg(
        long,
        visible_alias = "contains",
        value_name = "TEXT",
        default_value = "",
        allow_hyphen_values = true
    )]
    contain: String,

    /// Total request timeout in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

fn parse_code(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| "code must be an integer".to_string())
}

/// Rewrite `-name` / `-name=value` into `--name` for the known options.
/// Values that follow an option are left untouched, as is anything after `--`.
fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expects_value = false;
    let mut terminated = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        if index == 0 || terminated {
            out.push(arg);
            continue;
        }
        if std::mem::take(&mut expects_value) {
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            terminated = true;
            out.push(arg);
            continue;
        }

        let bare = text.trim_start_matches('-');
        let (name, inline_value) = match bare.split_once('=') {
            Some((name, _)) => (name, true),
            None => (bare, false),
        };

        if !text.starts_with('-') || !LONG_OPTIONS.contains(&name) {
            out.push(arg);
            continue;
        }

        expects_value = !inline_value;
        if text.starts_with("--") {
            out.push(arg);
        } else {
            out.push(format!("-{text}").into());
        }
    }

    out
}

impl Config {
    /// Parse process arguments (including the program name) into a config.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = Args::try_parse_from(normalize(args))?;

        if args.url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }

        let url = Url::parse(&args.url).map_err(|source| ConfigError::InvalidUrl {
            url: args.url.clone(),
            source,
        })?;

        Ok(Config::new(url, args.timeout, args.codes, args.contain))
    }
}

/// Full usage text, printed when the configuration is unusable.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(std::iter::once("httping").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["-url", "http://localhost/health"]).unwrap();

        assert_eq!(config.url.as_str(), "http://localhost/health");
        assert_eq!(config.codes, BTreeSet::from([200]));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.contain, "");
    }

    #[test]
    fn test_repeated_codes_accumulate() {
        let config = parse(&["-url", "http://x/", "-code", "200", "-code", "202"]).unwrap();

        assert_eq!(config.codes, BTreeSet::from([200, 202]));
    }

    #[test]
    fn test_single_and_double_dash_with_inline_values() {
        let config = parse(&[
            "--url=http://x/",
            "-code=503",
            "-contains",
            "healthy",
            "-timeout=2",
        ])
        .unwrap();

        assert_eq!(config.codes, BTreeSet::from([503]));
        assert_eq!(config.contain, "healthy");
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn test_option_lookalike_value_is_not_rewritten() {
        let config = parse(&["-url", "http://x/", "-contain", "-timeout"]).unwrap();

        assert_eq!(config.contain, "-timeout");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_missing_url() {
        assert!(matches!(parse(&[]), Err(ConfigError::MissingUrl)));
        assert!(matches!(parse(&["-url", ""]), Err(ConfigError::MissingUrl)));
    }

    #[test]
    fn test_invalid_url() {
        let err = parse(&["-url", "not a url"]).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_integer_code() {
        let err = parse(&["-url", "http://x/", "-code", "abc"]).unwrap_err();

        assert!(matches!(err, ConfigError::Cli(_)));
        assert!(err.to_string().contains("code must be an integer"));
    }

    #[test]
    fn test_any_integer_code_is_accepted() {
        let config =
            parse(&["-url", "http://x/", "-code", "-1", "-code=70000", "-code", "42"]).unwrap();

        assert_eq!(config.codes, BTreeSet::from([-1, 42, 70000]));
    }

    #[test]
    fn test_negative_non_integer_code() {
        let err = parse(&["-url", "http://x/", "-code=-1.5"]).unwrap_err();

        assert!(err.to_string().contains("code must be an integer"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse(&["-url", "http://x/", "-timeout", "0"]).is_err());
    }

    #[test]
    fn test_usage_mentions_every_option() {
        let text = usage();

        for option in ["url", "code", "contain", "timeout"] {
            assert!(text.contains(option), "usage is missing {option}");
        }
    }
}
