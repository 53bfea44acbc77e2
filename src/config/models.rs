// src/config/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CODE: i64 = 200;

/// Everything a single check needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub timeout_secs: u64,
    /// Acceptable status codes. Never empty; values outside the HTTP range never match.
    pub codes: BTreeSet<i64>,
    /// Required body substring; empty disables the body check.
    pub contain: String,
}

impl Config {
    /// Build a config, falling back to `{200}` when `codes` yields nothing.
    pub fn new(
        url: Url,
        timeout_secs: u64,
        codes: impl IntoIterator<Item = i64>,
        contain: impl Into<String>,
    ) -> Self {
        let mut codes: BTreeSet<i64> = codes.into_iter().collect();
        if codes.is_empty() {
            codes.insert(DEFAULT_CODE);
        }

        Self {
            url,
            timeout_secs,
            codes,
            contain: contain.into(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn requires_body(&self) -> bool {
        !self.contain.is_empty()
    }

    /// Block of configured values printed next to every failure.
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

pub struct Summary<'a>(&'a Config);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.0.codes.iter().map(i64::to_string).collect();

        writeln!(f, "Testing URL: {}", self.0.url)?;
        writeln!(f, "Valid Return-Codes: [{}]", codes.join(" "))?;
        writeln!(f, "Must Contain: {}", self.0.contain)?;
        write!(f, "Timeout: {}", self.0.timeout_secs)
    }
}
