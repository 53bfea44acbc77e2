// src/config/mod.rs
mod cli;
mod models;

pub use cli::usage;
pub use models::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unknown option, bad value, or a help/version request.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("url is required")]
    MissingUrl,

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
