use std::{env, ffi::OsString, num::ParseIntError, path::PathBuf};

use clap::Parser;
use reqwest::Url;
use thiserror::Error;

use crate::news::DEFAULT_ENDPOINT;

/// Flags that may also be written with a single leading dash, e.g. `-apikey`.
const LONG_FLAGS: [&str; 4] = ["apikey", "port", "endpoint", "assets-dir"];

const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug)]
#[command(name = "news-search", about = "Search front end for newsapi.org")]
struct Args {
    /// Newsapi.org access key
    #[arg(long, default_value = "")]
    apikey: String,

    /// Port to listen on, overrides $PORT (default 3000)
    #[arg(long)]
    port: Option<u16>,

    /// Upstream article search endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT, value_parser = Url::parse)]
    endpoint: Url,

    /// Directory served under /assets
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("apiKey must be set")]
    MissingApiKey,
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: ParseIntError,
    },
}

/// Process configuration, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub endpoint: Url,
    pub assets_dir: PathBuf,
}

impl Config {
    /// Parses command line arguments and `$PORT`. Invalid flags exit the process with usage.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = Args::parse_from(args.into_iter().map(normalize_flag));
        Self::from_parts(args, env::var("PORT").ok())
    }

    fn from_parts(args: Args, port_env: Option<String>) -> Result<Self, ConfigError> {
        if args.apikey.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let port = match (args.port, port_env) {
            (Some(port), _) => port,
            (None, Some(value)) if !value.is_empty() => value
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            (None, _) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: args.apikey,
            port,
            endpoint: args.endpoint,
            assets_dir: args.assets_dir,
        })
    }
}

fn normalize_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };

    let name = match text.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => rest.split_once('=').map_or(rest, |(name, _)| name),
        _ => return arg,
    };

    if LONG_FLAGS.contains(&name) {
        OsString::from(format!("-{text}"))
    } else {
        arg
    }
}
