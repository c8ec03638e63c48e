use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use log::LevelFilter;
use serde::{Deserialize, Deserializer, Serialize};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

#[macro_use]
extern crate log;

mod driver;
mod error;
mod input;
mod policy;
mod processor;
mod report;
mod utils;

use crate::driver::{Options, OutputFormat};
use crate::policy::{EmptyAveragePolicy, NegativePolicy, OverflowPolicy, Policies};

/// Reads a size and that many integers from stdin, then prints the array, the
/// average of its odd-index elements and the factorial of every element.
#[derive(Clone, Debug, Default, Parser, Serialize, Deserialize)]
#[command(version)]
struct Config {
    /// Result when the array has no odd index
    #[arg(long, value_enum, value_name = "POLICY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    empty_average: Option<EmptyAveragePolicy>,

    /// Handling of factorials too large for 128 bits
    #[arg(long, value_enum, value_name = "POLICY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    overflow: Option<OverflowPolicy>,

    /// Handling of factorials of negative numbers
    #[arg(long, value_enum, value_name = "POLICY")]
    #[serde(skip_serializing_if = "Option::is_none")]
    negative: Option<NegativePolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,

    /// Decimal places for the average
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    precision: Option<u16>,

    /// Don't print input prompts
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_bool"
    )]
    no_prompt: Option<bool>,

    /// off, error, warn, info, debug or trace, or 0 to 5
    #[arg(short, long, value_name = "LEVEL")]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    log_level: Option<String>,
}

impl Config {
    fn options(&self) -> Options {
        let defaults = Options::default();
        Options {
            policies: Policies {
                empty_average: self.empty_average.unwrap_or_default(),
                overflow: self.overflow.unwrap_or_default(),
                negative: self.negative.unwrap_or_default(),
            },
            format: self.format.unwrap_or(defaults.format),
            precision: self.precision.map_or(defaults.precision, usize::from),
            prompt: !self.no_prompt.unwrap_or(false),
        }
    }

    fn log_level(&self) -> anyhow::Result<LevelFilter> {
        match self.log_level.as_deref() {
            None => Ok(LevelFilter::Warn),
            // 0 is off, 5 is trace.
            Some(level) => match level.parse::<usize>() {
                Ok(n) => LevelFilter::iter()
                    .nth(n)
                    .ok_or_else(|| anyhow!("invalid log level: {}", level)),
                Err(_) => LevelFilter::from_str(level)
                    .map_err(|_| anyhow!("invalid log level: {}", level)),
            },
        }
    }
}

// Environment values arrive typed, so `ARRAYPROC_NO_PROMPT=1` is an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    use serde::de::Error;
    match Option::<Loose>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Bool(b)) => Ok(Some(b)),
        Some(Loose::Int(0)) => Ok(Some(false)),
        Some(Loose::Int(1)) => Ok(Some(true)),
        Some(Loose::Int(n)) => Err(D::Error::custom(format!(
            "expected a boolean, found {}",
            n
        ))),
        Some(Loose::Text(t)) => match t.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("expected a boolean, found '{}'", t))),
        },
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => None,
        Some(Loose::Bool(b)) => Some(b.to_string()),
        Some(Loose::Int(n)) => Some(n.to_string()),
        Some(Loose::Text(t)) => Some(t),
    })
}

fn load_config(flags: Config) -> anyhow::Result<Config> {
    // Start with toml configuration file.
    Figment::from(Toml::file("arrayproc.toml"))
        // Override with anything set in environment variables.
        .merge(Env::prefixed("ARRAYPROC_"))
        // Override with anything set via flags.
        .merge(Serialized::defaults(flags))
        .extract()
        .context("invalid configuration")
}

fn main() {
    let config = match load_config(Config::parse()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
    };
    let level = match config.log_level() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logger error: {}", e);
    }

    let options = config.options();
    info!("running with {:?}", options);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = driver::run(stdin.lock(), &mut stdout.lock(), &options) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
