// Answers to the three places where plain integer arithmetic has no good result.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to report when the array has no odd index (fewer than two elements).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyAveragePolicy {
    /// Return NaN, the result of 0.0 / 0.0.
    #[default]
    Nan,
    /// Fail with `NoOddIndex`.
    Error,
}

/// What to do when a factorial no longer fits in a u128.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowPolicy {
    #[default]
    Error,
    Saturate,
    Wrap,
}

/// What to do with a negative factorial input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NegativePolicy {
    #[default]
    Error,
    /// The loop never runs, so the result is the empty product, 1.
    EmptyProduct,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Policies {
    pub empty_average: EmptyAveragePolicy,
    pub overflow: OverflowPolicy,
    pub negative: NegativePolicy,
}
