//! Error types for the pricer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    /// Inputs outside the domain of the closed-form formula (σ ≤ 0, T ≤ 0, S ≤ 0, K ≤ 0, NaN).
    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors raised by input validation rather than IO or parsing.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

impl From<csv::Error> for PricingError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<toml::de::Error> for PricingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
