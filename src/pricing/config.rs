use crate::error::{PricingError, Result};
use crate::pricing::types::{MarketInputs, TRADING_DAYS_PER_YEAR};
use serde::Deserialize;
use std::path::Path;

/// How domain errors (σ ≤ 0, T ≤ 0, S ≤ 0, K ≤ 0) are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reject with [`PricingError::Domain`]
    #[default]
    Strict,
    /// Evaluate the formula anyway and hand back NaN/Inf
    Passthrough,
}

/// `[inputs]` table as written in a config file.
///
/// Expiry may be given in years (`time_to_expiry`) or in trading days
/// (`days_to_expiry`), not both.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputsSection {
    spot: f64,
    strike: f64,
    #[serde(default)]
    time_to_expiry: Option<f64>,
    #[serde(default)]
    days_to_expiry: Option<f64>,
    rate: f64,
    volatility: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    inputs: Option<InputsSection>,

    #[serde(default)]
    validation: ValidationMode,

    #[serde(default = "default_trading_days_per_year")]
    trading_days_per_year: f64,
}

/// Main configuration struct for a pricing run
#[derive(Debug, Clone, PartialEq)]
pub struct PricerConfig {
    /// Market inputs to price
    pub inputs: MarketInputs,
    /// Domain-error policy
    pub validation: ValidationMode,
    /// Trading days per year for days-to-expiry conversion
    pub trading_days_per_year: f64,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            inputs: crate::presets::reference(),
            validation: ValidationMode::default(),
            trading_days_per_year: default_trading_days_per_year(),
        }
    }
}

impl PricerConfig {
    /// Reference inputs, domain errors rejected
    pub fn strict() -> Self {
        Self::default()
    }

    /// Reference inputs, domain errors passed through as NaN/Inf
    pub fn passthrough() -> Self {
        Self {
            validation: ValidationMode::Passthrough,
            ..Self::default()
        }
    }

    /// Replace the inputs, keeping the other settings.
    pub fn with_inputs(mut self, inputs: MarketInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Parse a TOML document. Missing keys fall back to [`PricerConfig::default`].
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(s)?;

        if !(raw.trading_days_per_year.is_finite() && raw.trading_days_per_year > 0.0) {
            return Err(PricingError::config(format!(
                "trading_days_per_year must be positive, got {}",
                raw.trading_days_per_year
            )));
        }

        let inputs = match raw.inputs {
            None => crate::presets::reference(),
            Some(section) => section.into_inputs(raw.trading_days_per_year)?,
        };

        Ok(Self {
            inputs,
            validation: raw.validation,
            trading_days_per_year: raw.trading_days_per_year,
        })
    }

    /// Read and parse a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

impl InputsSection {
    fn into_inputs(self, trading_days_per_year: f64) -> Result<MarketInputs> {
        match (self.time_to_expiry, self.days_to_expiry) {
            (Some(t), None) => Ok(MarketInputs::new(
                self.spot,
                self.strike,
                t,
                self.rate,
                self.volatility,
            )),
            (None, Some(days)) => MarketInputs::from_trading_days(
                self.spot,
                self.strike,
                days,
                self.rate,
                self.volatility,
                trading_days_per_year,
            ),
            (Some(_), Some(_)) => Err(PricingError::config(
                "give either time_to_expiry or days_to_expiry, not both",
            )),
            (None, None) => Err(PricingError::config(
                "missing time_to_expiry or days_to_expiry in [inputs]",
            )),
        }
    }
}

fn default_trading_days_per_year() -> f64 {
    TRADING_DAYS_PER_YEAR
}
