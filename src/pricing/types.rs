use crate::error::{PricingError, Result};
use crate::models::utils::discount_factor;
use std::fmt;
use std::str::FromStr;

/// Default number of trading days per year used to convert days-to-expiry into years
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Option right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_input(format!(
                "Invalid option type: {}",
                other
            ))),
        }
    }
}

/// The five scalar market inputs of the Black-Scholes formula
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// Annualized continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualized volatility (σ, as decimal, e.g., 0.20 for 20%)
    pub volatility: f64,
}

impl MarketInputs {
    /// Build inputs without any domain checks.
    pub fn new(spot: f64, strike: f64, time_to_expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        }
    }

    /// Build inputs and reject anything the closed-form formula cannot evaluate.
    pub fn validated(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        let inputs = Self::new(spot, strike, time_to_expiry, rate, volatility);
        inputs.validate()?;
        Ok(inputs)
    }

    /// Build inputs from a days-to-expiry count, e.g. `4` days over a 252-day year.
    pub fn from_trading_days(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        rate: f64,
        volatility: f64,
        trading_days_per_year: f64,
    ) -> Result<Self> {
        if !(trading_days_per_year.is_finite() && trading_days_per_year > 0.0) {
            return Err(PricingError::invalid_input(format!(
                "trading_days_per_year must be positive, got {}",
                trading_days_per_year
            )));
        }
        Ok(Self::new(
            spot,
            strike,
            days_to_expiry / trading_days_per_year,
            rate,
            volatility,
        ))
    }

    /// Check the formula's preconditions: S > 0, K > 0, T > 0, σ > 0, all finite.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_expiry", self.time_to_expiry),
            ("rate", self.rate),
            ("volatility", self.volatility),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::domain(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }

        if self.spot <= 0.0 {
            return Err(PricingError::domain(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::domain(format!(
                "strike must be positive, got {}",
                self.strike
            )));
        }
        if self.time_to_expiry <= 0.0 {
            return Err(PricingError::domain(format!(
                "time_to_expiry must be positive, got {}",
                self.time_to_expiry
            )));
        }
        if self.volatility <= 0.0 {
            return Err(PricingError::domain(format!(
                "volatility must be positive, got {}",
                self.volatility
            )));
        }
        Ok(())
    }

    /// Present value of the strike, K·e^(−rT)
    pub fn discounted_strike(&self) -> f64 {
        self.strike * discount_factor(self.rate, self.time_to_expiry)
    }

    /// Payoff if exercised immediately
    pub fn intrinsic_value(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }
}

/// Call and put prices for one set of market inputs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
}

impl PricingResult {
    /// Deviation from put-call parity: (C − P) − (S − K·e^(−rT)).
    pub fn parity_residual(&self, inputs: &MarketInputs) -> f64 {
        (self.call_price - self.put_price) - (inputs.spot - inputs.discounted_strike())
    }

    pub fn price_of(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }
}

/// One option to be priced in a batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteRow {
    pub option_type: OptionType,
    pub inputs: MarketInputs,
}

/// Batch pricing output for a single option
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuotePrice {
    /// Option type: call or put
    pub option_type: OptionType,
    /// Strike price
    pub strike_price: f64,
    /// Underlying asset price
    pub underlying_price: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Model option price (NaN when the row was rejected)
    pub model_price: f64,
}
