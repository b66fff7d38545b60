//! # bs-pricer: Closed-Form European Option Pricing
//!
//! `bs-pricer` evaluates the Black-Scholes formula for European calls and puts on a
//! non-dividend-paying underlying from five scalar market inputs: spot, strike, time to
//! expiry, risk-free rate and volatility.
//!
//! ## Core Features
//!
//! - **Normal CDF**: `Φ(x) = 0.5·erfc(−x/√2)` on top of `libm::erfc`
//! - **Option Pricing**: call and put prices with explicit domain validation
//! - **Configuration**: TOML-loadable inputs, strict or pass-through domain handling
//! - **Batch Pricing**: price a CSV of quotes, sorted by strike
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer::{price_call, price_put, price_european, presets};
//!
//! let call = price_call(594.20, 589.0, 4.0 / 252.0, 0.0413, 0.1489)?;
//! let put = price_put(594.20, 589.0, 4.0 / 252.0, 0.0413, 0.1489)?;
//! assert!(call > put);
//!
//! let result = price_european(&presets::reference())?;
//! assert!(result.parity_residual(&presets::reference()).abs() < 1e-9);
//! # Ok::<(), bs_pricer::PricingError>(())
//! ```
//!
//! ## Domain Handling
//!
//! The formula divides by `σ·√T` and takes `ln(S/K)`, so it is undefined for
//! `σ ≤ 0`, `T ≤ 0`, `S ≤ 0` or `K ≤ 0`. The top-level functions reject such
//! inputs with [`PricingError::Domain`]. The raw formulas in [`models::bs`] and
//! [`ValidationMode::Passthrough`] evaluate anyway and return NaN/Inf.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::bs::BlackScholes;
use models::traits::PricingModel;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, Result};

pub use models::bs::{bs_call_price, bs_put_price, d1, d2};
pub use models::utils::normal_cdf;

pub use pricing::types::{
    MarketInputs, OptionType, PricingResult, QuotePrice, QuoteRow, TRADING_DAYS_PER_YEAR,
};

#[cfg(feature = "serde")]
pub use pricing::{
    config::{PricerConfig, ValidationMode},
    pipeline::{load_quotes_csv, price_quotes, price_with_config, read_quotes_csv},
};

// ================================================================================================
// PRESETS
// ================================================================================================

/// Pre-configured market inputs.
pub mod presets {
    use crate::pricing::types::{MarketInputs, TRADING_DAYS_PER_YEAR};

    /// Reference scenario priced by the `bs-pricer` binary.
    ///
    /// - Spot: 594.20
    /// - Strike: 589
    /// - Expiry: 4 trading days (4/252 years)
    /// - Rate: 4.13%
    /// - Volatility: 14.89%
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_pricer::presets;
    ///
    /// let inputs = presets::reference();
    /// assert_eq!(inputs.strike, 589.0);
    /// ```
    pub fn reference() -> MarketInputs {
        MarketInputs::new(594.20, 589.0, 4.0 / TRADING_DAYS_PER_YEAR, 0.0413, 0.1489)
    }

    /// At-the-money one-year option with zero rate, where call and put coincide.
    pub fn at_the_money() -> MarketInputs {
        MarketInputs::new(100.0, 100.0, 1.0, 0.0, 0.2)
    }
}

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European call option.
///
/// ```text
/// d1 = [ln(S/K) + (r + σ²/2)·T] / (σ·√T)
/// d2 = d1 − σ·√T
/// C  = S·Φ(d1) − K·e^(−rT)·Φ(d2)
/// ```
///
/// # Arguments
///
/// * `spot` - Spot price of the underlying (S > 0)
/// * `strike` - Strike price (K > 0)
/// * `time_to_expiry` - Time to expiry in years (T > 0)
/// * `rate` - Annualized continuously-compounded risk-free rate (r)
/// * `volatility` - Annualized volatility (σ > 0)
///
/// # Errors
///
/// [`PricingError::Domain`] if any input is non-finite or S, K, T, σ is not positive.
pub fn price_call(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64> {
    let inputs = MarketInputs::new(spot, strike, time_to_expiry, rate, volatility);
    BlackScholes::new().price(&inputs, OptionType::Call)
}

/// Price a European put option.
///
/// ```text
/// P = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
/// ```
///
/// Arguments and errors as in [`price_call`].
pub fn price_put(
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64> {
    let inputs = MarketInputs::new(spot, strike, time_to_expiry, rate, volatility);
    BlackScholes::new().price(&inputs, OptionType::Put)
}

/// Price both the call and the put for one set of inputs.
///
/// # Example
///
/// ```rust
/// use bs_pricer::{price_european, MarketInputs};
///
/// let inputs = MarketInputs::validated(100.0, 100.0, 1.0, 0.0, 0.2)?;
/// let result = price_european(&inputs)?;
/// assert!((result.call_price - result.put_price).abs() < 1e-12);
/// # Ok::<(), bs_pricer::PricingError>(())
/// ```
pub fn price_european(inputs: &MarketInputs) -> Result<PricingResult> {
    BlackScholes::new().price_both(inputs)
}
