// Closed-form Black-Scholes pricing of European calls and puts on a
// non-dividend-paying underlying. Implied volatility and Greeks are not
// provided.

use crate::error::Result;
use crate::models::traits::PricingModel;
use crate::models::utils::{discount_factor, log_moneyness, normal_cdf};
use crate::pricing::types::{MarketInputs, OptionType, PricingResult};
use tracing::debug;

/// d1 = [ln(S/K) + (r + σ²/2)·T] / (σ·√T)
#[allow(non_snake_case)]
pub fn d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    (log_moneyness(S, K) + (r + 0.5 * sigma * sigma) * T) / (sigma * T.sqrt())
}

/// d2 = d1 − σ·√T
#[allow(non_snake_case)]
pub fn d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    d1(S, K, T, r, sigma) - sigma * T.sqrt()
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// No domain checks: σ = 0 or T = 0 divide by zero and S, K ≤ 0 take the
/// log of a non-positive number, so the result is NaN or infinite.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d1 - sigma * T.sqrt();
    S * normal_cdf(d1) - K * discount_factor(r, T) * normal_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
///
/// Same domain caveats as [`bs_call_price`].
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d1 - sigma * T.sqrt();
    K * discount_factor(r, T) * normal_cdf(-d2) - S * normal_cdf(-d1)
}

/// Black-Scholes model over [`MarketInputs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl BlackScholes {
    pub fn new() -> Self {
        Self
    }

    /// Price both legs without validating the inputs.
    pub fn price_unchecked(&self, inputs: &MarketInputs) -> PricingResult {
        let MarketInputs {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        } = *inputs;
        PricingResult {
            call_price: bs_call_price(spot, strike, time_to_expiry, rate, volatility),
            put_price: bs_put_price(spot, strike, time_to_expiry, rate, volatility),
        }
    }

    /// Validate, then price both legs.
    pub fn price_both(&self, inputs: &MarketInputs) -> Result<PricingResult> {
        self.validate_inputs(inputs)?;
        let result = self.price_unchecked(inputs);
        debug!(
            spot = inputs.spot,
            strike = inputs.strike,
            t = inputs.time_to_expiry,
            call = result.call_price,
            put = result.put_price,
            "priced european pair"
        );
        Ok(result)
    }
}

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black_scholes"
    }

    fn validate_inputs(&self, inputs: &MarketInputs) -> Result<()> {
        inputs.validate().map_err(|e| {
            debug!(error = %e, "rejected black-scholes inputs");
            e
        })
    }

    fn price(&self, inputs: &MarketInputs, option_type: OptionType) -> Result<f64> {
        self.validate_inputs(inputs)?;
        let MarketInputs {
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
        } = *inputs;
        let price = match option_type {
            OptionType::Call => bs_call_price(spot, strike, time_to_expiry, rate, volatility),
            OptionType::Put => bs_put_price(spot, strike, time_to_expiry, rate, volatility),
        };
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d1_d2_relationship() {
        let (s, k, t, r, sigma) = (100.0, 95.0, 0.5, 0.03, 0.25);
        let gap = d1(s, k, t, r, sigma) - d2(s, k, t, r, sigma);
        assert!((gap - sigma * t.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_atm_zero_rate_call_equals_put() {
        let call = bs_call_price(100.0, 100.0, 1.0, 0.0, 0.2);
        let put = bs_put_price(100.0, 100.0, 1.0, 0.0, 0.2);
        assert!((call - put).abs() < 1e-12);
        // Textbook value for S=K=100, T=1, r=0, sigma=0.2
        assert!((call - 7.965_567_455_405_804).abs() < 1e-9);
    }

    #[test]
    fn test_unchecked_propagates_non_finite() {
        // Zero volatility sends d1 to +inf, collapsing the call to S - K·e^(−rT)
        let call = bs_call_price(100.0, 100.0, 1.0, 0.05, 0.0);
        assert!((call - (100.0 - 100.0 * (-0.05f64).exp())).abs() < 1e-12);
        // 0/0 inside d1
        assert!(bs_call_price(100.0, 100.0, 0.0, 0.05, 0.0).is_nan());
        assert!(bs_call_price(-100.0, 100.0, 1.0, 0.05, 0.2).is_nan());
        assert!(bs_put_price(100.0, 100.0, 0.0, 0.05, 0.0).is_nan());
    }

    #[test]
    fn test_model_rejects_domain_errors() {
        let model = BlackScholes::new();
        let bad = MarketInputs::new(100.0, 100.0, 0.0, 0.05, 0.2);
        assert!(model.price(&bad, OptionType::Call).is_err());
        assert!(model.price_both(&bad).is_err());
        assert_eq!(model.model_name(), "black_scholes");
    }

    #[test]
    fn test_model_price_matches_raw_formula() {
        let model = BlackScholes::new();
        let inputs = MarketInputs::new(120.0, 100.0, 0.75, 0.04, 0.35);
        let call = model.price(&inputs, OptionType::Call).unwrap();
        let put = model.price(&inputs, OptionType::Put).unwrap();
        assert_eq!(call, bs_call_price(120.0, 100.0, 0.75, 0.04, 0.35));
        assert_eq!(put, bs_put_price(120.0, 100.0, 0.75, 0.04, 0.35));
        assert_eq!(model.price_both(&inputs).unwrap().call_price, call);
    }
}
