pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::error::Result;
    use crate::pricing::types::{MarketInputs, OptionType};

    /// Pricing model trait for European option valuation
    pub trait PricingModel {
        /// Short model identifier (e.g., "black_scholes")
        fn model_name(&self) -> &str;

        /// Check that the inputs lie inside the model's domain.
        fn validate_inputs(&self, inputs: &MarketInputs) -> Result<()>;

        /// Price a single European option.
        fn price(&self, inputs: &MarketInputs, option_type: OptionType) -> Result<f64>;
    }
}

/// Utility functions for option pricing and calculations
pub mod utils {
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`. Going through the complementary
    /// error function keeps full relative precision in the lower tail, where
    /// `0.5 * (1 + erf(x / sqrt(2)))` cancels to zero.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Calculate log-moneyness: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    /// Continuously-compounded discount factor e^(-rT)
    pub fn discount_factor(rate: f64, time_to_expiry: f64) -> f64 {
        (-rate * time_to_expiry).exp()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_normal_cdf_at_zero() {
            assert!((normal_cdf(0.0) - 0.5).abs() < 1e-9);
        }

        #[test]
        fn test_normal_cdf_known_quantiles() {
            // Phi(1.96) ~ 0.975, Phi(-1.96) ~ 0.025
            assert!((normal_cdf(1.96) - 0.975_002_104_851_780).abs() < 1e-12);
            assert!((normal_cdf(-1.96) - 0.024_997_895_148_220).abs() < 1e-12);
            assert!((normal_cdf(1.0) - 0.841_344_746_068_543).abs() < 1e-12);
        }

        #[test]
        fn test_normal_cdf_symmetry_and_bounds() {
            for i in -80..=80 {
                let x = i as f64 * 0.1;
                let p = normal_cdf(x);
                assert!((0.0..=1.0).contains(&p), "Phi({}) = {} out of [0,1]", x, p);
                assert!((p + normal_cdf(-x) - 1.0).abs() < 1e-15);
            }
        }

        #[test]
        fn test_normal_cdf_tails() {
            assert_eq!(normal_cdf(f64::INFINITY), 1.0);
            assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
            assert!(normal_cdf(f64::NAN).is_nan());
            // Lower tail keeps precision instead of collapsing to zero
            let far = normal_cdf(-10.0);
            assert!(far > 7.6e-24 && far < 7.7e-24, "Phi(-10) = {}", far);
        }

        #[test]
        fn test_discount_and_moneyness() {
            assert_eq!(discount_factor(0.0, 5.0), 1.0);
            assert!((discount_factor(0.05, 1.0) - (-0.05f64).exp()).abs() < 1e-15);
            assert_eq!(log_moneyness(100.0, 100.0), 0.0);
            assert!(log_moneyness(110.0, 100.0) > 0.0);
        }
    }
}
