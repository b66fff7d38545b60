
use bs_pricer::{
    load_quotes_csv, presets, price_quotes, price_with_config, MarketInputs, OptionType,
    PricerConfig, PricingError, ValidationMode,
};
use test_utils::{assert_close, data_path, REFERENCE_CALL, REFERENCE_PUT};

/// The fixture expresses expiry as 4 trading days; it must resolve to the reference preset.
#[test]
fn test_reference_config_file() {
    let config = PricerConfig::from_path(data_path("reference.toml")).expect("fixture parses");

    assert_eq!(config.validation, ValidationMode::Strict);
    assert_close(
        config.inputs.time_to_expiry,
        presets::reference().time_to_expiry,
        1e-15,
        "time to expiry",
    );

    let result = price_with_config(&config).unwrap();
    assert_close(result.call_price, REFERENCE_CALL, 1e-6, "config call");
    assert_close(result.put_price, REFERENCE_PUT, 1e-6, "config put");
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = PricerConfig::from_path(data_path("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, PricingError::Io(_)));
}

#[test]
fn test_passthrough_preserves_non_finite_results() {
    let zero_vol = MarketInputs::new(594.20, 589.0, 4.0 / 252.0, 0.0413, 0.0);

    let strict = PricerConfig::strict().with_inputs(zero_vol);
    assert!(matches!(
        price_with_config(&strict),
        Err(PricingError::Domain(_))
    ));

    // Negative spot: ln of a negative ratio
    let negative_spot = MarketInputs::new(-594.20, 589.0, 4.0 / 252.0, 0.0413, 0.1489);
    let loose = PricerConfig::passthrough().with_inputs(negative_spot);
    let result = price_with_config(&loose).unwrap();
    assert!(result.call_price.is_nan());
    assert!(result.put_price.is_nan());
}

#[test]
fn test_quote_file_batch_pricing() {
    let rows = load_quotes_csv(data_path("quotes.csv")).expect("quote fixture loads");
    assert_eq!(rows.len(), 6);

    let results = price_quotes(rows, &PricerConfig::strict());
    let strikes: Vec<f64> = results.iter().map(|r| r.strike_price).collect();
    assert_eq!(strikes, vec![580.0, 580.0, 589.0, 589.0, 600.0, 600.0]);

    // The expired 580 put is rejected but kept in place
    assert_eq!(results[1].option_type, OptionType::Put);
    assert!(results[1].model_price.is_nan());
    assert!(results[0].model_price > 0.0);

    assert_eq!(results[2].option_type, OptionType::Call);
    assert_close(results[2].model_price, REFERENCE_CALL, 1e-6, "589 call");
    assert_close(results[3].model_price, REFERENCE_PUT, 1e-6, "589 put");

    // Higher strike, cheaper call
    assert!(results[4].model_price < results[2].model_price);
    assert!(results[5].model_price > results[3].model_price);
}
