use crate::error::Result;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::pricing::config::{PricerConfig, ValidationMode};
use crate::pricing::types::{MarketInputs, OptionType, PricingResult, QuotePrice, QuoteRow};
use std::path::Path;
use tracing::{info, warn};

/// Price the configured inputs under the configured validation mode.
pub fn price_with_config(config: &PricerConfig) -> Result<PricingResult> {
    let model = BlackScholes::new();
    match config.validation {
        ValidationMode::Strict => model.price_both(&config.inputs),
        ValidationMode::Passthrough => Ok(model.price_unchecked(&config.inputs)),
    }
}

/// Price a batch of options.
///
/// Rows that fail validation in strict mode are kept with a NaN price so the
/// output lines up with the input. Results are sorted by strike, calls first
/// on ties; NaN strikes sort after every finite strike.
pub fn price_quotes(rows: Vec<QuoteRow>, config: &PricerConfig) -> Vec<QuotePrice> {
    let model = BlackScholes::new();
    let mut results = Vec::with_capacity(rows.len());
    let mut rejected = 0usize;

    for row in rows {
        let model_price = match config.validation {
            ValidationMode::Strict => match model.price(&row.inputs, row.option_type) {
                Ok(price) => price,
                Err(e) => {
                    warn!(
                        model = model.model_name(),
                        option_type = %row.option_type,
                        strike = row.inputs.strike,
                        intrinsic = row.inputs.intrinsic_value(row.option_type),
                        error = %e,
                        "skipping quote"
                    );
                    rejected += 1;
                    f64::NAN
                }
            },
            ValidationMode::Passthrough => model
                .price_unchecked(&row.inputs)
                .price_of(row.option_type),
        };

        results.push(QuotePrice {
            option_type: row.option_type,
            strike_price: row.inputs.strike,
            underlying_price: row.inputs.spot,
            years_to_exp: row.inputs.time_to_expiry,
            model_price,
        });
    }

    results.sort_by(|a, b| {
        a.strike_price
            .total_cmp(&b.strike_price)
            .then_with(|| option_rank(a.option_type).cmp(&option_rank(b.option_type)))
    });

    info!(
        priced = results.len() - rejected,
        rejected, "batch pricing finished"
    );
    results
}

fn option_rank(option_type: OptionType) -> u8 {
    match option_type {
        OptionType::Call => 0,
        OptionType::Put => 1,
    }
}

/// CSV row structure for quote files
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    option_type: String,
    spot: f64,
    strike: f64,
    time_to_expiry: f64,
    rate: f64,
    volatility: f64,
}

/// Load quotes from a CSV file with header
/// `option_type,spot,strike,time_to_expiry,rate,volatility`.
pub fn load_quotes_csv(path: impl AsRef<Path>) -> Result<Vec<QuoteRow>> {
    let reader = csv::Reader::from_path(path.as_ref())?;
    read_quotes(reader)
}

/// Same as [`load_quotes_csv`] but from any reader.
pub fn read_quotes_csv<R: std::io::Read>(rdr: R) -> Result<Vec<QuoteRow>> {
    read_quotes(csv::Reader::from_reader(rdr))
}

fn read_quotes<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<QuoteRow>> {
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: CsvRow = record?;
        rows.push(QuoteRow {
            option_type: row.option_type.parse()?,
            inputs: MarketInputs::new(
                row.spot,
                row.strike,
                row.time_to_expiry,
                row.rate,
                row.volatility,
            ),
        });
    }
    Ok(rows)
}
