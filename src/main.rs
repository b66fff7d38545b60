use anyhow::{Context, Result};
use bs_pricer::{presets, price_call, price_put};
use tracing::Level;

fn main() -> Result<()> {
    // Diagnostics on stderr so stdout carries only the two price lines
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let inputs = presets::reference();

    let call_price = price_call(
        inputs.spot,
        inputs.strike,
        inputs.time_to_expiry,
        inputs.rate,
        inputs.volatility,
    )
    .context("pricing call")?;
    let put_price = price_put(
        inputs.spot,
        inputs.strike,
        inputs.time_to_expiry,
        inputs.rate,
        inputs.volatility,
    )
    .context("pricing put")?;

    println!("Call Option Price: {}", call_price);
    println!("Put Option Price: {}", put_price);

    Ok(())
}
