// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_money::numeric::{try_multiply, try_subtract};
use fixed_money::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed Money Example ===\n");

    // Parse prices from their canonical text form
    println!("Parsing prices...");
    let prices = ["19.99 USD", "5.01 usd", "120.00 USD"];
    let mut cart = Vec::new();
    for text in prices {
        match text.parse::<Money>() {
            Ok(price) => {
                println!("  {:>12} -> {}", text, price);
                cart.push(price);
            },
            Err(err) => println!("  {:>12} -> error: {}", text, err),
        }
    }

    // Sum the cart
    let mut total = Money::usd(0);
    for price in &cart {
        total = match total.plus(price) {
            Ok(sum) => sum,
            Err(err) => {
                println!("Could not add {}: {}", price, err);
                return;
            },
        };
    }
    println!("\nCart total: {}", total);

    // Split three ways with half-up rounding
    match total.divided_by(3) {
        Ok(share) => println!("Each of 3 pays: {}", share),
        Err(err) => println!("Split failed: {}", err),
    }

    // Higher-precision currency from a preset
    let btc = CurrencyConfig::new("BTC").with_precision(8);
    match Money::from_config(12_345_678, &btc) {
        Ok(sats) => println!("\nFrom preset: {} ({:?})", sats, sats),
        Err(err) => println!("\nPreset rejected: {}", err),
    }

    // Failures are reported, never wrapped
    println!("\n=== Failure Cases ===");
    if let Err(err) = Money::usd(100).plus(&Money::ars(100)) {
        println!("USD + ARS: {}", err);
    }
    if let Err(err) = Money::usd(100).divided_by(0) {
        println!("Divide by zero: {}", err);
    }
    if let Err(err) = "100 USD".parse::<Money>() {
        println!("Parse \"100 USD\": {}", err);
    }
    if let Err(err) = Money::default().times(2) {
        println!("Default value: {}", err);
    }
    if let Err(err) = try_multiply(i8::MAX, 2) {
        println!("i8::MAX * 2: {}", err);
    }
    if let Err(err) = try_subtract(0u32, 1) {
        println!("0u32 - 1: {}", err);
    }
}
