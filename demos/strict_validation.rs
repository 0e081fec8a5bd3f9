//! Strict Configuration Validation
//!
//! This example compares lazy and strict handling of a configuration whose
//! transitions point at undeclared states.
//!
//! Key concepts:
//! - Lazy mode accepts the configuration and fails when the bad transition fires
//! - Strict mode rejects it up front, reporting every violation at once
//!
//! Run with: cargo run --example strict_validation

use retrace::validation::validate_config;
use retrace::{machine_config, Fsm, ValidationMode};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Strict Validation Example ===\n");

    let config = machine_config! {
        initial: pending,
        pending { pay => paid, cancel => cancelled },
        paid { ship => shipped, refund => refunded },
        shipped {},
    }?;

    println!("Lazy mode:");
    let mut order = Fsm::with_mode(config.clone(), ValidationMode::Lazy)?;
    println!("  created in state '{}'", order.get_state());
    if let Err(err) = order.trigger("cancel") {
        println!("  'cancel' failed when fired: {err}");
    }

    println!("\nStrict mode:");
    match Fsm::with_mode(config.clone(), ValidationMode::Strict) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => println!("  rejected at construction: {err}"),
    }

    println!("\nIndividual violations:");
    if let Validation::Failure(violations) = validate_config(&config) {
        for violation in violations.iter() {
            println!("  - {violation}");
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
