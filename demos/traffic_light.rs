//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions built with `cycle`
//! - Firing events and inspecting the active state
//! - Querying which states react to an event
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use retrace::builder::cycle;
use retrace::{Fsm, FsmError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = Fsm::new(cycle("next", &["red", "green", "yellow"])?)?;
    println!("Initial state: {}", light.get_state());
    println!("States: {:?}\n", light.states());

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = light.get_state().to_string();
        light.trigger("next")?;
        println!("  {from} -> {}", light.get_state());
    }

    println!("\nStates reacting to 'next': {:?}", light.states_with_event("next"));

    match light.trigger("emergency") {
        Err(err) => println!("Unhandled event rejected: {err}"),
        Ok(()) => println!("Unexpected transition"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
