//! Document Editor Modes
//!
//! This example demonstrates undo/redo navigation through state history.
//!
//! Key concepts:
//! - Loading a configuration from JSON
//! - Undo and redo without losing history
//! - Branch truncation when a new transition follows an undo
//! - Clearing history while keeping the active state
//!
//! Run with: RUST_LOG=debug cargo run --example document_editor

use retrace::{Fsm, FsmError};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn print_history(fsm: &Fsm) {
    let cursor = fsm.history().cursor().unwrap_or(0);
    let rendered: Vec<String> = fsm
        .history()
        .path()
        .iter()
        .enumerate()
        .map(|(i, s)| if i == cursor { format!("[{s}]") } else { s.to_string() })
        .collect();
    println!("  history: {}", rendered.join(" -> "));
}

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Document Editor Example ===\n");

    let mut editor = Fsm::from_json(&json!({
        "initial": "viewing",
        "states": {
            "viewing": { "transitions": { "edit": "editing", "comment": "commenting" } },
            "editing": { "transitions": { "preview": "previewing", "close": "viewing" } },
            "previewing": { "transitions": { "edit": "editing", "close": "viewing" } },
            "commenting": { "transitions": { "close": "viewing" } }
        }
    }))?;

    println!("Step 1: edit, then preview");
    editor.trigger("edit")?;
    editor.trigger("preview")?;
    print_history(&editor);

    println!("\nStep 2: undo twice");
    editor.undo();
    editor.undo();
    print_history(&editor);
    println!("  can redo: {}", editor.can_redo());

    println!("\nStep 3: comment instead (redo branch is dropped)");
    editor.trigger("comment")?;
    print_history(&editor);
    println!("  can redo: {}", editor.can_redo());

    println!("\nStep 4: clear history");
    editor.clear_history()?;
    print_history(&editor);
    println!("  available events: {:?}", editor.available_events());

    println!("\n=== Example Complete ===");
    Ok(())
}
