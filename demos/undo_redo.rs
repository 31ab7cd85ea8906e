//! Document Workflow with Undo/Redo
//!
//! This example demonstrates the linear undo/redo history.
//!
//! Key concepts:
//! - Building a configuration with the fluent builder
//! - Walking changes back with undo and forward again with redo
//! - A new change dropping the redoable branch
//! - clear_history emptying only the undo stack
//!
//! Run with: cargo run --example undo_redo

use rewind::builder::{state, ConfigBuilder};
use rewind::StateMachine;

fn main() {
    println!("=== Document Workflow ===\n");

    let config = ConfigBuilder::new()
        .initial("draft")
        .state(state("draft").on("submit", "review"))
        .state(state("review").on("approve", "published").on("reject", "draft"))
        .state(state("published").on("retract", "draft"))
        .build()
        .unwrap();

    let mut machine = StateMachine::new(config);
    println!("Initial state: {}", machine.current_state());

    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("After submit + approve: {}\n", machine.current_state());

    println!("Undoing both changes:");
    machine.undo();
    println!("  undo -> {}", machine.current_state());
    machine.undo();
    println!("  undo -> {}", machine.current_state());

    println!("\nRedoing one:");
    machine.redo();
    println!("  redo -> {}", machine.current_state());

    println!("\nA new change drops what was still redoable:");
    machine.trigger("reject").unwrap();
    println!("  reject -> {}", machine.current_state());
    println!("  redo available? {}", machine.can_redo());

    println!("\nclear_history empties the undo stack only:");
    machine.trigger("submit").unwrap();
    machine.undo();
    machine.clear_history();
    println!("  undo available? {}", machine.can_undo());
    println!("  redo available? {}", machine.can_redo());
    machine.redo();
    println!("  redo -> {}", machine.current_state());

    println!("\n=== Example Complete ===");
}
