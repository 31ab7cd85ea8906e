//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Declaring a configuration with the `states!` macro
//! - Cyclic event-triggered transitions (states repeat)
//! - Listing states, with and without an event filter
//!
//! Run with: cargo run --example traffic_light

use rewind::{states, StateMachine};

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = states! {
        initial: red,
        red { advance => green },
        green { advance => yellow },
        yellow { advance => red },
    }
    .unwrap();

    let mut machine = StateMachine::new(config);

    println!("States: {:?}", machine.state_names());
    println!("States handling 'advance': {:?}", machine.states_handling("advance"));
    println!("Initial state: {}\n", machine.current_state());

    println!("Cycling through the lights:");
    for _ in 0..4 {
        machine.trigger("advance").unwrap();
        println!("  advance -> {}", machine.current_state());
    }

    println!("\nAn unhandled event is rejected without changing anything:");
    match machine.trigger("reverse") {
        Ok(()) => unreachable!(),
        Err(err) => println!("  {err}"),
    }
    println!("  still at: {}", machine.current_state());

    println!("\nReset returns to the initial light:");
    machine.reset();
    println!("  state: {}", machine.current_state());

    println!("\n=== Example Complete ===");
}
