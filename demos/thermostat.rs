//! Thermostat
//!
//! Walks a room through the temperature table with an arrival callback,
//! shows a rejected hop, and a callback failure that still commits.
//!
//! Run with: RUST_LOG=statute=debug cargo run --example thermostat

use statute::builder::{DescriptorBuilder, RuleTableBuilder};
use statute::{state_enum, Callback, State, StateMachine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Temperature {
        TooHot as "too hot",
        TooCold as "too cold",
        JustRight as "just right",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Thermostat Example ===\n");

    let table = RuleTableBuilder::new()
        .state(DescriptorBuilder::for_state(Temperature::TooHot).to(Temperature::JustRight))?
        .state(DescriptorBuilder::for_state(Temperature::TooCold).to(Temperature::JustRight))?
        .state(
            DescriptorBuilder::for_state(Temperature::JustRight)
                .to(Temperature::TooHot)
                .to(Temperature::TooCold),
        )?
        .build()?;

    let mut room = StateMachine::new(Temperature::JustRight, table)?;
    room.register_callback(
        Temperature::TooHot,
        Callback::infallible(|prev: &Temperature| {
            println!("It's too hot and it was {} before", prev.name());
        }),
    );

    room.transition(Temperature::TooHot)?;
    println!("Now: {}", room.current_state().name());

    if let Err(err) = room.transition(Temperature::TooCold) {
        println!("Rejected: {err}");
    }
    println!("Still: {}", room.current_state().name());

    room.transition(Temperature::JustRight)?;
    room.on_enter(Temperature::TooCold, |_| Err("heater offline".into()));
    if let Err(err) = room.transition(Temperature::TooCold) {
        println!("Callback failed: {err}");
        println!("Committed anyway: {}", room.current_state().name());
    }

    let path: Vec<&str> = room.history().get_path().into_iter().map(|s| s.name()).collect();
    println!("\nPath: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
