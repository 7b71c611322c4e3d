//! Colony Simulation Demo
//!
//! Walks one user through the whole loop against an in-memory store:
//! register, let production accrue, harvest, construct, trigger a world
//! event and watch it modify accrual. Time is driven by a manual clock so
//! the run is instant and reproducible.

use starstation_core::{DefId, ManualClock, Resource, TriggerOutcome};
use starstation_service::{GameService, ServiceConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== StarStation Colony Simulation ===\n");

    let config = ServiceConfig::default().with_rng_seed(42);
    let clock = ManualClock::at(1_000_000);
    let service = GameService::open(&config, clock)?;

    // Register a commander
    let reg = service.register("commander", "not-a-real-password")?;
    println!("Registered commander (ID: {})", reg.user_id);
    print_balances("Starting balances", &service, reg.user_id)?;

    // Let the habitat run for five minutes, then preview
    advance(&service, 5 * 60_000);
    let view = service.get_state(reg.user_id)?;
    println!("\nAfter 5 minutes, stocked and uncollected:");
    for (resource, amount) in &view.stocked_resources {
        if *amount > 0 {
            println!("  {}: +{}", resource, amount);
        }
    }

    // Harvest and build a second habitat
    let receipt = service.harvest(reg.user_id)?;
    println!(
        "\nHarvested {} oxygen",
        receipt.harvested.get(&Resource::Oxygen).unwrap_or(&0)
    );
    let built = service.build(reg.user_id, &DefId::new("habitat"))?;
    println!(
        "Built a second {} at ({}, {})",
        built.building.kind, built.building.position.x, built.building.position.y
    );
    print_balances("Balances after construction", &service, reg.user_id)?;

    // Trigger a world event and watch it modify production
    match service.trigger_event(reg.user_id)? {
        TriggerOutcome::Triggered(active) => {
            println!("\nEvent: {}", active.message);
            advance(&service, 2 * 60_000);
            let view = service.get_state(reg.user_id)?;
            println!("Stocked 2 minutes into the event:");
            for (resource, amount) in &view.stocked_resources {
                if *amount > 0 {
                    println!("  {}: +{}", resource, amount);
                }
            }
        }
        TriggerOutcome::NoneEligible { next_eligible_in_ms } => {
            println!("\nNo event eligible; next in {}ms", next_eligible_in_ms);
        }
    }

    println!("\n=== Simulation Complete ===");
    Ok(())
}

fn advance(service: &GameService<ManualClock, starstation_service::StoreAuth>, ms: i64) {
    service.clock().advance(ms);
    println!("\n... {} seconds pass ...", ms / 1000);
}

fn print_balances(
    label: &str,
    service: &GameService<ManualClock, starstation_service::StoreAuth>,
    user_id: starstation_core::UserId,
) -> Result<(), starstation_service::Error> {
    let view = service.get_state(user_id)?;
    println!("{}:", label);
    for (resource, amount) in &view.resources {
        println!("  {}: {}", resource, amount);
    }
    Ok(())
}
