//! Find the nearest hospital with the default collaborators.
//!
//! Run with: cargo run -p hospital-locator --example find_nearest
//! Or skip geolocation: cargo run -p hospital-locator --example find_nearest -- 51.5074 -0.1278
//!
//! Reads the LOCATOR_*, OVERPASS_* and IPGEO_* variables, e.g. from .env.
//! Set RUST_LOG=hospital_locator=debug to follow the phases.

use hospital_locator::{Coordinate, MapOverlay, NearestFacilityResolver, ResolveOutcome};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let resolver = NearestFacilityResolver::from_env()?;
    println!(
        "Fallback: {}, radius: {} m\n",
        resolver.config().fallback_position,
        resolver.config().radius_meters
    );

    let args: Vec<String> = env::args().collect();
    let outcome = if args.len() > 2 {
        let center = Coordinate::new(args[1].parse()?, args[2].parse()?)?;
        resolver.resolve(center).await
    } else {
        resolver.locate_and_resolve().await
    };

    match &outcome {
        ResolveOutcome::Resolved {
            facility_count,
            nearest: Some(facility),
            distance: Some(meters),
        } => println!(
            "Nearest of {} hospitals: {} ({} away)",
            facility_count, facility.name, meters
        ),
        ResolveOutcome::Resolved { .. } => println!("No hospitals in range"),
        ResolveOutcome::LocationFailed(failure) => println!("Location unavailable: {}", failure),
        ResolveOutcome::QueryFailed(failure) => println!("Hospital search failed: {}", failure),
        ResolveOutcome::Superseded => println!("Superseded by a newer request"),
    }
    println!("Phase: {}\n", resolver.phase());

    let overlay = MapOverlay::from_snapshot(&resolver.snapshot());
    println!("{}", serde_json::to_string_pretty(&overlay)?);

    Ok(())
}
