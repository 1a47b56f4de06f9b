//! Query hospitals around a coordinate with OverpassClient.
//!
//! Run with: cargo run -p overpass-facilities --example query_hospitals
//! Or with a custom center: cargo run -p overpass-facilities --example query_hospitals -- 51.5074 -0.1278
//!
//! Optional environment variables (see OverpassConfig::from_env), e.g. in .env:
//!   OVERPASS_API_URL - alternative interpreter instance
//!   OVERPASS_INCLUDE_AREAS - also match hospitals mapped as buildings/areas

use overpass_facilities::{Coordinate, FacilityQueryClient, OverpassClient};
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

    let args: Vec<String> = env::args().collect();
    let center = if args.len() > 2 {
        Coordinate::new(args[1].parse()?, args[2].parse()?)?
    } else {
        Coordinate::new(12.9716, 77.5946)?
    };

    let client = OverpassClient::from_env()?;
    println!("Endpoint: {}", client.config().api_url);
    println!("Searching 5 km around {}...\n", center);

    let hospitals = client.query(center, 5000.0).await?;

    println!("=== {} hospitals ===", hospitals.len());
    for hospital in &hospitals {
        println!("{:<40} {}", hospital.name, hospital.position);
    }

    Ok(())
}
