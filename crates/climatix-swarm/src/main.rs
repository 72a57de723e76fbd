//! Climatix Binary
//!
//! Optimizes the HVAC control level for the configured scenario and prints
//! the run report as JSON.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use climatix_common::VERSION;
use climatix_fuzzy::FuzzyController;
use climatix_swarm::{ClimatixSettings, HvacObjective, Swarm};

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting Climatix v{}", VERSION);

    let settings = ClimatixSettings::load()?;
    info!("Loaded settings: {:?}", settings);

    let controller = FuzzyController::hvac();
    let objective = HvacObjective::with_recommender(settings.scenario.clone(), &controller)?;
    if let Some(level) = objective.recommendation() {
        info!(level, "Fuzzy rule base recommendation");
    }

    let mut swarm = Swarm::new(settings.bounds.clone(), settings.swarm.clone(), objective)?;
    let report = swarm.run();

    match report.best() {
        Some(best) => info!(
            "Optimal HVAC setting: {:?}, cost: {:.4}",
            best.position, best.value
        ),
        None => warn!("No feasible HVAC setting found"),
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
