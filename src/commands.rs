//! Subcommand implementations.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use devteam_core::api::{TeamCoordinator, TeamCoordinatorBuilder};
use devteam_core::config::Settings;
use devteam_core::models::{model_stats, ModelRegistry};

use crate::cli::RunArgs;
use crate::render::{format_catalog, format_event, format_feed_stats, format_status};

/// Run a simulation and stream the feed until the team is done, the
/// duration elapses, or Ctrl-C is pressed.
pub async fn run(settings: Settings, args: RunArgs) -> Result<()> {
    let coordinator = TeamCoordinatorBuilder::new(settings).build();
    coordinator
        .configure_team(args.team_size as usize)
        .context("Failed to configure team")?;
    coordinator
        .assign_project(&args.project, &args.description)
        .context("Failed to assign project")?;

    let mut events = coordinator.subscribe();
    let tasks = coordinator
        .start_development()
        .context("Failed to start development")?;
    println!(
        "Distributed {} tasks across {} developers",
        tasks.len(),
        coordinator.team_size()
    );

    let deadline = tokio::time::sleep(Duration::from_secs(args.duration));
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            _ = &mut deadline => {
                info!("Time limit reached");
                break;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
            event = events.recv() => match event {
                Ok(event) => {
                    println!("{}", format_event(&event, Utc::now()));
                    if all_idle(&coordinator) {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Feed output lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    coordinator.stop_development();
    let status = coordinator.team_status();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print!("{}", format_status(&status));
        println!("{}", format_feed_stats(&coordinator.feed().stats(Utc::now())));
    }
    Ok(())
}

fn all_idle(coordinator: &TeamCoordinator) -> bool {
    coordinator.team_status().active_workers == 0
}

/// Print the catalog grouped by provider plus totals
pub fn models(settings: &Settings) -> Result<()> {
    let coordinator = TeamCoordinatorBuilder::new(settings.clone()).build();
    print!("{}", format_catalog(&coordinator.models_by_provider()));

    let stats = model_stats();
    println!("\n{} models", stats.total_models);
    for (provider, count) in &stats.by_provider {
        println!("  {}: {}", provider, count);
    }
    Ok(())
}

/// Print the advisory recommendation list and the cheap models
pub fn recommend(settings: &Settings) -> Result<()> {
    let registry = ModelRegistry::from_settings(&settings.models);
    for rec in registry.recommendations() {
        println!(
            "{:<30} {:<12} {:<8} {}",
            rec.task,
            rec.category.to_string(),
            rec.complexity.to_string(),
            rec.model.name
        );
    }

    println!("\nCost-effective models:");
    for model in registry.cost_effective_models() {
        println!("  {} ({}, {})", model.name, model.provider, model.cost);
    }
    Ok(())
}

/// Validate the configured models; fails when issues are found
pub fn validate(settings: &Settings) -> Result<()> {
    let validation = ModelRegistry::validate_settings(&settings.models);
    if validation.valid {
        println!("Model configuration is valid");
        return Ok(());
    }
    for issue in &validation.issues {
        println!("  - {}", issue);
    }
    anyhow::bail!(
        "{} configuration issue(s): {}",
        validation.issues.len(),
        validation.issues.join("; ")
    )
}

/// Print the model configuration as JSON
pub fn export(settings: &Settings) -> Result<()> {
    let registry = ModelRegistry::from_settings(&settings.models);
    let json = registry
        .export_configuration()
        .context("Failed to export model configuration")?;
    println!("{}", json);
    Ok(())
}

/// Import a configuration file into a fresh registry and report the result
pub fn import(settings: &Settings, file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read configuration file: {:?}", file))?;

    let coordinator = TeamCoordinatorBuilder::new(settings.clone()).build();
    coordinator
        .import_configuration(&text)
        .with_context(|| format!("Failed to import configuration: {:?}", file))?;

    let config = coordinator.model_configuration();
    for (specialization, model) in &config.resolved {
        println!("  {:<10} {}", specialization.to_string(), model.name);
    }
    for issue in &config.validation.issues {
        println!("  ! {}", issue);
    }
    Ok(())
}
