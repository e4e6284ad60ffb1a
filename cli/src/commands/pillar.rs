//! Pillar overlay commands

use super::demo::walk_through;
use crate::output::TerminalModalView;
use anyhow::{anyhow, Result};
use colored::Colorize;
use nexa_site_core::demo::catalog::SUPPLY_CHAIN;
use nexa_site_core::pillar::PillarDemoAction;
use nexa_site_core::view::MemoryStepView;
use nexa_site_core::{DemoCatalog, DemoController, PillarCatalog, PillarModalPresenter, SiteConfig};
use std::sync::Arc;
use tracing::info;

/// List the pillars in page order
pub async fn pillars_command() -> Result<()> {
    let catalog = PillarCatalog::builtin()?;

    println!("{}", "Product pillars:".bold());
    for record in catalog.iter() {
        let demo = record
            .demo
            .as_ref()
            .map(|demo| format!(" [{}]", demo.label))
            .unwrap_or_default();
        println!(
            "  {:<10} {} - {}{}",
            record.id.cyan(),
            record.title,
            record.subtitle.dimmed(),
            demo
        );
    }

    Ok(())
}

/// Open the overlay for one pillar, optionally pressing its demo button
pub async fn pillar_command(pillar_id: String, launch_demo: bool, config: SiteConfig) -> Result<()> {
    let catalog = Arc::new(PillarCatalog::builtin()?);
    let mut presenter = PillarModalPresenter::new(catalog, TerminalModalView::default());

    if !presenter.present(&pillar_id) {
        return Err(anyhow!("Unknown pillar: {}", pillar_id));
    }

    if !launch_demo {
        return Ok(());
    }

    match presenter.activate_demo() {
        Some(PillarDemoAction::SupplyDemo) => {
            info!("Launching supply chain demo");
            let demos = DemoCatalog::builtin(&config)?;
            let definition = demos.require(SUPPLY_CHAIN)?.clone();
            let controller = DemoController::new(definition, MemoryStepView::new());
            // Every launch starts from the first step
            controller.reset().await;
            walk_through(&controller).await?;
        }
        Some(PillarDemoAction::FieldVideo) => {
            println!("{}", "▶ Playing NEXA Field demo video".cyan());
        }
        Some(PillarDemoAction::InsightsDashboard) => {
            println!("{}", "▶ Opening NEXA Insights dashboard".cyan());
        }
        None => {
            println!("{}", format!("{} has no demo", pillar_id).dimmed());
        }
    }

    Ok(())
}
