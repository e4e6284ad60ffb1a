//! Demo walkthrough commands

use crate::output::format_demo_frame;
use anyhow::Result;
use colored::Colorize;
use nexa_site_core::demo::{AdvanceOutcome, DemoDefinition, IgnoreReason};
use nexa_site_core::view::MemoryStepView;
use nexa_site_core::{DemoCatalog, DemoController, SiteConfig};
use std::time::Duration;
use tracing::{debug, info};

/// Interval at which chained transitions are polled
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// List the available demos
pub async fn demos_command(config: SiteConfig) -> Result<()> {
    let catalog = DemoCatalog::builtin(&config)?;

    println!("{}", "Available demos:".bold());
    for demo in catalog.iter() {
        let delays: Vec<String> = demo
            .pacing()
            .step_delays_ms
            .iter()
            .map(|ms| format!("{}ms", ms))
            .collect();
        println!(
            "  {:<20} {} ({} steps, delays: {})",
            demo.id.cyan(),
            demo.name,
            demo.total_steps(),
            delays.join(", ")
        );
    }

    Ok(())
}

/// Step through one demo from start to finish
pub async fn demo_command(demo_id: String, restart: bool, config: SiteConfig) -> Result<()> {
    let catalog = DemoCatalog::builtin(&config)?;
    let definition = catalog.require(&demo_id)?.clone();
    info!("Running demo: {}", definition.name);

    let controller = DemoController::new(definition, MemoryStepView::new());
    walk_through(&controller).await?;

    if restart {
        controller.restart().await;
        print_frame(&controller, "restart").await;
    }

    Ok(())
}

/// Press every action control until the final step is reached
pub async fn walk_through(controller: &DemoController<MemoryStepView>) -> Result<()> {
    print_frame(controller, "initial").await;
    let mut shown_step = 1;

    loop {
        let finished = match controller.advance().await {
            AdvanceOutcome::Completed { step } => {
                debug!(step, "advanced without latency");
                false
            }
            AdvanceOutcome::Scheduled(task) => {
                print_frame(controller, "processing").await;
                task.wait().await;
                false
            }
            // A chained transition is still running
            AdvanceOutcome::Ignored(IgnoreReason::Busy) => {
                tokio::time::sleep(POLL_INTERVAL).await;
                false
            }
            AdvanceOutcome::Ignored(IgnoreReason::FinalStep) => true,
        };

        let state = controller.state().await;
        if !state.busy && state.current_step != shown_step {
            shown_step = state.current_step;
            let label = format!("step {}/{}", state.current_step, state.total_steps);
            print_frame(controller, &label).await;
        }

        if finished {
            break;
        }
    }

    Ok(())
}

async fn print_frame(controller: &DemoController<MemoryStepView>, label: &str) {
    let definition: &DemoDefinition = controller.definition();
    let frame = controller
        .inspect(|view| format_demo_frame(definition, view))
        .await;
    println!("{} {}", format!("── {} ", definition.name).bold(), label.dimmed());
    println!("{}", frame);
}
