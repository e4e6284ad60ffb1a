//! # nexa CLI
//!
//! Terminal harness for the Nexa site widgets.
//!
//! ## Usage
//!
//! - `nexa demos` - List the product demos
//! - `nexa demo job-package` - Step through a demo
//! - `nexa pillars` - List the product pillars
//! - `nexa pillar vault` - Show a pillar overlay
//! - `nexa contact --name .. --email .. --message ..` - Submit the contact form
//! - `nexa count 500+` - Preview a stat counter

use anyhow::Result;
use clap::{Parser, Subcommand};
use nexa_site_core::contact::ContactForm;
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use commands::{
    contact_command, count_command, demo_command, demos_command, pillar_command, pillars_command,
};
use config::SiteConfigLoader;

/// nexa - Nexa site demos, pillars and contact form in the terminal
#[derive(Parser)]
#[command(name = "nexa")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Drive the Nexa site widgets from the terminal")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip every simulated delay (same as NEXA_INSTANT_DEMOS=1)
    #[arg(long)]
    instant: bool,

    /// Notification duration override in milliseconds
    #[arg(long)]
    notification_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product demos
    Demos,

    /// Step through one demo
    Demo {
        /// Demo id (job-package, compliance, crew-scheduling, underground-design, supply-chain)
        id: String,

        /// Restart the demo after reaching the final step
        #[arg(long)]
        restart: bool,
    },

    /// List the product pillars
    Pillars,

    /// Show the overlay for one pillar
    Pillar {
        /// Pillar id as used by the page markup
        id: String,

        /// Press the overlay's demo button
        #[arg(long)]
        launch_demo: bool,
    },

    /// Submit the contact form
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        service: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    /// Preview the stat counter animation
    Count {
        /// Target as written in the markup, e.g. "500+"
        target: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> SiteConfigLoader {
    let mut loader = SiteConfigLoader::new().with_instant_override(cli.instant);

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(ms) = cli.notification_ms {
        loader = loader.with_notification_ms_override(ms);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = build_config_loader(&cli).load().await?;

    match cli.command {
        Commands::Demos => demos_command(config).await,
        Commands::Demo { id, restart } => demo_command(id, restart, config).await,
        Commands::Pillars => pillars_command().await,
        Commands::Pillar { id, launch_demo } => pillar_command(id, launch_demo, config).await,
        Commands::Contact {
            name,
            email,
            service,
            message,
        } => contact_command(ContactForm::new(name, email, service, message), config).await,
        Commands::Count { target } => count_command(target, config).await,
    }
}
