mod dynamodb;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tally_core::config::GlobalConfig;
use tally_core::planning::{
    Planner, PlannerSettings, DEFAULT_READ_CAPACITY, DEFAULT_WRITE_UNITS_PER_ROW,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::dynamodb::{DynamoDbTableBackend, ProvisionTarget};

/// Tally - Provision hourly analytics tables for every configured breakdown
#[derive(Parser, Debug)]
#[command(name = "tally-provision")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the breakdown configuration file
    #[arg(long, short, default_value = "config.json", env = "TALLY_CONFIG")]
    config: PathBuf,

    /// Read capacity units requested for every table
    #[arg(
        long,
        default_value_t = DEFAULT_READ_CAPACITY,
        value_parser = clap::value_parser!(i64).range(1..),
        env = "TALLY_READ_CAPACITY"
    )]
    read_capacity: i64,

    /// Write capacity units per row written per event
    #[arg(
        long,
        default_value_t = DEFAULT_WRITE_UNITS_PER_ROW,
        value_parser = clap::value_parser!(i64).range(1..),
        env = "TALLY_WRITE_UNITS_PER_ROW"
    )]
    write_units_per_row: i64,

    /// AWS region
    #[arg(long, default_value = "us-east-1", env = "AWS_REGION")]
    region: String,

    /// Custom endpoint URL (e.g. http://localhost:8000 for local DynamoDB)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Print the table plans without creating anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn planner_settings(&self) -> PlannerSettings {
        PlannerSettings::default()
            .with_read_capacity(self.read_capacity)
            .with_write_units_per_row(self.write_units_per_row)
    }

    fn target(&self) -> ProvisionTarget {
        ProvisionTarget::new(&self.region, self.endpoint_url.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally_provision=info,tally_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GlobalConfig::load(&cli.config)?;
    let planner = Planner::new(cli.planner_settings());

    if cli.dry_run {
        output::print_plans(&planner.plans(&config));
        return Ok(());
    }

    let target = cli.target();
    tracing::info!(
        breakdowns = config.breakdowns.len(),
        "Provisioning tables on {}",
        target.display()
    );

    let client = dynamodb::create_client(&target).await;
    let backend = DynamoDbTableBackend::new(client);
    planner.provision(&config, &backend).await?;

    Ok(())
}
