//! Seed data script - populates the monitor tables with deterministic sample rows
//!
//! Run with: cargo run --bin seed-data -- --seed 42
//!
//! This creates:
//! - putwall rows covering every cubby bucket
//! - replenishment tasks spread over six pack lanes and every priority range
//! - unit-sort containers, some with allocation issues, plus their pick lines

use clap::Parser;
use tracing::info;

use fulfillment_monitor::{
    config::{self, AppConfig},
    db,
    seed::{self, SeedPlan},
};

#[derive(Parser, Debug)]
#[command(
    name = "seed-data",
    about = "Populate the fulfillment monitor database with sample rows"
)]
struct Cli {
    #[arg(long, help = "Database URL; defaults to the loaded configuration")]
    database_url: Option<String>,

    #[arg(long, default_value_t = 42, help = "RNG seed; equal seeds give equal rows")]
    seed: u64,

    #[arg(long, default_value_t = 120, help = "Number of putwall cubbies")]
    cubbies: usize,

    #[arg(long, default_value_t = 300, help = "Number of replenishment tasks")]
    tasks: usize,

    #[arg(long, default_value_t = 80, help = "Number of unit-sort containers")]
    containers: usize,

    #[arg(long, help = "Delete existing rows before inserting")]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings: AppConfig = config::load_config()?;
    config::init_tracing(settings.log_level(), false);

    info!("=== Fulfillment Monitor Seed Data ===");

    if let Some(url) = cli.database_url {
        settings.database_url = url;
    }

    info!("Connecting to database: {}", settings.database_url);
    let pool = db::establish_connection_from_app_config(&settings).await?;
    db::run_migrations(&pool).await?;

    if cli.reset {
        info!("Clearing existing rows...");
        seed::clear_tables(&pool).await?;
    }

    let plan = SeedPlan {
        seed: cli.seed,
        cubbies: cli.cubbies,
        replenishment_tasks: cli.tasks,
        containers: cli.containers,
    };
    let report = seed::seed_database(&pool, &plan).await?;

    info!("  Inserted {} putwall rows", report.putwall);
    info!("  Inserted {} replenishment tasks", report.replenishment);
    info!("  Inserted {} unit-sort containers", report.unitsort);
    info!("  Inserted {} pick lines", report.pick_details);

    info!("=== Seed Data Complete ===");
    info!("Try these API calls:");
    info!("  curl http://localhost:{}/api/putwall/summary", settings.port);
    info!("  curl http://localhost:{}/api/replenishment/summaryByPriority", settings.port);
    info!("  curl 'http://localhost:{}/api/unitsort/issues?min_replen=1'", settings.port);
    info!("Or explore interactively at: http://localhost:{}/swagger-ui", settings.port);

    db::close_pool(pool).await?;
    Ok(())
}
