use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use modwarden::catalog::json::JsonCatalogStore;
use modwarden::catalog::store::CatalogStore;
use modwarden::catalog::types::Loader;
use modwarden::config::{self, CheckerConfig};
use modwarden::update::UpdateChecker;
use modwarden::update::registries::ModrinthRegistry;

#[derive(Parser)]
#[command(name = "modwarden")]
#[command(version, about = "Update checker for server-side Minecraft mod installations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check every cataloged mod for compatible updates
    Check {
        /// Path to the mod catalog JSON file
        #[arg(long)]
        catalog: PathBuf,

        /// Override the catalog's target game version
        #[arg(long)]
        game_version: Option<String>,

        /// Override the catalog's target loader (fabric/forge/quilt/neoforge)
        #[arg(long)]
        loader: Option<String>,

        /// Mods checked concurrently per batch
        #[arg(long)]
        batch_size: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            catalog,
            game_version,
            loader,
            batch_size,
        } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_check(catalog, game_version, loader, batch_size)),
    }
}

async fn run_check(
    catalog_path: PathBuf,
    game_version: Option<String>,
    loader: Option<String>,
    batch_size: Option<usize>,
) -> anyhow::Result<()> {
    // The guard flushes buffered log lines on drop, so it lives for the
    // whole check cycle.
    let _log_guard = init_logging()?;

    let mut cfg = CheckerConfig::default();
    if let Some(batch_size) = batch_size {
        cfg.batch_size = batch_size;
    }

    let store = JsonCatalogStore::new(&catalog_path);
    let mut catalog = store.load()?;
    if let Some(game_version) = game_version {
        catalog.target.game_version = game_version;
    }
    if let Some(loader) = loader {
        catalog.target.loader = Some(
            loader
                .parse::<Loader>()
                .map_err(|_| anyhow::anyhow!("unknown loader: {loader}"))?,
        );
    }

    let registry = ModrinthRegistry::with_timeout(
        modwarden::update::registries::modrinth::DEFAULT_BASE_URL,
        cfg.fetch_timeout(),
    );
    let checker = UpdateChecker::new(registry, &cfg);

    let results = checker.check_all(&catalog.mods, &catalog.target).await;
    let report = modwarden::update::UpdateReport::new(results);

    info!(
        "Check complete: {} updatable, {} up to date, {} failed",
        report.summary.has_updates, report.summary.up_to_date, report.summary.errors
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let data_dir = config::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let file_appender = tracing_appender::rolling::never(&data_dir, "modwarden.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
