//! Benchstore
//!
//! Saves benchmark run files to Elasticsearch and reads runs back.

use benchstore::{Cli, Command, StoreConfig, commands, init_logging};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(errors) = cli.store.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    run(cli.store, cli.command).await
}

/// Connects to Elasticsearch, making sure the index exists, and runs the command.
#[cfg(feature = "elasticsearch")]
async fn run(store: StoreConfig, command: Command) -> anyhow::Result<()> {
    use benchstore_persistence::backends::elasticsearch::ElasticsearchStorage;

    let config = store.elasticsearch_config();
    let storage = match command {
        // Health checks must not create the index.
        Command::Health => ElasticsearchStorage::new(config)?,
        _ => ElasticsearchStorage::connect(config).await?,
    };
    info!(
        location = %storage.location(),
        index = %storage.index(),
        "Using Elasticsearch storage"
    );

    let mut out = std::io::stdout().lock();
    match command {
        Command::Init => commands::init(&storage, &mut out).await,
        Command::Health => commands::health(&storage, &mut out).await,
        Command::Save { file, name } => {
            commands::save(&storage, &file, name.as_deref(), &mut out).await
        }
        Command::List { project } => commands::list(&storage, &project, &mut out).await,
        Command::Show { project, id_prefix } => {
            commands::show(&storage, &project, id_prefix.as_deref(), &mut out).await
        }
        Command::Benchmarks { project } => {
            commands::benchmarks(&storage, &project, &mut out).await
        }
    }
}

/// Fallback when the elasticsearch feature is not enabled.
#[cfg(not(feature = "elasticsearch"))]
async fn run(_store: StoreConfig, command: Command) -> anyhow::Result<()> {
    info!(?command, "Storage backend unavailable");
    anyhow::bail!(
        "The Elasticsearch storage requires the 'elasticsearch' feature. \
         Build with: cargo build -p benchstore --features elasticsearch"
    )
}
