//! NEC Review CLI
//!
//! Terminal front-end over the file-backed document store:
//!
//! - Library, document summary and check review screens
//! - Uploading diagrams to the analysis service
//! - Importing existing analyses by id

use std::path::PathBuf;

use analysis_client::{GatewayClient, Uploader};
use anyhow::Context;
use clap::{Parser, Subcommand};
use review_core::{CheckFilter, DocumentStore, FileStorage};
use tracing::{debug, info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use commands::{parse_filter, ReviewRequest, Step};
use config::AppConfig;

/// Command-line arguments for the NEC review CLI
#[derive(Parser, Debug)]
#[command(name = "nec-review")]
#[command(about = "Review NEC compliance analyses of electrical diagrams")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory documents are stored in
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Analysis service base URL
    #[arg(long)]
    gateway_url: Option<String>,

    /// NEC edition to check against
    #[arg(long)]
    nec_version: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the document library
    List,

    /// Show one document's summary
    Show {
        id: String,

        /// all, fail, warning, pass or not_applicable
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: CheckFilter,
    },

    /// Walk through a document's checks
    Review {
        id: String,

        /// Check to start on
        #[arg(long)]
        check: Option<String>,

        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: CheckFilter,

        /// Navigation steps applied in order
        #[arg(long, value_enum, num_args = 1..)]
        step: Vec<Step>,

        /// Open the detail view of the active check
        #[arg(long)]
        detail: bool,
    },

    /// Render the screen a route path points at, e.g. /documents/5/review?check=rc4
    Open { path: String },

    /// Submit a diagram (PDF, PNG or JPG) for analysis
    Upload { file: PathBuf },

    /// Import a completed analysis by id
    Fetch {
        analysis_id: String,

        /// Name to file the document under
        #[arg(long)]
        filename: Option<String>,
    },

    /// Check that the analysis service is up
    Health,

    /// Load the sample documents into an empty store
    Seed,

    /// Remove every stored document
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AppConfig::load(args.config.as_deref())?;
    config.apply_env();
    if let Some(url) = args.gateway_url {
        config.gateway.url = url;
    }
    if let Some(version) = args.nec_version {
        config.gateway.nec_version = version;
    }
    if let Some(dir) = args.data_dir {
        config.storage.data_dir = Some(dir);
    }

    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    debug!("Using data directory {}", data_dir.display());

    let mut store = DocumentStore::load(FileStorage::new(&data_dir));

    let output = match args.command {
        Command::List => commands::list(&store),
        Command::Show { id, filter } => commands::show(&store, &id, filter),
        Command::Review {
            id,
            check,
            filter,
            step,
            detail,
        } => commands::review(
            &store,
            &id,
            &ReviewRequest {
                check,
                filter,
                steps: step,
                detail,
            },
        ),
        Command::Open { path } => commands::open(&store, &path)?,
        Command::Upload { file } => {
            let uploader = Uploader::new(GatewayClient::new(config.gateway_config()));
            let upload = uploader.select_file(&file)?;
            info!("Uploading {} to {}", upload.filename, config.gateway.url);
            let id = uploader.upload(&mut store, &upload).await?;
            commands::show(&store, &id, CheckFilter::All)
        }
        Command::Fetch {
            analysis_id,
            filename,
        } => {
            let uploader = Uploader::new(GatewayClient::new(config.gateway_config()));
            let filename = filename.unwrap_or_else(|| format!("{}.pdf", analysis_id));
            let id = uploader
                .import(&mut store, &analysis_id, &filename)
                .await?;
            commands::show(&store, &id, CheckFilter::All)
        }
        Command::Health => {
            let client = GatewayClient::new(config.gateway_config());
            let health = client
                .health()
                .await
                .with_context(|| format!("Health check against {} failed", config.gateway.url))?;
            format!("{} {}: {}", health.service, health.version, health.status)
        }
        Command::Seed => commands::seed(&mut store),
        Command::Clear => commands::clear(&mut store),
    };

    println!("{}", output);
    Ok(())
}
