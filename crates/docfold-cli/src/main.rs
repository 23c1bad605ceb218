//! `docfold` — ingest document observations and print per-URL aggregates.
//!
//! # Usage
//!
//! ```text
//! docfold --db docs.sqlite ingest http://example.com/doc1 10 20 "First version"
//! docfold --db docs.sqlite show http://example.com/doc1 --json
//! docfold --config docfold.toml serve
//! ```

mod settings;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use docfold_core::{
  Processor,
  document::{AggregatedDocument, Observation},
};
use docfold_store_sqlite::SqliteStore;
use settings::Settings;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "docfold", version, about = "Versioned document store with per-URL aggregation")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, global = true, default_value = "docfold.toml")]
  config: PathBuf,

  /// Path to the SQLite database file; overrides `store_path` from config.
  #[arg(long, global = true, value_name = "PATH")]
  db: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Store one observation and print the URL's aggregate.
  Ingest {
    url:        String,
    /// Publication date reported by this fetch.
    pub_date:   i64,
    fetch_time: i64,
    text:       String,
    /// Earliest known sighting of the URL; defaults to `fetch_time`.
    #[arg(long)]
    first_fetch_time: Option<i64>,
    #[arg(long)]
    json: bool,
  },
  /// Print the current aggregate for a URL.
  Show {
    url: String,
    #[arg(long)]
    json: bool,
  },
  /// Serve the JSON HTTP API.
  Serve,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries only results.
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut settings = Settings::load(&cli.config)?;
  if let Some(db) = cli.db {
    settings.store_path = db;
  }

  let store = SqliteStore::open(&settings.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", settings.store_path))?;
  let processor = Processor::new(store);

  match cli.command {
    Command::Ingest { url, pub_date, fetch_time, text, first_fetch_time, json } => {
      let mut observation = Observation::new(url, pub_date, fetch_time, text);
      observation.first_fetch_time = first_fetch_time;

      let doc = processor
        .process(observation)
        .await
        .context("failed to process observation")?;
      tracing::info!(url = %doc.url, fetch_time = doc.fetch_time, "observation stored");
      println!("{}", render("Processed document", &doc, json)?);
    }
    Command::Show { url, json } => {
      let doc = processor
        .aggregate(&url)
        .await
        .with_context(|| format!("no aggregate for {url}"))?;
      println!("{}", render("Current document", &doc, json)?);
    }
    Command::Serve => serve(processor, &settings).await?,
  }

  Ok(())
}

async fn serve(processor: Processor<SqliteStore>, settings: &Settings) -> anyhow::Result<()> {
  if settings.is_in_memory() {
    tracing::warn!("serving an in-memory store; nothing will persist after shutdown");
  }

  let processor = Arc::new(processor);
  let app = docfold_api::api_router(processor.clone());
  let address = format!("{}:{}", settings.host, settings.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(async {
      tokio::signal::ctrl_c().await.ok();
    })
    .await
    .context("server error")?;

  drop(processor);
  tracing::info!("store closed");
  Ok(())
}

fn render(label: &str, doc: &AggregatedDocument, json: bool) -> anyhow::Result<String> {
  if json {
    Ok(serde_json::to_string_pretty(doc)?)
  } else {
    Ok(format!("{label}: {doc}"))
  }
}
