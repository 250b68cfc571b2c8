//! schemadoc CLI - generate schema documentation from a database catalog.
//!
//! Usage:
//!   schemadoc html <schema> [--out <dir>] [--sqlite <file> | --snapshot <file>]
//!
//! Examples:
//!   schemadoc html app_production --sqlite ./app.db
//!   schemadoc html app_production --snapshot ./catalog.json --out docs/schema

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use schemadoc::catalog::{CatalogReader, SnapshotCatalog, SqliteCatalog};
use schemadoc::config::Config;
use schemadoc::render::{HtmlRenderer, Renderer};
use schemadoc::{output, pipeline, DocError, RunOptions};

#[derive(Parser)]
#[command(name = "schemadoc")]
#[command(about = "Generate cross-referenced schema documentation from a database catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate HTML documentation for a schema
    Html {
        /// Schema (database) name to document
        schema: Option<String>,

        /// Output directory (removed and recreated)
        #[arg(short, long, default_value = "schemadoc-out")]
        out: PathBuf,

        /// SQLite database file to introspect
        #[arg(long, conflicts_with = "snapshot")]
        sqlite: Option<String>,

        /// JSON catalog snapshot to read instead of a live database
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Config file (default: ./schemadoc.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Html {
            schema,
            out,
            sqlite,
            snapshot,
            config,
        } => cmd_html(schema, out, sqlite, snapshot, config),
    }
}

fn cmd_html(
    schema: Option<String>,
    out: PathBuf,
    sqlite: Option<String>,
    snapshot: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> ExitCode {
    let Some(schema) = schema else {
        eprintln!("Error: {}", DocError::Usage);
        eprintln!();
        eprintln!("Usage: schemadoc html <schema> [--out <dir>] [--sqlite <file> | --snapshot <file>]");
        return ExitCode::from(DocError::Usage.exit_code());
    };

    let config = match config_path {
        Some(path) => Config::load(&path),
        None => Config::load_default(),
    };
    let config = match config {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = match RunOptions::from_config(&config) {
        Ok(o) => o,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config_snapshot = match config.snapshot_path() {
        Ok(path) => path.map(PathBuf::from),
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config_sqlite = match config.sqlite_path() {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let snapshot = snapshot.or(config_snapshot);
    let sqlite = sqlite.or(config_sqlite);
    let reader = match build_reader(sqlite, snapshot) {
        Ok(Some(reader)) => reader,
        Ok(None) => {
            eprintln!(
                "Error: no catalog source; pass --sqlite/--snapshot or set [database] in schemadoc.toml"
            );
            return ExitCode::from(DocError::Usage.exit_code());
        }
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    // Build the full document set before touching the output directory:
    // a failed run leaves the previous documentation in place.
    let docs = match pipeline::run(reader.as_ref(), &options, &schema) {
        Ok(docs) => docs,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };

    let pages = HtmlRenderer.render(&docs);
    let result = output::prepare_dir(&out).and_then(|()| output::write_pages(&out, &pages));
    if let Err(err) = result {
        eprintln!("Error: {err}");
        return ExitCode::from(err.exit_code());
    }

    println!(
        "Generated documentation for \"{}\" in \"{}\"",
        schema,
        out.display()
    );
    ExitCode::SUCCESS
}

/// Pick the catalog source. Snapshot wins when both are supplied by config.
fn build_reader(
    sqlite: Option<String>,
    snapshot: Option<PathBuf>,
) -> Result<Option<Box<dyn CatalogReader>>, DocError> {
    if let Some(path) = snapshot {
        return Ok(Some(Box::new(SnapshotCatalog::from_path(&path)?)));
    }
    if let Some(path) = sqlite {
        return Ok(Some(Box::new(SqliteCatalog::open(&path)?)));
    }
    Ok(None)
}
