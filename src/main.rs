//! Resumes CLI - Command-line interface over the SQLite resume storage

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use resumes::config::ResumesConfig;
use resumes::ui;
use resumes::{Resume, Storage};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "resumes")]
#[command(version)]
#[command(about = "Store and query resumes in a SQLite database")]
#[command(long_about = r#"
Resumes keeps resume records (contacts and sections) in SQLite.

Example usage:
  resumes init
  resumes new --name "Grigory Kislin"
  resumes save --file resume.json
  resumes list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and its schema
    Init,

    /// Create an empty resume with a fresh identifier
    New {
        /// Full name
        #[arg(short, long)]
        name: String,
    },

    /// Save a new resume from a JSON file
    Save {
        /// Resume JSON document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Replace an existing resume from a JSON file
    Update {
        /// Resume JSON document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show one resume
    Get {
        /// Resume identifier
        #[arg(short, long)]
        uuid: String,
    },

    /// Delete one resume
    Delete {
        /// Resume identifier
        #[arg(short, long)]
        uuid: String,
    },

    /// List all resumes sorted by full name
    List,

    /// Count stored resumes
    Size,

    /// Delete every resume
    Clear,
}

fn read_resume(path: &Path) -> anyhow::Result<Resume> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let file_config = ResumesConfig::load(cli.config.as_deref())?;
    let (database, mut store) =
        file_config.open_storage(cli.database, &std::env::current_dir()?)?;
    tracing::debug!("Using database {:?}", database);

    match cli.command {
        Commands::Init => {
            tracing::info!("Database ready at {:?}", database);
        }

        Commands::New { name } => {
            let resume = Resume::new(name);
            store.save(&resume)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resume)?);
            } else {
                println!("{}", resume.uuid());
            }
        }

        Commands::Save { file } => {
            let resume = read_resume(&file)?;
            store.save(&resume)?;
            tracing::info!("Saved {}", resume.uuid());
        }

        Commands::Update { file } => {
            let resume = read_resume(&file)?;
            store.update(&resume)?;
            tracing::info!("Updated {}", resume.uuid());
        }

        Commands::Get { uuid } => {
            let resume = store.get(&uuid)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&resume)?);
            } else {
                print!("{}", ui::describe(&resume));
            }
        }

        Commands::Delete { uuid } => {
            store.delete(&uuid)?;
            tracing::info!("Deleted {}", uuid);
        }

        Commands::List => {
            let all = store.get_all_sorted()?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else if all.is_empty() {
                println!("No resumes stored.");
            } else {
                println!("{}", ui::resume_table(&all));
            }
        }

        Commands::Size => {
            let size = store.size()?;
            if cli.json {
                println!("{}", serde_json::json!({ "size": size }));
            } else {
                println!("{}", size);
            }
        }

        Commands::Clear => {
            store.clear()?;
            tracing::info!("Cleared all resumes");
        }
    }

    Ok(())
}
