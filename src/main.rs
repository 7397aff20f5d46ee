//! Plantwatch CLI
//!
//! Command-line interface for the plant-monitoring backend:
//! - Show the dashboard and plant details
//! - Add, edit and delete plants
//! - Log moisture readings
//! - Export a plant's reading history

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plantwatch::client::flows::{self, DeleteOutcome, SubmitError};
use plantwatch::client::PlantClient;
use plantwatch::config::{self, Config, LoggingConfig};
use plantwatch::views::dashboard::delete_prompt;
use plantwatch::views::{FormMode, PlantForm, ReadingForm, StatusFilter};
use plantwatch::render;

#[derive(Parser)]
#[command(name = "plantwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plant moisture monitoring from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config and PLANTWATCH_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/plantwatch/config.toml, ./plantwatch.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    /// Only meaningful for `history`
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the status summary and plant table
    Dashboard {
        /// Case-insensitive search on name and species
        #[arg(short, long, default_value = "")]
        search: String,
        /// Status filter (all, ok, needs_water, overwatered, no_data)
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Show one plant with its reading history
    Show {
        /// Plant ID
        id: i64,
    },

    /// Add a plant
    AddPlant {
        /// Plant name (at least 3 characters)
        #[arg(short, long)]
        name: String,
        /// Species (default: Unknown)
        #[arg(short, long, default_value = "")]
        species: String,
        /// Ideal minimum moisture %
        #[arg(long, default_value = "30")]
        min: i32,
        /// Ideal maximum moisture %
        #[arg(long, default_value = "60")]
        max: i32,
    },

    /// Edit a plant; omitted fields keep their current value
    EditPlant {
        /// Plant ID
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        species: Option<String>,
        #[arg(long)]
        min: Option<i32>,
        #[arg(long)]
        max: Option<i32>,
    },

    /// Delete a plant
    DeletePlant {
        /// Plant ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Log a moisture reading
    LogReading {
        /// Moisture percentage (0-100)
        moisture: String,
        /// Plant ID
        #[arg(short, long)]
        plant: Option<i64>,
    },

    /// Print a plant's reading history
    History {
        /// Plant ID
        id: i64,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Plantwatch v{}", env!("CARGO_PKG_VERSION"));

    let client = PlantClient::new(&config.api).context("Failed to build HTTP client")?;
    let policy = config.api.status_policy;

    match cli.command {
        Commands::Dashboard { search, status } => {
            let mut view = flows::load_dashboard(&client, policy)
                .await
                .with_context(|| format!("Cannot load dashboard from {}", client.base_url()))?;
            view.set_search(&search);
            view.set_status_filter(StatusFilter::from_value(&status));

            match cli.format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "summary": view.summary(),
                        "plants": view.rows(Utc::now()),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                _ => print!("{}", render::dashboard(&view, Utc::now())),
            }
        }

        Commands::Show { id } => {
            let details = flows::load_details(&client, id)
                .await
                .context(plantwatch::views::details::LOAD_FAILED_MESSAGE)?;

            match cli.format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "plant": details.plant(),
                        "status": details.status(),
                        "history": details.history(),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                _ => print!("{}", render::details(&details, Utc::now())),
            }
        }

        Commands::AddPlant {
            name,
            species,
            min,
            max,
        } => {
            let form = PlantForm {
                name,
                species,
                ideal_moisture_min: min,
                ideal_moisture_max: max,
            };
            save_plant(&client, FormMode::Create, &form).await?;
        }

        Commands::EditPlant {
            id,
            name,
            species,
            min,
            max,
        } => {
            let mut form = flows::load_plant_form(&client, id)
                .await
                .with_context(|| format!("Could not load plant {}", id))?;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(species) = species {
                form.species = species;
            }
            if let Some(min) = min {
                form.ideal_moisture_min = min;
            }
            if let Some(max) = max {
                form.ideal_moisture_max = max;
            }
            save_plant(&client, FormMode::Edit(id), &form).await?;
        }

        Commands::DeletePlant { id, yes } => {
            let mut view = flows::load_dashboard(&client, policy)
                .await
                .context("Cannot load plant list")?;

            let outcome = flows::delete_plant(&client, &mut view, id, |plant| {
                yes || confirm(&delete_prompt(plant))
            })
            .await
            .context("Failed to delete plant. Please try again.")?;

            match outcome {
                DeleteOutcome::Deleted(plant) => {
                    println!("Deleted \"{}\" ({} plants left)", plant.name, view.plants().len())
                }
                DeleteOutcome::Cancelled => println!("Cancelled"),
                DeleteOutcome::NotListed => bail!("No plant with ID {}", id),
            }
        }

        Commands::LogReading { moisture, plant } => {
            let form = ReadingForm::new(plant, moisture);
            match flows::submit_reading(&client, &form, plant).await {
                Ok(next) => println!("Reading saved. Next: {}", next),
                Err(SubmitError::Invalid(errors)) => {
                    for message in errors.messages() {
                        eprintln!("{}", message);
                    }
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::History { id, output } => {
            let details = flows::load_details(&client, id)
                .await
                .context(plantwatch::views::details::LOAD_FAILED_MESSAGE)?;

            let mut sink: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    std::fs::File::create(path)
                        .with_context(|| format!("Cannot create {:?}", path))?,
                ),
                None => Box::new(std::io::stdout()),
            };

            match cli.format {
                OutputFormat::Csv => render::history_csv(&details, &mut sink)?,
                OutputFormat::Json => {
                    writeln!(sink, "{}", serde_json::to_string_pretty(&details.history())?)?
                }
                OutputFormat::Table => write!(sink, "{}", render::history(&details))?,
            }

            if let Some(path) = output {
                eprintln!("Exported {} readings to {:?}", details.readings().len(), path);
            }
        }

        Commands::Config { output } => write_default_config(output.as_ref())?,
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("plantwatch={}", logging.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn save_plant(client: &PlantClient, mode: FormMode, form: &PlantForm) -> anyhow::Result<()> {
    match flows::submit_plant(client, mode, form).await {
        Ok(next) => {
            println!("Plant saved. Next: {}", next);
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            for message in errors.messages() {
                eprintln!("{}", message);
            }
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

/// Blocking y/N prompt on stdin
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = config::generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &content)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
