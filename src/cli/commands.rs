use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};

use crate::formatter::format_form;
use crate::models::{FormDataMap, PayloadType};
use crate::storage::{FileStore, HistoryStore};
use crate::utils::{format_saved_at, get_data_dir, single_line};

#[derive(Parser)]
#[command(name = "qr-studio")]
#[command(version)]
#[command(about = "Build barcode payloads and manage saved configurations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the payload string for a payload type
    Payload {
        /// url, email, phone, text or vcard
        payload_type: PayloadType,
        /// Form field as name=value (e.g. --field subject=Hello)
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },
    /// Inspect or edit the saved configuration history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Show statistics about the saved history
    Stats,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved configurations, newest first
    List,
    /// Delete one saved configuration by id
    Delete { id: String },
    /// Delete every saved configuration
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Payload { payload_type, fields }) => {
            println!("{}", build_payload(payload_type, &fields)?);
        }
        Some(Commands::History { action }) => run_history(action)?,
        Some(Commands::Stats) => show_stats()?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn build_payload(payload_type: PayloadType, fields: &[String]) -> Result<String> {
    let mut form_data = FormDataMap::default();
    for field in fields {
        let Some((name, value)) = field.split_once('=') else {
            bail!("Invalid field '{}', expected NAME=VALUE", field);
        };
        form_data.set_field(payload_type, name.trim(), value)?;
    }
    Ok(format_form(payload_type, &form_data))
}

fn open_history() -> Result<HistoryStore<FileStore>> {
    let data_dir = get_data_dir().context("Failed to locate history directory")?;
    Ok(HistoryStore::open(FileStore::new(data_dir)))
}

fn run_history(action: HistoryAction) -> Result<()> {
    let mut history = open_history()?;

    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No saved configurations yet.");
                return Ok(());
            }
            let now = Utc::now();
            for entry in history.entries() {
                let logo = if entry.has_logo() { " [logo]" } else { "" };
                println!(
                    "{}  {:<14}  {:<5}{}  {}",
                    entry.id,
                    format_saved_at(&entry.created_at, &now),
                    entry.payload_type.label(),
                    logo,
                    single_line(&entry.summary())
                );
            }
        }
        HistoryAction::Delete { id } => {
            if history.delete(&id) {
                println!("Deleted {}", id);
            } else {
                println!("No saved configuration with id {}", id);
            }
        }
        HistoryAction::Clear => {
            let count = history.len();
            history.clear_all();
            println!("Cleared {} saved configurations", count);
        }
    }

    Ok(())
}

fn show_stats() -> Result<()> {
    let history = open_history()?;
    let entries = history.entries();

    println!("Saved Configuration Statistics");
    println!("==============================");
    println!("Total entries: {}", entries.len());
    for payload_type in PayloadType::ALL {
        let count = entries.iter().filter(|e| e.payload_type == payload_type).count();
        println!("  {}: {}", payload_type.label(), count);
    }
    let with_logo = entries.iter().filter(|e| e.has_logo()).count();
    println!("  With logo: {}", with_logo);

    if let Some(newest) = entries.first() {
        println!("Newest entry: {}", newest.created_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(oldest) = entries.iter().map(|e| e.created_at).min() {
        println!("Oldest entry: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
