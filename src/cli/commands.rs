use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::debug;

use crate::codec::{self, Base};
use crate::history::{HistoryStats, HistoryStore};
use crate::menu::run_menu;
use crate::models::{ConversionKind, NewRecord};
use crate::tui::run_browser;
use crate::utils::{format_path_with_tilde, get_history_path, single_line};

#[derive(Parser)]
#[command(name = "base-converter")]
#[command(version = "0.1.0")]
#[command(
    about = "Convert numbers and text between bases 1-64, with a searchable history",
    long_about = None
)]
pub struct Cli {
    /// History file (default: $BASE_CONVERTER_HISTORY or the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Do not record conversions in the history
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Increase log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a decimal number to another base
    Encode {
        value: u64,
        /// Target base: 1-64 or a name such as 'binary'
        #[arg(short, long)]
        to: Base,
    },
    /// Convert digits in a base to decimal
    Decode {
        digits: String,
        /// Source base: 1-64 or a name such as 'hexadecimal'
        #[arg(short, long)]
        from: Base,
    },
    /// Convert digits from one base to another
    Convert {
        digits: String,
        #[arg(short, long)]
        from: Base,
        #[arg(short, long)]
        to: Base,
    },
    /// Encode text as fixed-width digit groups, one per character
    Text {
        text: String,
        #[arg(short, long)]
        to: Base,
    },
    /// Decode space-separated digit groups back into text
    Untext {
        #[arg(required = true)]
        groups: Vec<String>,
        #[arg(short, long)]
        from: Base,
    },
    /// List, search or clear the conversion history
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
    /// Show statistics about the history
    Stats,
    /// Browse the history in a full-screen view
    Browse,
    /// Start the interactive menu (the default)
    Menu,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// Print every record, oldest first
    List,
    /// Print records whose type contains QUERY (case-insensitive)
    Search { query: String },
    /// Erase all records
    Clear,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Encode { value, to }) => {
            let output = codec::encode(*value, to.radix())?;
            println!("{}", output);
            let kind = ConversionKind::Number { from: Base::DECIMAL, to: *to };
            record(&cli, NewRecord::new(value.to_string(), output, kind));
        }
        Some(Commands::Decode { digits, from }) => {
            let value = codec::decode(digits, from.radix())
                .with_context(|| format!("Failed to decode '{}' in base {}", digits, from))?;
            println!("{}", value);
            let kind = ConversionKind::Number { from: *from, to: Base::DECIMAL };
            record(&cli, NewRecord::new(digits.as_str(), value.to_string(), kind));
        }
        Some(Commands::Convert { digits, from, to }) => {
            let output = codec::convert(digits, from.radix(), to.radix())
                .with_context(|| format!("Failed to convert '{}' from base {}", digits, from))?;
            println!("{}", output);
            let kind = ConversionKind::Number { from: *from, to: *to };
            record(&cli, NewRecord::new(digits.as_str(), output, kind));
        }
        Some(Commands::Text { text, to }) => {
            let groups = codec::text_to_base_groups(text, to.radix())
                .context("Failed to encode text")?;
            let output = codec::join_groups(&groups);
            println!("{}", output);
            let kind = ConversionKind::TextToBase { base: *to };
            record(&cli, NewRecord::new(text.as_str(), output, kind));
        }
        Some(Commands::Untext { groups, from }) => {
            // Accept both `untext 48 69` and `untext "48 69"`
            let joined = groups.join(" ");
            let groups = codec::split_groups(&joined);
            let text = codec::base_groups_to_text(&groups, from.radix())
                .context("Failed to decode groups")?;
            println!("{}", single_line(&text));
            let kind = ConversionKind::BaseToText { base: *from };
            record(&cli, NewRecord::new(codec::join_groups(&groups), text, kind));
        }
        Some(Commands::History { action }) => {
            let store = open_store(&cli)?;
            match action {
                HistoryCommand::List => list_history(&store)?,
                HistoryCommand::Search { query } => search_history(&store, query)?,
                HistoryCommand::Clear => {
                    store.clear()?;
                    println!("History cleared");
                }
            }
        }
        Some(Commands::Stats) => {
            show_stats(&open_store(&cli)?)?;
        }
        Some(Commands::Browse) => {
            run_browser(open_store(&cli)?)?;
        }
        Some(Commands::Menu) | None => {
            run_menu(menu_store(&cli))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "error",
        1 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // Ignore a second init
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn open_store(cli: &Cli) -> Result<HistoryStore> {
    let path = get_history_path(cli.history_file.as_deref())?;
    debug!("Using history file {}", path.display());
    Ok(HistoryStore::new(path))
}

/// History for the menu; a missing location only disables history
fn menu_store(cli: &Cli) -> Option<HistoryStore> {
    if cli.no_history {
        return None;
    }
    match open_store(cli) {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Warning: {}; history is disabled", e);
            None
        }
    }
}

/// Append a conversion; failures are reported but never fail the conversion
fn record(cli: &Cli, new: NewRecord) {
    if cli.no_history {
        return;
    }

    let result = open_store(cli).and_then(|store| Ok(store.append(new)?));
    if let Err(e) = result {
        eprintln!("Warning: conversion not saved to history: {}", e);
    }
}

fn list_history(store: &HistoryStore) -> Result<()> {
    let log = store.load()?;
    if log.is_empty() {
        println!("No history yet");
        return Ok(());
    }

    for (idx, record) in log.iter().enumerate() {
        println!("{:>4}. {}", idx + 1, single_line(&record.to_string()));
    }
    Ok(())
}

fn search_history(store: &HistoryStore, query: &str) -> Result<()> {
    let matches = store.search(query)?;
    if matches.is_empty() {
        println!("No records match '{}'", query);
        return Ok(());
    }

    println!("{} matching record(s):", matches.len());
    for record in &matches {
        println!("  {}", single_line(&record.to_string()));
    }
    Ok(())
}

fn show_stats(store: &HistoryStore) -> Result<()> {
    let log = store.load()?;
    let stats = HistoryStats::from_records(&log);

    println!("Conversion History Statistics");
    println!("=============================");
    println!("Total records: {}", stats.total);
    for (kind, count) in &stats.by_kind {
        println!("  {}: {}", single_line(kind), count);
    }
    println!();
    println!("History file: {}", format_path_with_tilde(store.path()));

    if let Some(oldest) = stats.oldest {
        println!("Oldest record: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = stats.newest {
        println!("Newest record: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
