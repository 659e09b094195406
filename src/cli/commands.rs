use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::config::{ConfigStore, ConfigUpdate, FileConfigStore};
use crate::filters::JournalStats;
use crate::logging::init_tracing;
use crate::models::SearchResult;
use crate::parsers::parse_search_file;
use crate::utils::format_path_with_tilde;
use crate::widget::{SearchSettings, Sidekick, message_channel};

#[derive(Parser)]
#[command(name = "logseq-sidekick")]
#[command(version = "0.1.0")]
#[command(about = "Show Logseq search results, optionally without journal pages", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Settings file (default: platform config dir, or $LOGSEQ_SIDEKICK_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the journal preference to a search response and show the result
    Filter {
        /// Search response JSON, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Hide journal pages regardless of the saved setting
        #[arg(long, conflicts_with = "include_journals")]
        exclude_journals: bool,

        /// Show journal pages regardless of the saved setting
        #[arg(long)]
        include_journals: bool,

        /// Print the filtered response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show journal vs regular counts for a search response
    Stats {
        /// Search response JSON, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current settings
    Show,
    /// Set the graph searched by the sidekick
    SetGraph { name: String },
    /// Turn journal page exclusion on or off
    ExcludeJournals {
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_level.as_deref())?;

    match &cli.command {
        Some(Commands::Filter { file, exclude_journals, include_journals, json }) => {
            let override_exclude = if *exclude_journals {
                Some(true)
            } else if *include_journals {
                Some(false)
            } else {
                None
            };
            let store = open_store(cli.config.as_deref())?;
            show_filtered(&store, file, override_exclude, *json)?;
        }
        Some(Commands::Stats { file }) => {
            show_stats(file)?;
        }
        Some(Commands::Config { action }) => {
            let store = open_store(cli.config.as_deref())?;
            run_config(&store, action.as_ref().unwrap_or(&ConfigAction::Show))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Only commands that read or write settings need a config location
fn open_store(config: Option<&Path>) -> Result<FileConfigStore> {
    match config {
        Some(path) => Ok(FileConfigStore::new(path)),
        None => FileConfigStore::from_env(),
    }
}

fn show_filtered(
    store: &FileConfigStore,
    file: &Path,
    override_exclude: Option<bool>,
    json: bool,
) -> Result<()> {
    let mut config = store.load()?;
    if let Some(exclude) = override_exclude {
        config.exclude_journal_pages = exclude;
    }

    let parsed = parse_search_file(file)?;
    let (sender, _receiver) = message_channel();
    let sidekick = Sidekick::new(parsed.result, config, sender);

    if json {
        let output = serde_json::to_string_pretty(sidekick.visible())
            .context("Failed to serialize filtered results")?;
        println!("{}", output);
        return Ok(());
    }

    println!("{}", sidekick.button());
    if sidekick.hidden_count() > 0 {
        println!("Hidden: {} journal hits", sidekick.hidden_count());
    }
    if parsed.skipped > 0 {
        println!("Skipped: {} malformed hits", parsed.skipped);
    }
    println!();
    print!("{}", sidekick.panel());

    Ok(())
}

fn show_stats(file: &Path) -> Result<()> {
    let parsed = parse_search_file(file)?;
    let SearchResult { blocks, pages, graph } = &parsed.result;

    println!("Journal Page Statistics");
    println!("=======================");
    if !graph.is_empty() {
        println!("Graph: {}", graph);
    }
    print_stats("blocks", &JournalStats::from_items(blocks));
    if !pages.is_empty() {
        print_stats("pages", &JournalStats::from_items(pages));
    }
    if parsed.skipped > 0 {
        println!("Skipped: {} malformed hits", parsed.skipped);
    }

    Ok(())
}

fn print_stats(kind: &str, stats: &JournalStats) {
    println!("Total {}: {}", kind, stats.total);
    println!("  Journal pages: {} ({}%)", stats.journal, stats.journal_percent());
    println!("  Regular pages: {} ({}%)", stats.regular, stats.regular_percent());
}

fn run_config(store: &FileConfigStore, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = store.load()?;
            println!("Config file: {}", format_path_with_tilde(store.path()));
            println!("Graph: {}", config.graph_name.as_deref().unwrap_or("(not configured)"));
            println!("Exclude journal pages: {}", config.exclude_journal_pages);
        }
        ConfigAction::SetGraph { name } => {
            let config =
                store.update(ConfigUpdate { graph_name: Some(name.clone()), ..Default::default() })?;
            println!("Graph: {}", config.graph_name.as_deref().unwrap_or_default());
        }
        ConfigAction::ExcludeJournals { value } => {
            let (sender, _receiver) = message_channel();
            let mut settings = SearchSettings::load(store, sender)?;
            settings.set_exclude_journal_pages(*value)?;
            print!("{}", settings);
        }
    }

    Ok(())
}
