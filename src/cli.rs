//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::suggest::SearchScope;

#[derive(Debug, Parser)]
#[command(
    name = "lawgg-suggest",
    about = "Member and bill search suggestions for lawgg",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (default: ~/.config/lawgg-suggest/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Origin of the lookup API, bypassing host-based selection
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Host the client runs under (loopback hosts use the local API)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Delay between the last keystroke and the search
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    /// Log file used while the TUI is running
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the suggestions for one query and exit.
    Lookup {
        query: String,
        #[arg(long, value_enum, default_value_t = SearchScope::All)]
        scope: SearchScope,
        /// Output the grouped suggestions as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = Some(base_url.clone());
        }
        if let Some(host) = &self.host {
            config.api.host = host.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.autocomplete.debounce_ms = debounce_ms;
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
