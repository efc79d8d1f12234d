//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for docseek using the `clap`
//! crate.
//!
//! # Commands
//!
//! - **info**: List the indices served by the backend
//! - **search**: Run a search and print normalized hits
//! - **mimes**: Show the MIME types present in the index
//! - **tags**: List user tags
//! - **doc**: Print the stored metadata of a document
//! - **tag**: Add or remove a user tag on a document
//! - **stats**: Print or download an index statistics export
//! - **server**: Manage known servers (add, remove, list, set-default)
//! - **config**: Get and set configuration values
//!
//! # Examples
//!
//! ```
//! use docseek::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["docseek", "--url", "http://localhost:4090", "search", "invoice"]);
//! assert!(matches!(cli.command, Commands::Search { .. }));
//! ```

use crate::query::SearchQuery;
use crate::stats::StatsKind;
use clap::{ArgAction, Parser, Subcommand};

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "docseek")]
#[command(about = "Search documents on a search backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configured server to use (overrides default)
    #[arg(short = 's', long = "server", value_name = "NAME", global = true, conflicts_with = "url")]
    pub server: Option<String>,

    /// Backend base URL (bypasses the configured servers)
    #[arg(long = "url", value_name = "URL", global = true)]
    pub url: Option<String>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the indices served by the backend
    #[command(visible_alias = "i")]
    Info,

    /// Search documents
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query (simple query string syntax)
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only documents with these MIME types (can specify multiple: -m image/png -m image/gif)
        #[arg(short = 'm', long = "mime", value_name = "MIME")]
        mime_types: Vec<String>,

        /// Only documents with these stored tags (name.#rrggbb)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Only documents from these indices (id, id prefix or name)
        #[arg(short = 'i', long = "index", value_name = "INDEX")]
        indices: Vec<String>,

        /// Number of hits to return (defaults to the configured page size)
        #[arg(short = 'n', long = "size", value_name = "N")]
        size: Option<usize>,

        /// Offset of the first hit
        #[arg(long = "from", value_name = "N", default_value_t = 0)]
        from: usize,

        /// Show capability flags and highlighted fragments
        #[arg(short = 'd', long = "details")]
        details: bool,

        /// Print the normalized result as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show MIME types present in the index
    Mimes {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List user tags
    Tags {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print the stored metadata of a document
    Doc {
        /// Document id
        id: String,
    },

    /// Add or remove user tags
    #[command(visible_alias = "t")]
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// Index statistics exports
    Stats {
        /// Index id, id prefix or name
        index: String,

        /// Which export to fetch
        #[arg(value_enum)]
        kind: StatsKind,

        /// Only print the export URL
        #[arg(long = "url-only")]
        url_only: bool,
    },

    /// Manage known servers
    Server {
        #[command(subcommand)]
        command: ServerCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Commands {
    /// Whether the command needs a backend connection
    #[must_use]
    pub const fn needs_backend(&self) -> bool {
        !matches!(self, Self::Server { .. } | Self::Config { .. })
    }

    /// Build the search request for a `search` command
    ///
    /// Index filters must already be resolved to index ids.
    #[must_use]
    pub fn get_search_query(&self, index_ids: Vec<String>, page_size: usize) -> Option<SearchQuery> {
        match self {
            Self::Search {
                query,
                mime_types,
                tags,
                size,
                from,
                ..
            } => Some(
                SearchQuery::new()
                    .with_text(query.clone().unwrap_or_default())
                    .with_mime_types(mime_types.clone())
                    .with_tags(tags.clone())
                    .with_indices(index_ids)
                    .with_size(size.unwrap_or(page_size))
                    .with_from(*from),
            ),
            _ => None,
        }
    }
}

/// Tag management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TagCommands {
    /// Add a tag to a document
    Add {
        /// Document id
        doc_id: String,

        /// Tag name (dots allowed, e.g. project.alpha)
        name: String,

        /// Tag color as #rrggbb (defaults to the configured tag color)
        #[arg(short = 'c', long = "color", value_name = "COLOR")]
        color: Option<String>,
    },

    /// Remove a tag from a document
    #[command(visible_alias = "rm")]
    Remove {
        /// Document id
        doc_id: String,

        /// Tag name, with or without its color
        tag: String,
    },
}

/// Server management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ServerCommands {
    /// Add a server
    Add {
        /// Name of the server
        name: String,

        /// Base URL of the server
        url: String,
    },

    /// List all servers
    #[command(visible_alias = "ls")]
    List,

    /// Remove a server from configuration
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the server to remove
        name: String,
    },

    /// Set the default server
    #[command(name = "set-default")]
    SetDefault {
        /// Name of the server to set as default
        name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}
