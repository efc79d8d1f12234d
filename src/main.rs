//! Docseek CLI application entry point
//!
//! This is the main executable for docseek. It provides a command-line
//! interface for searching a document search backend and managing user tags.
//!
//! # Usage
//!
//! ```bash
//! # Register a server (first run prompts for one)
//! docseek server add home http://localhost:4090
//!
//! # List indices
//! docseek info
//!
//! # Search
//! docseek search "annual report" -m application/pdf
//! docseek search -t todo.#ff0000 --details
//!
//! # Tag a document
//! docseek tag add <DOC_ID> todo --color "#ff0000"
//! docseek tag rm <DOC_ID> todo
//!
//! # Statistics export
//! docseek stats photos mime
//!
//! # Quiet mode (only output results)
//! docseek -q search invoice
//! ```
//!
//! # Configuration
//!
//! On first run, docseek will prompt for a server. Configuration is stored in
//! the user's config directory (`~/.config/docseek/config.toml` on Linux).

use docseek::{
    DocseekError, SearchApi,
    cli::{Cli, Commands},
    commands,
    config::DocseekConfig,
    logging,
};

type Result<T> = std::result::Result<T, DocseekError>;

/// Load configuration, skipping the setup wizard when a URL is given directly
fn load_config(cli: &Cli) -> Result<DocseekConfig> {
    if cli.url.is_some() || !cli.command.needs_backend() {
        Ok(DocseekConfig::load()?)
    } else {
        Ok(DocseekConfig::load_or_setup()?)
    }
}

/// Dispatch a backend command
fn run_backend_command(api: &SearchApi, config: &DocseekConfig, command: &Commands, quiet: bool) -> Result<()> {
    match command {
        Commands::Info => commands::info(api, quiet),
        Commands::Search { .. } => commands::search(api, command, config.page_size, quiet),
        Commands::Mimes { json } => commands::mimes(api, *json, quiet),
        Commands::Tags { json } => commands::tags(api, *json, quiet),
        Commands::Doc { id } => commands::doc(api, id),
        Commands::Tag { command } => commands::tag(api, command, &config.default_tag_color, quiet),
        Commands::Stats { index, kind, url_only } => commands::stats(api, index, *kind, *url_only, quiet),
        Commands::Server { .. } | Commands::Config { .. } => unreachable!(),
    }
}

/// Main entry point for the docseek application
///
/// Parses command-line arguments, loads configuration, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `DocseekError` if configuration loading fails, the backend cannot
/// be reached, or any command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Server { command } => commands::server(config, command, quiet),
        Commands::Config { command } => commands::settings(config, command, quiet),
        command => {
            let base_url = match &cli.url {
                Some(url) => url.as_str(),
                None => config.resolve_url(cli.server.as_deref())?,
            };
            tracing::debug!(base_url, "using backend");

            let api = SearchApi::with_timeout(base_url, config.timeout())?;
            run_backend_command(&api, &config, command, quiet)
        }
    }
}
