//! Server command - manage known search servers

use super::Result;
use crate::DocseekError;
use crate::api::HttpBackend;
use crate::cli::ServerCommands;
use crate::config::DocseekConfig;

/// Execute the server management command
///
/// # Errors
///
/// Returns `DocseekError` if the operation is invalid (e.g., duplicate name,
/// unknown server, malformed URL) or the configuration cannot be saved.
pub fn execute(mut config: DocseekConfig, command: &ServerCommands, quiet: bool) -> Result<()> {
    match command {
        ServerCommands::Add { name, url } => {
            if config.get_server(name).is_some() {
                return Err(DocseekError::InvalidInput(format!("Server '{name}' already exists")));
            }

            let backend = HttpBackend::new(url)?;
            config.add_server(name.clone(), backend.base_url().to_string())?;

            if !quiet {
                println!("Server '{name}' added at {}", backend.base_url());
            }

            if config.servers.len() == 1 {
                config.set_default_server(name.clone())?;
                if !quiet {
                    println!("Set '{name}' as default server");
                }
            }
        }
        ServerCommands::List => {
            if config.servers.is_empty() {
                if !quiet {
                    println!("No servers configured.");
                    println!("Add one with: docseek server add <name> <url>");
                }
                return Ok(());
            }

            if !quiet {
                println!("Configured servers:");
            }

            let default_server = config.get_default_server();
            for name in config.list_servers() {
                if let Some(url) = config.get_server(name) {
                    let marker = if default_server == Some(name) { " (default)" } else { "" };

                    if quiet {
                        println!("{name}");
                    } else {
                        println!("  {name} -> {url}{marker}");
                    }
                }
            }
        }
        ServerCommands::Remove { name } => {
            if config.get_server(name).is_none() {
                return Err(DocseekError::InvalidInput(format!("Server '{name}' does not exist")));
            }

            let was_default = config.get_default_server() == Some(name);
            config.remove_server(name)?;

            if !quiet {
                println!("Server '{name}' removed from configuration");
                if was_default {
                    println!("Warning: Removed the default server. Set a new one with: docseek server set-default <name>");
                }
            }
        }
        ServerCommands::SetDefault { name } => {
            if config.get_server(name).is_none() {
                return Err(DocseekError::InvalidInput(format!("Server '{name}' does not exist")));
            }

            config.set_default_server(name.clone())?;

            if !quiet {
                println!("Set '{name}' as default server");
            }
        }
    }
    Ok(())
}
