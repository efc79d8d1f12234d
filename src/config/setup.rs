//! Interactive setup wizard for first-time configuration
//!
//! This module handles the interactive prompts for creating an initial
//! configuration when docseek is run for the first time.

use super::DocseekConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// URL offered as the default during setup
pub const DEFAULT_SERVER_URL: &str = "http://localhost:4090";

/// Interactive first-time setup - prompts for a server name and URL
///
/// Guides the user through registering their first search server:
/// 1. Prompts for a server name (default: "local")
/// 2. Prompts for the server's base URL (default: [`DEFAULT_SERVER_URL`])
/// 3. Creates and saves the configuration with that server as default
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
///
/// # Examples
/// ```ignore
/// use docseek::config::first_time_setup;
///
/// let config = first_time_setup()?;
/// println!("Configuration created with {} server(s)", config.servers.len());
/// ```
pub fn first_time_setup() -> Result<DocseekConfig, ConfigError> {
    println!("Welcome to docseek! Let's register your search server.\n");

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Server name")
        .default("local".to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Server URL")
        .default(DEFAULT_SERVER_URL.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = DocseekConfig::default();
    config.servers.insert(name.clone(), url);
    config.default_server = Some(name);

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_signature() {
        let _: fn() -> Result<DocseekConfig, ConfigError> = first_time_setup;
    }
}
