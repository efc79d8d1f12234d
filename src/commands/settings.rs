//! Config command - get and set configuration values

use super::Result;
use crate::DocseekError;
use crate::cli::ConfigCommands;
use crate::config::DocseekConfig;
use crate::tags::is_valid_color;

/// Keys accepted by `config get` and `config set`
pub const CONFIG_KEYS: &[&str] = &["quiet", "timeout", "page_size", "tag_color"];

/// Execute the config command
///
/// # Errors
///
/// Returns `DocseekError` if the configuration key is invalid, value parsing fails,
/// or configuration save fails.
pub fn execute(mut config: DocseekConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .ok_or_else(|| {
                    DocseekError::InvalidInput("Invalid format. Use: docseek config set key=value".into())
                })?;

            apply_setting(&mut config, key, value)?;
            config.save()?;

            if !quiet {
                println!("Set {key} = {}", get_setting(&config, key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", get_setting(&config, key)?);
        }
    }
    Ok(())
}

/// Update a configuration value in memory
///
/// # Errors
///
/// Returns `DocseekError::InvalidInput` for unknown keys or unparsable values.
pub fn apply_setting(config: &mut DocseekConfig, key: &str, value: &str) -> Result<()> {
    let invalid = |expected: &str| {
        DocseekError::InvalidInput(format!("Invalid value for {key}: '{value}'. Expected {expected}"))
    };

    match key {
        "quiet" => config.quiet = value.parse().map_err(|_| invalid("'true' or 'false'"))?,
        "timeout" => {
            config.timeout_secs = value
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| invalid("a positive number of seconds"))?;
        }
        "page_size" => {
            config.page_size = value
                .parse()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| invalid("a positive number"))?;
        }
        "tag_color" => {
            let color = value.to_ascii_lowercase();
            if !is_valid_color(&color) {
                return Err(invalid("a #rrggbb color"));
            }
            config.default_tag_color = color;
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

/// Read a configuration value as text
///
/// # Errors
///
/// Returns `DocseekError::InvalidInput` for unknown keys.
pub fn get_setting(config: &DocseekConfig, key: &str) -> Result<String> {
    match key {
        "quiet" => Ok(config.quiet.to_string()),
        "timeout" => Ok(config.timeout_secs.to_string()),
        "page_size" => Ok(config.page_size.to_string()),
        "tag_color" => Ok(config.default_tag_color.clone()),
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> DocseekError {
    DocseekError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_get_settings() {
        let mut config = DocseekConfig::default();

        apply_setting(&mut config, "quiet", "true").unwrap();
        apply_setting(&mut config, "timeout", "5").unwrap();
        apply_setting(&mut config, "page_size", "100").unwrap();
        apply_setting(&mut config, "tag_color", "#ABCDEF").unwrap();

        assert_eq!(get_setting(&config, "quiet").unwrap(), "true");
        assert_eq!(get_setting(&config, "timeout").unwrap(), "5");
        assert_eq!(get_setting(&config, "page_size").unwrap(), "100");
        assert_eq!(get_setting(&config, "tag_color").unwrap(), "#abcdef");
    }

    #[test]
    fn test_invalid_values() {
        let mut config = DocseekConfig::default();

        assert!(apply_setting(&mut config, "quiet", "maybe").is_err());
        assert!(apply_setting(&mut config, "timeout", "-1").is_err());
        assert!(apply_setting(&mut config, "timeout", "0").is_err());
        assert!(apply_setting(&mut config, "page_size", "0").is_err());
        assert!(apply_setting(&mut config, "tag_color", "red").is_err());
        assert_eq!(config, DocseekConfig::default());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = DocseekConfig::default();
        let error = apply_setting(&mut config, "colour", "x").unwrap_err();
        assert!(error.to_string().contains("Available keys"));
        assert!(get_setting(&config, "colour").is_err());
    }

    #[test]
    fn test_set_without_equals() {
        let command = ConfigCommands::Set {
            setting: "quiet".into(),
        };
        assert!(matches!(
            execute(DocseekConfig::default(), &command, true),
            Err(DocseekError::InvalidInput(_))
        ));
    }
}
