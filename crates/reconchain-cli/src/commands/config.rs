//! `reconchain config`: inspect the effective configuration.

use crate::{
    cli::{ConfigArgs, ConfigCommands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(args: ConfigArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match args.action {
        Some(ConfigCommands::Get { key }) => {
            let value = config.get(&key).ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })?;
            output.print(&value)?;
        }

        Some(ConfigCommands::List) => {
            output.print(&render_toml(&config)?)?;
        }

        Some(ConfigCommands::Path) => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }

        None => {
            output.header("Current Configuration:")?;
            output.print(&render_toml(&config)?)?;
            output.info(&format!(
                "Default config file: {}",
                AppConfig::config_path().display()
            ))?;
        }
    }

    Ok(())
}

fn render_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_has_both_sections() {
        let rendered = render_toml(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[tools]"));
        assert!(rendered.contains("gowitness_image = \"leonjza/gowitness\""));
        assert!(rendered.contains("[output]"));
    }

    #[test]
    fn rendered_toml_reads_back() {
        let cfg = AppConfig::default();
        let parsed: AppConfig = toml::from_str(&render_toml(&cfg).unwrap()).unwrap();
        assert_eq!(parsed, cfg);
    }
}
