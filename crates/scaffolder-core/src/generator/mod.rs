//! Hand-off to the project generator
//!
//! The prompt engine never writes a project itself. It passes the resolved
//! [`ScaffoldConfig`] to a [`Generator`]: either an external command, or a
//! printer that emits the configuration for another tool to consume.

pub mod command;

use crate::questions::ScaffoldConfig;
use anyhow::{Context, Result};
use std::io::Write;

pub use command::CommandGenerator;

/// Environment variable naming the external generator command
pub const GENERATOR_ENV: &str = "STRAPI_GENERATOR";

/// Consumer of a resolved configuration
#[allow(async_fn_in_trait)]
pub trait Generator {
    async fn generate(&self, config: &ScaffoldConfig) -> Result<()>;
}

/// Writes the configuration to stdout as YAML
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintGenerator;

impl PrintGenerator {
    pub fn render(config: &ScaffoldConfig) -> Result<String> {
        serde_yaml::to_string(config).context("Failed to serialize configuration")
    }
}

impl Generator for PrintGenerator {
    async fn generate(&self, config: &ScaffoldConfig) -> Result<()> {
        let rendered = Self::render(config)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Generator picked for a session: the configured command, or the printer
#[derive(Debug, Clone)]
pub enum SelectedGenerator {
    Command(CommandGenerator),
    Print(PrintGenerator),
}

impl SelectedGenerator {
    /// Use `$STRAPI_GENERATOR` unless printing was requested or it is unset
    pub fn from_env(print_config: bool) -> Self {
        if print_config {
            return SelectedGenerator::Print(PrintGenerator);
        }
        match CommandGenerator::from_env(GENERATOR_ENV) {
            Some(command) => SelectedGenerator::Command(command),
            None => SelectedGenerator::Print(PrintGenerator),
        }
    }
}

impl Generator for SelectedGenerator {
    async fn generate(&self, config: &ScaffoldConfig) -> Result<()> {
        match self {
            SelectedGenerator::Command(command) => command.generate(config).await,
            SelectedGenerator::Print(print) => print.generate(config).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GeneratorFlags;

    #[test]
    fn test_render_uses_generator_keys() {
        let config = ScaffoldConfig {
            project_name: "demo".to_string(),
            template: None,
            quickstart: true,
            flags: GeneratorFlags::default(),
        };
        let yaml = PrintGenerator::render(&config).unwrap();
        assert!(yaml.contains("projectName: demo"));
        assert!(yaml.contains("template: null"));
        assert!(yaml.contains("quickstart: true"));
        assert!(yaml.contains("run: true"));
    }

    #[test]
    fn test_print_config_overrides_command() {
        assert!(matches!(
            SelectedGenerator::from_env(true),
            SelectedGenerator::Print(_)
        ));
    }
}
