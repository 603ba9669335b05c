//! External generator command
//!
//! Runs `sh -c "<command> \"$1\"" sh <project-name>`, writes the resolved
//! configuration as JSON to the child's stdin and streams its output.

use super::Generator;
use crate::questions::ScaffoldConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Generator implemented by another program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGenerator {
    command: String,
}

impl CommandGenerator {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Read the command from an environment variable; blank counts as unset
    pub fn from_env(var: &str) -> Option<Self> {
        std::env::var(var)
            .ok()
            .filter(|c| !c.trim().is_empty())
            .map(Self::new)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Shell script run by `sh -c`; the project name arrives as `$1`
    fn script(&self) -> String {
        format!("{} \"$1\"", self.command)
    }
}

impl Generator for CommandGenerator {
    async fn generate(&self, config: &ScaffoldConfig) -> Result<()> {
        let payload =
            serde_json::to_vec(config).context("Failed to serialize configuration")?;

        println!();
        println!(
            "{} {} {}",
            "Running:".dimmed(),
            self.command.yellow(),
            config.project_name
        );
        println!();

        let mut child = TokioCommand::new("sh")
            .arg("-c")
            .arg(self.script())
            .arg("sh")
            .arg(&config.project_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start generator: {}", self.command))?;

        // Write the configuration, then close stdin so the child sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload).await {
                Ok(()) => {}
                // The generator may not read its configuration from stdin
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(e).context("Failed to send configuration to generator");
                }
            }
            stdin.shutdown().await.ok();
        }

        let stdout = child
            .stdout
            .take()
            .context("Failed to capture generator stdout")?;
        let stderr = child
            .stderr
            .take()
            .context("Failed to capture generator stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_open = true;
        let mut stderr_open = true;

        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_open = false;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .context("Failed to wait for generator")?;
        println!();
        tracing::debug!(command = %self.command, ?status, "generator finished");

        if status.success() {
            Ok(())
        } else {
            anyhow::bail!(
                "Generator exited with code: {}\nCommand: {}",
                status.code().unwrap_or(-1),
                self.command
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::GeneratorFlags;
    use tempfile::TempDir;

    fn config(name: &str) -> ScaffoldConfig {
        ScaffoldConfig {
            project_name: name.to_string(),
            template: Some("https://github.com/strapi/strapi-template-blog".to_string()),
            quickstart: false,
            flags: GeneratorFlags::default(),
        }
    }

    #[test]
    fn test_script_passes_name_as_argument() {
        let generator = CommandGenerator::new("npx create-project");
        assert_eq!(generator.script(), "npx create-project \"$1\"");
    }

    #[tokio::test]
    async fn test_command_receives_name_and_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("config.json");
        let command = format!(
            "f() {{ test \"$1\" = 'my app' && cat > '{}'; }}; f",
            out.display()
        );
        let generator = CommandGenerator::new(command);

        generator.generate(&config("my app")).await.unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["projectName"], "my app");
        assert_eq!(value["quickstart"], false);
        assert_eq!(
            value["template"],
            "https://github.com/strapi/strapi-template-blog"
        );
    }

    #[tokio::test]
    async fn test_failing_command_is_an_error() {
        let generator = CommandGenerator::new("f() { cat > /dev/null; exit 3; }; f");
        let err = generator.generate(&config("demo")).await.unwrap_err();
        assert!(err.to_string().contains("code: 3"));
    }
}
