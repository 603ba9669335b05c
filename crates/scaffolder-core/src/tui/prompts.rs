//! Charm-style CLI prompts using cliclack

use crate::catalog::{CatalogFetcher, ChoiceItem};
use crate::cli::CommonArgs;
use crate::error::ScaffoldError;
use crate::generator::{Generator, SelectedGenerator};
use crate::product::ProductConfig;
use crate::questions::{
    AnswerValue, Prompter, QuestionSpec, ScaffoldConfig, SelectItem, DEFAULT_PROJECT_NAME,
};
use crate::request::ScaffoldRequest;
use crate::session;
use anyhow::Result;
use std::path::PathBuf;

const SEPARATOR_LABEL: &str = "──────────────";

/// Exit status after the user cancels a prompt, matching Ctrl+C
pub const CANCELLED_EXIT_CODE: i32 = 130;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name / directory
    pub project_name: Option<String>,

    /// Repository URL of the template or starter
    pub template: Option<String>,

    pub common: CommonArgs,
}

/// Prompter asking questions on the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn input(question: &QuestionSpec) -> Result<AnswerValue, ScaffoldError> {
        let default = match question.default_value() {
            Some(AnswerValue::Text(text)) => text.clone(),
            _ => DEFAULT_PROJECT_NAME.to_string(),
        };

        let input: String = cliclack::input(question.prompt())
            .placeholder(&default)
            .default_input(&default)
            .interact()
            .map_err(ScaffoldError::from_prompt)?;

        Ok(AnswerValue::Text(input.trim().to_string()))
    }

    fn select(question: &QuestionSpec, items: &[SelectItem]) -> Result<AnswerValue, ScaffoldError> {
        if !items.iter().any(|i| matches!(i, SelectItem::Option { .. })) {
            return Err(ScaffoldError::Terminal(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("question '{}' has nothing to choose from", question.id()),
            )));
        }

        // Separator rows are listed but cannot be picked; ask again if one is.
        // cliclack renders every row, which matches the planned page size.
        loop {
            let mut select = cliclack::select(question.prompt());
            for (idx, item) in items.iter().enumerate() {
                select = match item {
                    SelectItem::Option { label, .. } => select.item(idx, label, ""),
                    SelectItem::Separator => select.item(idx, SEPARATOR_LABEL, ""),
                };
            }

            let selected: usize = select.interact().map_err(ScaffoldError::from_prompt)?;
            if let Some(SelectItem::Option { value, .. }) = items.get(selected) {
                return Ok(value.clone());
            }
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &QuestionSpec) -> Result<AnswerValue, ScaffoldError> {
        match question.choices() {
            Some(items) => Self::select(question, items),
            None => Self::input(question),
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Setup catalog fetcher
    let fetcher = setup_fetcher(config, &args.common.catalog_file)?;

    // Step 2: Load choices (must finish before anything is asked)
    let choices = load_catalog(&fetcher).await?;

    // Step 3: Ask whatever the flags left open
    let request = ScaffoldRequest::new(
        args.project_name,
        args.template,
        args.common.quickstart,
        args.common.generator_flags(),
    );
    tracing::debug!(?request, "scaffold request");

    let mut prompter = TerminalPrompter;
    let scaffold_config =
        match session::resolve_config(&request, &choices, fetcher.kind(), &mut prompter) {
            Ok(resolved) => resolved,
            Err(ScaffoldError::InputAborted) => {
                cliclack::outro_cancel(ScaffoldError::InputAborted.to_string())?;
                std::process::exit(CANCELLED_EXIT_CODE);
            }
            Err(e) => return Err(e.into()),
        };
    print_summary(config, &scaffold_config)?;

    // Step 4: Hand off to the generator
    let generator = SelectedGenerator::from_env(args.common.print_config);
    match &generator {
        SelectedGenerator::Print(_) => {
            cliclack::outro("Resolved configuration")?;
            generator.generate(&scaffold_config).await?;
        }
        SelectedGenerator::Command(command) => {
            cliclack::log::info(format!("Handing off to {}", command.command()))?;
            generator.generate(&scaffold_config).await?;
            cliclack::outro("Happy coding!")?;
        }
    }

    Ok(())
}

fn setup_fetcher<C: ProductConfig>(
    config: &C,
    catalog_file: &Option<PathBuf>,
) -> Result<CatalogFetcher> {
    let fetcher = match catalog_file {
        Some(path) => {
            cliclack::log::info(format!("Using local catalog {}", path.display()))?;
            CatalogFetcher::from_local(config, path.clone())
        }
        None => CatalogFetcher::from_config(config).map_err(|source| {
            ScaffoldError::CatalogUnavailable {
                noun: config.catalog_kind().noun,
                source,
            }
        })?,
    };

    Ok(fetcher)
}

async fn load_catalog(fetcher: &CatalogFetcher) -> Result<Vec<ChoiceItem>> {
    let noun = fetcher.kind().noun;
    let spinner = cliclack::spinner();
    spinner.start(format!("Loading {}s...", noun));

    match session::load_choices(fetcher).await {
        Ok(choices) => {
            // "None" is not a catalog entry
            let count = choices
                .iter()
                .filter_map(ChoiceItem::as_choice)
                .filter(|c| c.value.is_some())
                .count();
            spinner.stop(format!("{} {}s available", count, noun));
            Ok(choices)
        }
        Err(e) => {
            spinner.stop(format!("Failed to load {}s", noun));
            Err(e.into())
        }
    }
}

fn print_summary<C: ProductConfig>(config: &C, resolved: &ScaffoldConfig) -> Result<()> {
    let noun = config.catalog_kind().noun;
    cliclack::log::success(format!("Project: {}", resolved.project_name))?;
    match &resolved.template {
        Some(url) => cliclack::log::info(format!("Using {}: {}", noun, url))?,
        None => cliclack::log::info(format!("No {} selected", noun))?,
    }
    let mode = if resolved.quickstart {
        "Quickstart"
    } else {
        "Custom"
    };
    cliclack::log::info(format!("Installation type: {}", mode))?;
    Ok(())
}
