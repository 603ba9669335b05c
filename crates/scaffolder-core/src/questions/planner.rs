//! Question planning: which prompts a session still needs
//!
//! Activation is decided once, from the request alone. Nothing re-evaluates
//! it while the session runs.

use crate::catalog::ChoiceItem;
use crate::product::CatalogKind;
use crate::request::ScaffoldRequest;
use std::fmt;

/// Project name offered when the caller gave none
pub const DEFAULT_PROJECT_NAME: &str = "my-strapi-project";

const DIRECTORY_PROMPT: &str = "What would you like to name your project?";
const INSTALL_MODE_PROMPT: &str = "Choose your installation type";

/// The three questions a session can ask, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionId {
    Directory,
    Selection,
    InstallMode,
}

impl QuestionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Directory => "directory",
            QuestionId::Selection => "selection",
            QuestionId::InstallMode => "installMode",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value a question can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// Free text (project name)
    Text(String),
    /// Repository URL, or `None` for "no template"
    Template(Option<String>),
    /// Quickstart (`true`) or custom (`false`) installation
    Quickstart(bool),
}

/// A row of a select question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    Option { label: String, value: AnswerValue },
    Separator,
}

impl From<&ChoiceItem> for SelectItem {
    fn from(item: &ChoiceItem) -> Self {
        match item {
            ChoiceItem::Choice(choice) => SelectItem::Option {
                label: choice.label.clone(),
                value: AnswerValue::Template(choice.value.clone()),
            },
            ChoiceItem::Separator => SelectItem::Separator,
        }
    }
}

/// One planned question. Built by [`plan`], read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSpec {
    id: QuestionId,
    prompt: String,
    choices: Option<Vec<SelectItem>>,
    default_value: Option<AnswerValue>,
    page_size: Option<usize>,
    active: bool,
}

impl QuestionSpec {
    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Select rows; `None` for free-text questions
    pub fn choices(&self) -> Option<&[SelectItem]> {
        self.choices.as_deref()
    }

    pub fn default_value(&self) -> Option<&AnswerValue> {
        self.default_value.as_ref()
    }

    /// Rows visible at once; equal to the number of choices
    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Which questions a request leaves open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub directory: bool,
    pub selection: bool,
    pub install_mode: bool,
}

impl Activation {
    pub fn for_request(request: &ScaffoldRequest) -> Self {
        let has_name = request.project_name().is_some();
        let has_template = request.template_reference().is_some();
        Self {
            // A name alone is not enough: without a template the name is asked again
            directory: !has_name || !has_template,
            selection: !has_template,
            install_mode: request.use_quickstart().is_none(),
        }
    }

    pub fn is_active(&self, id: QuestionId) -> bool {
        match id {
            QuestionId::Directory => self.directory,
            QuestionId::Selection => self.selection,
            QuestionId::InstallMode => self.install_mode,
        }
    }
}

/// Build the `directory`, `selection` and `installMode` questions, in that order
pub fn plan(
    request: &ScaffoldRequest,
    choices: &[ChoiceItem],
    kind: &CatalogKind,
) -> [QuestionSpec; 3] {
    let activation = Activation::for_request(request);

    let directory = QuestionSpec {
        id: QuestionId::Directory,
        prompt: DIRECTORY_PROMPT.to_string(),
        choices: None,
        default_value: Some(AnswerValue::Text(
            request
                .project_name()
                .unwrap_or(DEFAULT_PROJECT_NAME)
                .to_string(),
        )),
        page_size: None,
        active: activation.directory,
    };

    let selection_items: Vec<SelectItem> = choices.iter().map(SelectItem::from).collect();
    let selection = QuestionSpec {
        id: QuestionId::Selection,
        prompt: kind.selection_prompt.to_string(),
        page_size: Some(selection_items.len()),
        choices: Some(selection_items),
        default_value: None,
        active: activation.selection,
    };

    let install_mode = QuestionSpec {
        id: QuestionId::InstallMode,
        prompt: INSTALL_MODE_PROMPT.to_string(),
        choices: Some(vec![
            SelectItem::Option {
                label: "Quickstart (recommended)".to_string(),
                value: AnswerValue::Quickstart(true),
            },
            SelectItem::Option {
                label: "Custom (manual settings)".to_string(),
                value: AnswerValue::Quickstart(false),
            },
        ]),
        default_value: None,
        page_size: Some(2),
        active: activation.install_mode,
    };

    tracing::debug!(
        directory = directory.active,
        selection = selection.active,
        install_mode = install_mode.active,
        "planned questions"
    );

    [directory, selection, install_mode]
}
