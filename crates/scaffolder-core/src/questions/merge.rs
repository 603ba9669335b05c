//! Merging command-line input with prompt answers

use super::planner::{Activation, AnswerValue, QuestionId};
use super::resolver::ResolvedAnswers;
use crate::error::ScaffoldError;
use crate::request::{GeneratorFlags, ScaffoldRequest};
use serde::Serialize;

/// Fully resolved configuration handed to the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldConfig {
    pub project_name: String,
    /// Repository URL of the chosen template/starter, `None` when declined
    pub template: Option<String>,
    pub quickstart: bool,
    #[serde(flatten)]
    pub flags: GeneratorFlags,
}

/// Combine the request with the answers of the questions that were asked.
///
/// Activation is recomputed from the request, and answers to questions that
/// were not active are ignored. A supplied value is never overwritten, and an
/// answer wins for every question the request left open.
pub fn merge(
    request: &ScaffoldRequest,
    answers: &ResolvedAnswers,
) -> Result<ScaffoldConfig, ScaffoldError> {
    let activation = Activation::for_request(request);
    let answer = |id: QuestionId| answers.get(id).filter(|_| activation.is_active(id));

    let project_name = match answer(QuestionId::Directory) {
        Some(AnswerValue::Text(name)) if !name.is_empty() => name.clone(),
        _ => request
            .project_name()
            .map(str::to_string)
            .ok_or(ScaffoldError::Unresolved(QuestionId::Directory))?,
    };

    let template = match answer(QuestionId::Selection) {
        Some(AnswerValue::Template(selected)) => selected.clone(),
        _ => request.template_reference().map(str::to_string),
    };

    let quickstart = match answer(QuestionId::InstallMode) {
        Some(AnswerValue::Quickstart(quick)) => *quick,
        _ => request
            .use_quickstart()
            .ok_or(ScaffoldError::Unresolved(QuestionId::InstallMode))?,
    };

    let config = ScaffoldConfig {
        project_name,
        template,
        quickstart,
        flags: request.flags().clone(),
    };
    tracing::debug!(
        project = %config.project_name,
        template = ?config.template,
        quickstart = config.quickstart,
        "merged configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DatabaseOptions;

    fn request(name: Option<&str>, template: Option<&str>, quick: Option<bool>) -> ScaffoldRequest {
        ScaffoldRequest::new(
            name.map(String::from),
            template.map(String::from),
            quick,
            GeneratorFlags::default(),
        )
    }

    #[test]
    fn test_answers_fill_missing_fields() {
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("demo".to_string())),
            (QuestionId::Selection, AnswerValue::Template(None)),
            (QuestionId::InstallMode, AnswerValue::Quickstart(true)),
        ]
        .into_iter()
        .collect();

        let config = merge(&request(None, None, None), &answers).unwrap();

        assert_eq!(config.project_name, "demo");
        assert_eq!(config.template, None);
        assert!(config.quickstart);
    }

    #[test]
    fn test_supplied_fields_pass_through_without_answers() {
        let req = request(Some("app"), Some("https://github.com/x/y"), Some(true));
        let config = merge(&req, &ResolvedAnswers::new()).unwrap();

        assert_eq!(config.project_name, "app");
        assert_eq!(config.template.as_deref(), Some("https://github.com/x/y"));
        assert!(config.quickstart);
    }

    #[test]
    fn test_explicit_false_quickstart_is_kept() {
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("demo".to_string())),
            (QuestionId::Selection, AnswerValue::Template(None)),
        ]
        .into_iter()
        .collect();

        let config = merge(&request(None, None, Some(false)), &answers).unwrap();
        assert!(!config.quickstart);
    }

    #[test]
    fn test_custom_install_answer_is_false_not_fallback() {
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("demo".to_string())),
            (QuestionId::Selection, AnswerValue::Template(None)),
            (QuestionId::InstallMode, AnswerValue::Quickstart(false)),
        ]
        .into_iter()
        .collect();

        let config = merge(&request(None, None, None), &answers).unwrap();
        assert!(!config.quickstart);
    }

    #[test]
    fn test_selecting_none_clears_template() {
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("demo".to_string())),
            (QuestionId::Selection, AnswerValue::Template(None)),
        ]
        .into_iter()
        .collect();

        let config = merge(&request(Some("demo"), None, Some(true)), &answers).unwrap();
        assert_eq!(config.template, None);
    }

    #[test]
    fn test_missing_name_and_answer_is_unresolved() {
        let err = merge(&request(None, None, Some(true)), &ResolvedAnswers::new()).unwrap_err();
        assert!(matches!(err, ScaffoldError::Unresolved(QuestionId::Directory)));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let flags = GeneratorFlags {
            database: DatabaseOptions {
                client: Some("sqlite".to_string()),
                file: Some(".tmp/data.db".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let req = ScaffoldRequest::new(
            None,
            Some("https://github.com/x/y".to_string()),
            None,
            flags,
        );
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("demo".to_string())),
            (QuestionId::InstallMode, AnswerValue::Quickstart(false)),
        ]
        .into_iter()
        .collect();

        let first = merge(&req, &answers).unwrap();
        let second = merge(&req, &answers).unwrap();
        assert_eq!(first, second);
        assert_eq!(&first.flags, req.flags());
    }

    #[test]
    fn test_answers_to_inactive_questions_are_ignored() {
        let req = request(Some("app"), Some("https://github.com/x/y"), Some(false));
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("other".to_string())),
            (QuestionId::Selection, AnswerValue::Template(None)),
            (QuestionId::InstallMode, AnswerValue::Quickstart(true)),
        ]
        .into_iter()
        .collect();

        let config = merge(&req, &answers).unwrap();

        assert_eq!(config.project_name, "app");
        assert_eq!(config.template.as_deref(), Some("https://github.com/x/y"));
        assert!(!config.quickstart);
    }

    #[test]
    fn test_directory_answer_wins_when_template_missing() {
        let answers: ResolvedAnswers = [
            (QuestionId::Directory, AnswerValue::Text("renamed".to_string())),
            (QuestionId::Selection, AnswerValue::Template(None)),
        ]
        .into_iter()
        .collect();

        let config = merge(&request(Some("app"), None, Some(true)), &answers).unwrap();
        assert_eq!(config.project_name, "renamed");
    }
}
