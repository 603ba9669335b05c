//! Running planned questions against a prompt backend

use super::planner::{AnswerValue, QuestionId, QuestionSpec};
use crate::error::ScaffoldError;
use std::collections::BTreeMap;

/// Something that can put one question to the user and return the answer
///
/// The terminal implementation lives in the `tui` module; tests script it.
pub trait Prompter {
    fn ask(&mut self, question: &QuestionSpec) -> Result<AnswerValue, ScaffoldError>;
}

/// Answers to the questions that were actually asked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAnswers {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl ResolvedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, value: AnswerValue) {
        self.values.insert(id, value);
    }

    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.values.get(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for ResolvedAnswers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Ask the active questions in order. Inactive ones are skipped without
/// touching the prompter; the first error stops the session.
pub fn resolve<P: Prompter>(
    questions: &[QuestionSpec],
    prompter: &mut P,
) -> Result<ResolvedAnswers, ScaffoldError> {
    let mut answers = ResolvedAnswers::new();

    for question in questions.iter().filter(|q| q.is_active()) {
        let value = prompter.ask(question)?;
        tracing::debug!(question = %question.id(), "answered");
        answers.insert(question.id(), value);
    }

    Ok(answers)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Prompter double replaying canned answers and recording what was asked
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Result<AnswerValue, ScaffoldError>>,
        pub asked: Vec<QuestionId>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: Vec<AnswerValue>) -> Self {
            Self {
                answers: answers.into_iter().map(Ok).collect(),
                asked: Vec::new(),
            }
        }

        pub fn aborting_after(answers: Vec<AnswerValue>) -> Self {
            let mut prompter = Self::new(answers);
            prompter.answers.push_back(Err(ScaffoldError::InputAborted));
            prompter
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &QuestionSpec) -> Result<AnswerValue, ScaffoldError> {
            self.asked.push(question.id());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer for {}", question.id()))
        }
    }
}
