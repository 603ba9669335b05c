//! Question planning, resolution and merging
//!
//! This module provides:
//! - The planner deciding which questions are still needed
//! - The resolver running active questions against a [`Prompter`]
//! - The merger producing the final [`ScaffoldConfig`]

pub mod merge;
pub mod planner;
pub mod resolver;

pub use merge::{merge, ScaffoldConfig};
pub use planner::{
    plan, Activation, AnswerValue, QuestionId, QuestionSpec, SelectItem,
    DEFAULT_PROJECT_NAME,
};
pub use resolver::{resolve, Prompter, ResolvedAnswers};
