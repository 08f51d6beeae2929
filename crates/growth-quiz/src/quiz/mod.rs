//! Growth-type quiz: answer aggregation, result resolution, result copy, and the
//! submission log.
//!
//! Data flows one way: answers and the question bank feed [`aggregate`], the
//! resulting [`ScoreVector`] feeds [`resolve`], and the [`ResultKey`] selects copy
//! from the [`ContentBank`] through [`lookup`]. Every step is a pure function over
//! its inputs; [`QuizService`] only adds logging and the submission log.

pub mod content;
pub mod domain;
pub mod outcome;
pub mod resolver;
pub mod router;
pub mod scoring;
pub mod service;
pub mod sheet;
pub mod submission;

#[cfg(test)]
mod tests;

pub use content::{
    CharacterProfile, ContentBank, ContentError, QuestionBank, QuizContent, ResultContent,
};
pub use domain::{
    Answer, Category, Question, QuizOption, ResultKey, ResultKeyParseError, ScoreVector,
    KEY_SEPARATOR,
};
pub use outcome::{evaluate, QuizOutcome, ScoreBreakdownEntry};
pub use resolver::{find_content, lookup, resolve, resolve_with, ContentMatch, TiePolicy};
pub use router::quiz_router;
pub use scoring::{aggregate, ScoringError};
pub use service::{QuizService, QuizServiceError, SubmissionReceipt};
pub use sheet::AnswerSheet;
pub use submission::{
    CsvSubmissionLog, MemorySubmissionLog, SubmissionError, SubmissionLog, SubmissionPayload,
    SubmissionRecord, SubmittedResult, ANONYMOUS_USER_ID,
};
