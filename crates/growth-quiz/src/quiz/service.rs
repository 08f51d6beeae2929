use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::content::{QuestionBank, QuizContent};
use super::domain::Answer;
use super::outcome::{evaluate, QuizOutcome};
use super::resolver::TiePolicy;
use super::scoring::ScoringError;
use super::submission::{SubmissionError, SubmissionLog, SubmissionPayload, SubmissionRecord};

/// Service composing the shared quiz content, the scoring pipeline, and the submission log.
pub struct QuizService<L> {
    content: Arc<QuizContent>,
    log: Arc<L>,
    tie_policy: TiePolicy,
}

/// Acknowledgement returned once a submission is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub user_id: String,
    pub result_type: String,
    pub submitted_at: DateTime<Utc>,
}

impl<L> QuizService<L>
where
    L: SubmissionLog + 'static,
{
    pub fn new(content: Arc<QuizContent>, log: Arc<L>, tie_policy: TiePolicy) -> Self {
        Self {
            content,
            log,
            tie_policy,
        }
    }

    pub fn content(&self) -> &QuizContent {
        &self.content
    }

    pub fn questions(&self) -> &QuestionBank {
        &self.content.questions
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    /// Score a completed answer list and resolve the result copy.
    pub fn evaluate(&self, answers: &[Answer]) -> Result<QuizOutcome, QuizServiceError> {
        let outcome = evaluate(answers, &self.content, self.tie_policy)?;
        info!(
            answers = answers.len(),
            result_key = %outcome.result_key,
            matched = outcome.matched,
            "quiz evaluated"
        );
        Ok(outcome)
    }

    /// Append a submission to the log.
    pub fn submit(
        &self,
        payload: SubmissionPayload,
    ) -> Result<SubmissionReceipt, QuizServiceError> {
        let record = SubmissionRecord::from_payload(payload, Utc::now())?;
        let receipt = SubmissionReceipt {
            user_id: record.user_id.clone(),
            result_type: record.result_type.clone(),
            submitted_at: record.submitted_at,
        };

        self.log.append(record)?;
        info!(
            user_id = %receipt.user_id,
            result_type = %receipt.result_type,
            "quiz submission recorded"
        );
        Ok(receipt)
    }

    pub fn recent_submissions(
        &self,
        limit: usize,
    ) -> Result<Vec<SubmissionRecord>, QuizServiceError> {
        Ok(self.log.recent(limit)?)
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
