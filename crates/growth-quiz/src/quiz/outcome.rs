use serde::Serialize;

use super::content::{QuizContent, ResultContent};
use super::domain::{Answer, Category, ResultKey, ScoreVector};
use super::resolver::{find_content, resolve_with, TiePolicy};
use super::scoring::{aggregate, ScoringError};

/// One bar of the score chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdownEntry {
    pub category: Category,
    pub label: &'static str,
    pub score: u32,
    pub max_possible: u32,
    pub percentage: u32,
}

/// Everything the result view needs after the last question is answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub result_key: ResultKey,
    /// False when the key had no copy of its own and the default entry was used.
    pub matched: bool,
    pub content: ResultContent,
    pub scores: ScoreVector,
    pub dominant: Category,
    pub breakdown: Vec<ScoreBreakdownEntry>,
}

impl QuizOutcome {
    pub fn from_scores(scores: ScoreVector, content: &QuizContent, policy: TiePolicy) -> Self {
        let result_key = resolve_with(&scores, policy);
        let found = find_content(&result_key, &content.results);

        let breakdown = scores
            .iter()
            .map(|(category, score)| {
                let max_possible = content.questions.max_possible(category);
                ScoreBreakdownEntry {
                    category,
                    label: category.label(),
                    score,
                    max_possible,
                    percentage: scores.percentage_of(category, max_possible),
                }
            })
            .collect();

        Self {
            matched: found.is_exact(),
            content: found.content().clone(),
            dominant: scores.dominant(),
            result_key,
            scores,
            breakdown,
        }
    }

    pub fn share_text(&self) -> String {
        format!(
            "My growth type is \"{}\"!\n\n{}\n{}\n\n#GrowthTypeQuiz",
            self.content.key, self.content.title, self.content.body
        )
    }
}

/// Scores a finished answer list and resolves it to result copy.
pub fn evaluate(
    answers: &[Answer],
    content: &QuizContent,
    policy: TiePolicy,
) -> Result<QuizOutcome, ScoringError> {
    let scores = aggregate(answers, content.questions.questions())?;
    Ok(QuizOutcome::from_scores(scores, content, policy))
}
