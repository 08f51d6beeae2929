use tracing::debug;

use super::domain::{Answer, Question, ScoreVector};

/// Raised when an answer cannot be applied to the question it names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error(
        "answer for question {question_id} selects option {selected_option}, but the question has {option_count} option(s)"
    )]
    OptionOutOfRange {
        question_id: u32,
        selected_option: usize,
        option_count: usize,
    },
}

/// Folds the answer list into per-category scores.
///
/// Answers naming a question that is not in `questions` contribute nothing.
/// Repeated answers for the same question each contribute their weight.
pub fn aggregate(answers: &[Answer], questions: &[Question]) -> Result<ScoreVector, ScoringError> {
    let mut scores = ScoreVector::default();

    for answer in answers {
        let Some(question) = questions
            .iter()
            .find(|question| question.id == answer.question_id)
        else {
            debug!(
                question_id = answer.question_id,
                "skipping answer for unknown question"
            );
            continue;
        };

        let option =
            question
                .option(answer.selected_option)
                .ok_or(ScoringError::OptionOutOfRange {
                    question_id: question.id,
                    selected_option: answer.selected_option,
                    option_count: question.options.len(),
                })?;

        scores.add(option.category, option.weight);
    }

    Ok(scores)
}
