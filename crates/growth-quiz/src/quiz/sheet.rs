use serde::{Deserialize, Serialize};

use super::content::QuestionBank;
use super::domain::Answer;

/// Answers collected while a respondent works through the quiz.
///
/// Recording a second answer for a question replaces the first, so the sheet
/// holds at most one answer per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: u32, selected_option: usize) {
        match self
            .answers
            .iter_mut()
            .find(|answer| answer.question_id == question_id)
        {
            Some(existing) => existing.selected_option = selected_option,
            None => self
                .answers
                .push(Answer::new(question_id, selected_option)),
        }
    }

    pub fn selected(&self, question_id: u32) -> Option<usize> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
            .map(|answer| answer.selected_option)
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.questions()
            .iter()
            .all(|question| self.selected(question.id).is_some())
    }

    /// Share of the bank's questions that have an answer, rounded to a whole percent.
    pub fn progress_percent(&self, bank: &QuestionBank) -> u32 {
        if bank.is_empty() {
            return 0;
        }
        let answered = bank
            .questions()
            .iter()
            .filter(|question| self.selected(question.id).is_some())
            .count();
        ((answered as f64 / bank.len() as f64) * 100.0).round() as u32
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn into_answers(self) -> Vec<Answer> {
        self.answers
    }
}

impl FromIterator<Answer> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut sheet = AnswerSheet::new();
        for answer in iter {
            sheet.record(answer.question_id, answer.selected_option);
        }
        sheet
    }
}
