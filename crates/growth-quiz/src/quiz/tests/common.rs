use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::quiz::content::{ContentBank, QuestionBank, QuizContent, ResultContent};
use crate::quiz::domain::{Category, Question, QuizOption};
use crate::quiz::resolver::TiePolicy;
use crate::quiz::service::QuizService;
use crate::quiz::submission::{
    MemorySubmissionLog as MemoryLog, SubmissionError, SubmissionLog, SubmissionRecord,
};

fn option(category: Category, weight: u32) -> QuizOption {
    QuizOption {
        text: format!("{} leaning answer", category.label()),
        category,
        weight,
    }
}

/// Four questions with uneven weights:
/// - 1: SelfStarter 2, TurningPoint 1, Explorer 1, Reflective 1
/// - 2: SelfStarter 3, TurningPoint 3, Explorer 1, Reflective 2
/// - 3: SelfStarter 1, TurningPoint 2, Explorer 2, Reflective 2
/// - 4: Explorer 1, Reflective 4
pub(super) fn questions() -> Vec<Question> {
    use crate::quiz::domain::Category::*;
    vec![
        Question {
            id: 1,
            prompt: "Starting something new".to_string(),
            options: vec![
                option(SelfStarter, 2),
                option(TurningPoint, 1),
                option(Explorer, 1),
                option(Reflective, 1),
            ],
        },
        Question {
            id: 2,
            prompt: "After a setback".to_string(),
            options: vec![
                option(SelfStarter, 3),
                option(TurningPoint, 3),
                option(Explorer, 1),
                option(Reflective, 2),
            ],
        },
        Question {
            id: 3,
            prompt: "A free afternoon".to_string(),
            options: vec![
                option(SelfStarter, 1),
                option(TurningPoint, 2),
                option(Explorer, 2),
                option(Reflective, 2),
            ],
        },
        Question {
            id: 4,
            prompt: "Looking back".to_string(),
            options: vec![option(Explorer, 1), option(Reflective, 4)],
        },
    ]
}

pub(super) fn result_copy(key: &str, title: &str) -> ResultContent {
    ResultContent {
        key: key.to_string(),
        display_name: None,
        title: title.to_string(),
        body: format!("{title} body"),
        detail: format!("{title} detail"),
        usage: format!("{title} usage"),
        student: format!("{title} message"),
        experience_tips: None,
        jobs: Vec::new(),
        jobs_detail: None,
    }
}

/// Copy for each single category plus one curated mixed key.
pub(super) fn content_bank() -> ContentBank {
    let mut entries: Vec<ResultContent> = Category::ALL
        .into_iter()
        .map(|category| result_copy(category.key(), category.label()))
        .collect();
    entries.push(result_copy("自発型・転機型", "Mixed starter"));
    ContentBank::new(entries, Category::SelfStarter.key()).expect("fixture bank is valid")
}

pub(super) fn content() -> QuizContent {
    QuizContent::new(
        QuestionBank::new(questions()).expect("fixture questions are valid"),
        content_bank(),
    )
}

pub(super) struct UnavailableLog;

impl SubmissionLog for UnavailableLog {
    fn append(&self, _record: SubmissionRecord) -> Result<(), SubmissionError> {
        Err(SubmissionError::Unavailable("sheet offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<SubmissionRecord>, SubmissionError> {
        Err(SubmissionError::Unavailable("sheet offline".to_string()))
    }
}

pub(super) fn build_service(policy: TiePolicy) -> (Arc<QuizService<MemoryLog>>, MemoryLog) {
    let log = MemoryLog::default();
    let service = Arc::new(QuizService::new(
        Arc::new(content()),
        Arc::new(log.clone()),
        policy,
    ));
    (service, log)
}

pub(super) async fn response_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
