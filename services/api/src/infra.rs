use growth_quiz::config::QuizConfig;
use growth_quiz::error::AppError;
use growth_quiz::quiz::{Answer, ContentError, QuizContent};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured content bundle, or the built-in content when none is set.
pub(crate) fn load_content(config: &QuizConfig) -> Result<QuizContent, ContentError> {
    match &config.content_path {
        Some(path) => QuizContent::from_path(path),
        None => QuizContent::standard(),
    }
}

/// Parses `<questionId>:<optionIndex>`.
pub(crate) fn parse_answer(raw: &str) -> Result<Answer, String> {
    let (question, option) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected '<question>:<option>' but got '{raw}'"))?;
    let question_id = question
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid question id in '{raw}' ({err})"))?;
    let selected_option = option
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid option index in '{raw}' ({err})"))?;
    Ok(Answer::new(question_id, selected_option))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswersFile {
    List(Vec<Answer>),
    Wrapped { answers: Vec<Answer> },
}

/// Reads answers from JSON: either a bare array or `{ "answers": [...] }`.
pub(crate) fn read_answers_file(path: &Path) -> Result<Vec<Answer>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers = match serde_json::from_str::<AnswersFile>(&raw)? {
        AnswersFile::List(answers) | AnswersFile::Wrapped { answers } => answers,
    };
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answer_pairs() {
        assert_eq!(parse_answer(" 7:2 "), Ok(Answer::new(7, 2)));
        assert!(parse_answer("7").is_err());
        assert!(parse_answer("x:1").is_err());
        assert!(parse_answer("1:-1").is_err());
    }

    #[test]
    fn reads_both_answer_file_shapes() {
        let dir = std::env::temp_dir();
        let bare = dir.join(format!("growth-quiz-answers-bare-{}.json", std::process::id()));
        let wrapped = dir.join(format!("growth-quiz-answers-wrapped-{}.json", std::process::id()));
        std::fs::write(&bare, r#"[{"questionId":1,"selectedOption":2}]"#).expect("write");
        std::fs::write(
            &wrapped,
            r#"{"answers":[{"questionId":3,"selectedOption":0}]}"#,
        )
        .expect("write");

        assert_eq!(read_answers_file(&bare).expect("bare"), vec![Answer::new(1, 2)]);
        assert_eq!(
            read_answers_file(&wrapped).expect("wrapped"),
            vec![Answer::new(3, 0)]
        );

        let _ = std::fs::remove_file(bare);
        let _ = std::fs::remove_file(wrapped);
    }

    #[test]
    fn falls_back_to_standard_content() {
        let config = QuizConfig {
            content_path: None,
            submission_log: "unused.csv".into(),
            tie_policy: Default::default(),
        };
        let content = load_content(&config).expect("standard content");
        assert_eq!(content.questions.len(), 10);
    }
}
