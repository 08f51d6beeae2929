use crate::infra::{load_content, parse_answer, read_answers_file};
use clap::Args;
use growth_quiz::config::AppConfig;
use growth_quiz::error::AppError;
use growth_quiz::quiz::{
    Answer, AnswerSheet, CsvSubmissionLog, QuizContent, QuizOutcome, QuizService,
    SubmissionPayload,
};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Answer as `<questionId>:<optionIndex>`; repeat for each question
    #[arg(long = "answer", value_parser = parse_answer)]
    pub(crate) answers: Vec<Answer>,
    /// JSON file holding answers; `--answer` values override matching questions
    #[arg(long)]
    pub(crate) answers_file: Option<PathBuf>,
    /// Record the result in the submission log under this nickname
    #[arg(long)]
    pub(crate) nickname: Option<String>,
    /// Print the outcome as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Print the question bank as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        answers_file,
        nickname,
        json,
    } = args;

    let config = AppConfig::load()?;
    let content = Arc::new(load_content(&config.quiz)?);
    let log = Arc::new(CsvSubmissionLog::new(config.quiz.submission_log.clone()));
    let service = QuizService::new(content, log, config.quiz.tie_policy);

    let mut sheet: AnswerSheet = match answers_file {
        Some(path) => read_answers_file(&path)?.into_iter().collect(),
        None => AnswerSheet::new(),
    };
    for answer in answers {
        sheet.record(answer.question_id, answer.selected_option);
    }

    let outcome = service.evaluate(sheet.answers())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render_outcome(&outcome, service.content(), &sheet));
    }

    if let Some(nickname) = nickname {
        let payload =
            SubmissionPayload::from_outcome(nickname, None, &outcome, sheet.into_answers());
        let receipt = service.submit(payload)?;
        println!(
            "\nSubmission recorded as {} in {}",
            receipt.user_id,
            config.quiz.submission_log.display()
        );
    }

    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let content = load_content(&config.quiz)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&content.questions)?);
    } else {
        print!("{}", render_questions(&content));
    }
    Ok(())
}

pub(crate) fn render_questions(content: &QuizContent) -> String {
    let mut out = String::new();
    for question in content.questions.questions() {
        let _ = writeln!(out, "Q{}. {}", question.id, question.prompt);
        for (index, option) in question.options.iter().enumerate() {
            let _ = writeln!(out, "  [{index}] {}", option.text);
        }
    }
    out
}

pub(crate) fn render_outcome(
    outcome: &QuizOutcome,
    content: &QuizContent,
    sheet: &AnswerSheet,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Answered {} of {} questions ({}%)",
        sheet.answered(),
        content.questions.len(),
        sheet.progress_percent(&content.questions)
    );
    let _ = writeln!(out, "\nGrowth type: {}", outcome.result_key);
    if !outcome.matched {
        let _ = writeln!(
            out,
            "  (no dedicated copy for this combination, showing {})",
            outcome.content.key
        );
    }

    let _ = writeln!(out, "\n{}", outcome.content.title);
    let _ = writeln!(out, "{}", outcome.content.body);
    if !outcome.content.jobs.is_empty() {
        let _ = writeln!(out, "\nSuggested fields: {}", outcome.content.jobs.join(", "));
    }

    let _ = writeln!(out, "\nScores");
    for entry in &outcome.breakdown {
        let _ = writeln!(
            out,
            "  {:<14} {:>3} / {:<3} {:>3}%",
            entry.label, entry.score, entry.max_possible, entry.percentage
        );
    }

    if let Some(character) = content.character_for(outcome.dominant) {
        let _ = writeln!(
            out,
            "\nYour guide: {} {} ({}) \"{}\"",
            character.emoji, character.name, character.nickname, character.catchphrase
        );
    }

    let _ = writeln!(out, "\nShare:\n{}", outcome.share_text());
    out
}
