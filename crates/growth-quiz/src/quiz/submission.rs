//! Append-only log of completed quizzes, one spreadsheet-style row per submission.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::ResultContent;
use super::domain::{Answer, ScoreVector};
use super::outcome::QuizOutcome;

/// Result fields echoed back by the client when it submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedResult {
    #[serde(rename = "type")]
    pub key: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub student: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_tips: Option<String>,
}

impl From<&ResultContent> for SubmittedResult {
    fn from(content: &ResultContent) -> Self {
        Self {
            key: content.key.clone(),
            title: content.title.clone(),
            body: content.body.clone(),
            detail: content.detail.clone(),
            usage: content.usage.clone(),
            student: content.student.clone(),
            experience_tips: content.experience_tips.clone(),
        }
    }
}

/// Body accepted by the submission endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(default)]
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub result: SubmittedResult,
    pub scores: ScoreVector,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SubmissionPayload {
    pub fn from_outcome(
        nickname: impl Into<String>,
        user_id: Option<String>,
        outcome: &QuizOutcome,
        answers: Vec<Answer>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            user_id,
            result: SubmittedResult::from(&outcome.content),
            scores: outcome.scores,
            answers,
            user_agent: None,
            ip_address: None,
            timestamp: None,
        }
    }
}

/// User id written for respondents who did not supply one.
pub const ANONYMOUS_USER_ID: &str = "匿名";

/// One row of the submission log. Column order follows field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub submitted_at: DateTime<Utc>,
    pub nickname: String,
    pub user_id: String,
    pub result_type: String,
    pub result_title: String,
    pub self_starter_score: u32,
    pub turning_point_score: u32,
    pub explorer_score: u32,
    pub reflective_score: u32,
    pub user_agent: String,
    pub ip_address: String,
    /// Raw answers as JSON text, kept for audits.
    pub answers: String,
    /// Time the client claims it finished; informational only.
    pub client_timestamp: Option<DateTime<Utc>>,
}

impl SubmissionRecord {
    pub fn from_payload(
        payload: SubmissionPayload,
        received_at: DateTime<Utc>,
    ) -> Result<Self, SubmissionError> {
        let answers = serde_json::to_string(&payload.answers)?;
        let user_id = payload
            .user_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| ANONYMOUS_USER_ID.to_string());

        Ok(Self {
            submitted_at: received_at,
            nickname: payload.nickname.trim().to_string(),
            user_id,
            result_type: payload.result.key,
            result_title: payload.result.title,
            self_starter_score: payload.scores.self_starter,
            turning_point_score: payload.scores.turning_point,
            explorer_score: payload.scores.explorer,
            reflective_score: payload.scores.reflective,
            user_agent: payload.user_agent.unwrap_or_default(),
            ip_address: payload.ip_address.unwrap_or_default(),
            answers,
            client_timestamp: payload.timestamp,
        })
    }

    pub fn scores(&self) -> ScoreVector {
        ScoreVector {
            self_starter: self.self_starter_score,
            turning_point: self.turning_point_score,
            explorer: self.explorer_score,
            reflective: self.reflective_score,
        }
    }
}

/// Storage abstraction for submissions so the service can run against files or memory.
pub trait SubmissionLog: Send + Sync {
    fn append(&self, record: SubmissionRecord) -> Result<(), SubmissionError>;
    /// The most recent `limit` records, oldest first.
    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, SubmissionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("failed to encode answers: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission log io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("submission log csv failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("submission log unavailable: {0}")]
    Unavailable(String),
}

/// CSV file log. The header row is written when the file is new or empty.
#[derive(Debug)]
pub struct CsvSubmissionLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvSubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionLog for CsvSubmissionLog {
    fn append(&self, record: SubmissionRecord) -> Result<(), SubmissionError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| SubmissionError::Unavailable("log lock poisoned".to_string()))?;

        let needs_header = fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(&record)?;
        writer.flush()?;
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, SubmissionError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| SubmissionError::Unavailable("log lock poisoned".to_string()))?;

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<SubmissionRecord>() {
            records.push(row?);
        }

        let skip = records.len().saturating_sub(limit);
        Ok(records.split_off(skip))
    }
}

/// Process-local log; records are lost on exit.
#[derive(Debug, Default, Clone)]
pub struct MemorySubmissionLog {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl MemorySubmissionLog {
    /// Snapshot of every record appended so far.
    pub fn records(&self) -> Vec<SubmissionRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SubmissionLog for MemorySubmissionLog {
    fn append(&self, record: SubmissionRecord) -> Result<(), SubmissionError> {
        self.records
            .lock()
            .map_err(|_| SubmissionError::Unavailable("log lock poisoned".to_string()))?
            .push(record);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, SubmissionError> {
        let records = self
            .records
            .lock()
            .map_err(|_| SubmissionError::Unavailable("log lock poisoned".to_string()))?;
        let skip = records.len().saturating_sub(limit);
        Ok(records[skip..].to_vec())
    }
}
