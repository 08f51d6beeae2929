//! Reference data the quiz scores against: the question bank, the result copy
//! keyed by result key, and the per-category characters.

mod standard;

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Category, Question, ResultKey};
use super::resolver::lookup;

/// Result copy shown for one result key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultContent {
    #[serde(rename = "type")]
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub title: String,
    pub body: String,
    pub detail: String,
    pub usage: String,
    /// Message addressed directly to the respondent.
    pub student: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_tips: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_detail: Option<String>,
}

/// Lookup table from result key to copy, with a default entry that always exists.
#[derive(Debug, Clone)]
pub struct ContentBank {
    entries: BTreeMap<String, ResultContent>,
    default_content: ResultContent,
}

impl ContentBank {
    pub fn new<I>(entries: I, default_key: &str) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = ResultContent>,
    {
        let mut map = BTreeMap::new();
        for content in entries {
            if map.contains_key(&content.key) {
                return Err(ContentError::DuplicateResultKey { key: content.key });
            }
            map.insert(content.key.clone(), content);
        }

        let default_content =
            map.get(default_key)
                .cloned()
                .ok_or_else(|| ContentError::MissingDefault {
                    key: default_key.to_string(),
                })?;

        Ok(Self {
            entries: map,
            default_content,
        })
    }

    /// Exact-match lookup with no fallback.
    pub fn get(&self, key: &str) -> Option<&ResultContent> {
        self.entries.get(key)
    }

    /// Content for `key`, or the default entry when the key has no copy of its own.
    pub fn lookup(&self, key: &ResultKey) -> &ResultContent {
        lookup(key, self)
    }

    /// True when `key` has copy written for it rather than relying on the default.
    pub fn is_curated(&self, key: &ResultKey) -> bool {
        self.entries.contains_key(&key.to_string())
    }

    pub fn default_key(&self) -> &str {
        &self.default_content.key
    }

    pub fn default_content(&self) -> &ResultContent {
        &self.default_content
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validated list of questions. Order carries no meaning; lookups go by ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(ContentError::DuplicateQuestion { id: question.id });
            }
            if question.options.is_empty() {
                return Err(ContentError::EmptyQuestion { id: question.id });
            }
            if let Some(index) = question.options.iter().position(|option| option.weight == 0) {
                return Err(ContentError::ZeroWeight {
                    question_id: question.id,
                    option: index,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Highest score a category can reach: the heaviest option of that
    /// category in each question, summed.
    pub fn max_possible(&self, category: Category) -> u32 {
        self.questions
            .iter()
            .filter_map(|question| {
                question
                    .options
                    .iter()
                    .filter(|option| option.category == category)
                    .map(|option| option.weight)
                    .max()
            })
            .sum()
    }
}

/// Persona shown alongside the dominant category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub category: Category,
    pub name: &'static str,
    pub nickname: &'static str,
    pub emoji: &'static str,
    pub personality: &'static str,
    pub catchphrase: &'static str,
    pub strengths: Vec<&'static str>,
    pub hobbies: Vec<&'static str>,
}

/// Everything the quiz needs at runtime, loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct QuizContent {
    pub questions: QuestionBank,
    pub results: ContentBank,
    characters: Vec<CharacterProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentBundle {
    questions: Vec<Question>,
    results: Vec<ResultContent>,
    #[serde(default = "default_result_key")]
    default_key: String,
}

fn default_result_key() -> String {
    Category::SelfStarter.key().to_string()
}

impl QuizContent {
    pub fn new(questions: QuestionBank, results: ContentBank) -> Self {
        Self {
            questions,
            results,
            characters: standard::characters(),
        }
    }

    /// Built-in question bank and result copy.
    pub fn standard() -> Result<Self, ContentError> {
        let questions = QuestionBank::new(standard::questions())?;
        let results = ContentBank::new(standard::results(), Category::SelfStarter.key())?;
        Ok(Self::new(questions, results))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let content = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            questions = content.questions.len(),
            results = content.results.len(),
            "loaded quiz content bundle"
        );
        Ok(content)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ContentError> {
        let bundle: ContentBundle = serde_json::from_reader(reader)?;
        let questions = QuestionBank::new(bundle.questions)?;
        let results = ContentBank::new(bundle.results, &bundle.default_key)?;
        Ok(Self::new(questions, results))
    }

    pub fn character_for(&self, category: Category) -> Option<&CharacterProfile> {
        self.characters
            .iter()
            .find(|character| character.category == category)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("default result key '{key}' has no content entry")]
    MissingDefault { key: String },
    #[error("result key '{key}' is defined more than once")]
    DuplicateResultKey { key: String },
    #[error("question {id} is defined more than once")]
    DuplicateQuestion { id: u32 },
    #[error("question {id} has no options")]
    EmptyQuestion { id: u32 },
    #[error("option {option} of question {question_id} has zero weight")]
    ZeroWeight { question_id: u32, option: usize },
    #[error("failed to read quiz content: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid quiz content JSON: {0}")]
    Json(#[from] serde_json::Error),
}
