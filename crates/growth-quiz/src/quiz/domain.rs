use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator placed between category keys when several categories share the top score.
pub const KEY_SEPARATOR: char = '・';

/// The four growth-style axes a quiz answer can contribute to.
///
/// Variant order is the canonical order used for tie-breaking and for every
/// listing of scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "自発型")]
    SelfStarter,
    #[serde(rename = "転機型")]
    TurningPoint,
    #[serde(rename = "探求型")]
    Explorer,
    #[serde(rename = "内省型")]
    Reflective,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::SelfStarter,
        Category::TurningPoint,
        Category::Explorer,
        Category::Reflective,
    ];

    /// Stable key shared with the content bank, the submission payload and the log columns.
    pub const fn key(self) -> &'static str {
        match self {
            Category::SelfStarter => "自発型",
            Category::TurningPoint => "転機型",
            Category::Explorer => "探求型",
            Category::Reflective => "内省型",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::SelfStarter => "Self-starter",
            Category::TurningPoint => "Turning point",
            Category::Explorer => "Explorer",
            Category::Reflective => "Reflective",
        }
    }

    /// Accepts either the stable key or the snake_case English name.
    pub fn from_key(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL.into_iter().find(|category| {
            category.key() == trimmed || category.slug().eq_ignore_ascii_case(trimmed)
        })
    }

    const fn slug(self) -> &'static str {
        match self {
            Category::SelfStarter => "self_starter",
            Category::TurningPoint => "turning_point",
            Category::Explorer => "explorer",
            Category::Reflective => "reflective",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One selectable answer. Options are addressed by position inside their question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&QuizOption> {
        self.options.get(index)
    }
}

/// The option a respondent picked for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    pub selected_option: usize,
}

impl Answer {
    pub const fn new(question_id: u32, selected_option: usize) -> Self {
        Self {
            question_id,
            selected_option,
        }
    }
}

/// Accumulated weight per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "自発型", default)]
    pub self_starter: u32,
    #[serde(rename = "転機型", default)]
    pub turning_point: u32,
    #[serde(rename = "探求型", default)]
    pub explorer: u32,
    #[serde(rename = "内省型", default)]
    pub reflective: u32,
}

impl ScoreVector {
    pub const fn get(&self, category: Category) -> u32 {
        match category {
            Category::SelfStarter => self.self_starter,
            Category::TurningPoint => self.turning_point,
            Category::Explorer => self.explorer,
            Category::Reflective => self.reflective,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::SelfStarter => &mut self.self_starter,
            Category::TurningPoint => &mut self.turning_point,
            Category::Explorer => &mut self.explorer,
            Category::Reflective => &mut self.reflective,
        }
    }

    pub fn add(&mut self, category: Category, weight: u32) {
        let slot = self.slot_mut(category);
        *slot = slot.saturating_add(weight);
    }

    /// Scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn total(&self) -> u32 {
        self.iter()
            .fold(0u32, |sum, (_, score)| sum.saturating_add(score))
    }

    pub fn max(&self) -> u32 {
        self.iter().map(|(_, score)| score).max().unwrap_or(0)
    }

    /// Every category holding the maximum score, in canonical order. Never empty.
    pub fn leaders(&self) -> Vec<Category> {
        let max = self.max();
        self.iter()
            .filter(|(_, score)| *score == max)
            .map(|(category, _)| category)
            .collect()
    }

    /// First category (canonical order) holding the maximum score.
    pub fn dominant(&self) -> Category {
        self.iter()
            .fold((Category::SelfStarter, 0u32), |best, (category, score)| {
                if score > best.1 {
                    (category, score)
                } else {
                    best
                }
            })
            .0
    }

    /// Rounded share of `max_possible`; zero when nothing was attainable.
    pub fn percentage_of(&self, category: Category, max_possible: u32) -> u32 {
        if max_possible == 0 {
            return 0;
        }
        ((f64::from(self.get(category)) / f64::from(max_possible)) * 100.0).round() as u32
    }
}

/// Canonical identifier of a quiz result: one category, or the tied leaders
/// joined by [`KEY_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultKey {
    categories: Vec<Category>,
}

impl ResultKey {
    pub fn single(category: Category) -> Self {
        Self {
            categories: vec![category],
        }
    }

    /// Builds a key from any set of categories, normalizing to canonical order.
    /// Returns `None` for an empty set.
    pub fn combined<I>(categories: I) -> Option<Self>
    where
        I: IntoIterator<Item = Category>,
    {
        let mut categories: Vec<Category> = categories.into_iter().collect();
        categories.sort();
        categories.dedup();
        if categories.is_empty() {
            None
        } else {
            Some(Self { categories })
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn primary(&self) -> Category {
        self.categories[0]
    }

    pub fn is_mixed(&self) -> bool {
        self.categories.len() > 1
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, category) in self.categories.iter().enumerate() {
            if index > 0 {
                write!(f, "{KEY_SEPARATOR}")?;
            }
            f.write_str(category.key())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResultKeyParseError {
    #[error("result key is empty")]
    Empty,
    #[error("unknown category '{0}' in result key")]
    UnknownCategory(String),
}

impl FromStr for ResultKey {
    type Err = ResultKeyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut categories = Vec::new();
        for segment in raw.split(KEY_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(ResultKeyParseError::Empty);
            }
            let category = Category::from_key(segment)
                .ok_or_else(|| ResultKeyParseError::UnknownCategory(segment.to_string()))?;
            categories.push(category);
        }
        Self::combined(categories).ok_or(ResultKeyParseError::Empty)
    }
}

impl Serialize for ResultKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResultKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
