use serde::{Deserialize, Serialize};
use tracing::debug;

use super::content::{ContentBank, ResultContent};
use super::domain::{Category, ResultKey, ScoreVector};

/// How a tie across all four categories is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// A four-way tie resolves to the first category alone.
    #[default]
    CollapseToFirst,
    /// A four-way tie resolves to a key naming all four categories.
    CombineAll,
}

impl TiePolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "collapse" | "collapse_to_first" | "first" => Some(Self::CollapseToFirst),
            "combine" | "combine_all" | "all" => Some(Self::CombineAll),
            _ => None,
        }
    }
}

/// Picks the result key for a score vector using the default tie policy.
pub fn resolve(scores: &ScoreVector) -> ResultKey {
    resolve_with(scores, TiePolicy::default())
}

pub fn resolve_with(scores: &ScoreVector, policy: TiePolicy) -> ResultKey {
    let leaders = scores.leaders();

    if leaders.len() == Category::ALL.len() && policy == TiePolicy::CollapseToFirst {
        return ResultKey::single(scores.dominant());
    }

    ResultKey::combined(leaders).unwrap_or_else(|| ResultKey::single(scores.dominant()))
}

/// Result of a content lookup, recording whether the default entry stood in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentMatch<'a> {
    Exact(&'a ResultContent),
    Fallback(&'a ResultContent),
}

impl<'a> ContentMatch<'a> {
    pub fn content(&self) -> &'a ResultContent {
        match self {
            ContentMatch::Exact(content) | ContentMatch::Fallback(content) => content,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, ContentMatch::Exact(_))
    }
}

pub fn find_content<'a>(key: &ResultKey, bank: &'a ContentBank) -> ContentMatch<'a> {
    let rendered = key.to_string();
    match bank.get(&rendered) {
        Some(content) => ContentMatch::Exact(content),
        None => {
            debug!(key = %rendered, fallback = bank.default_key(), "no result copy for key");
            ContentMatch::Fallback(bank.default_content())
        }
    }
}

/// Content for `key`, or the bank's default entry when the key is unmapped.
pub fn lookup<'a>(key: &ResultKey, bank: &'a ContentBank) -> &'a ResultContent {
    find_content(key, bank).content()
}
