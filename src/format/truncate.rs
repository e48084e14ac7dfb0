// Character-budget truncation for titles and labels. Lengths count Unicode
// scalar values, not bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncationPolicy {
    /// Never shorten.
    None,
    /// Keep the start: "A very long ti…"
    #[default]
    End,
    /// Keep both ends: "A very lo…title"
    Middle,
}

impl TruncationPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            TruncationPolicy::None => "none",
            TruncationPolicy::End => "end",
            TruncationPolicy::Middle => "middle",
        }
    }
}

impl fmt::Display for TruncationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TruncationPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TruncationPolicy::None),
            "end" => Ok(TruncationPolicy::End),
            "middle" => Ok(TruncationPolicy::Middle),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Shorten `text` to at most `max_length` characters using `policy`.
pub fn truncate_text(text: &str, max_length: usize, policy: TruncationPolicy) -> String {
    match policy {
        TruncationPolicy::None => text.to_string(),
        TruncationPolicy::End => truncate_text_end(text, max_length),
        TruncationPolicy::Middle => truncate_text_middle(text, max_length),
    }
}

/// Keep the first `max_length - 1` characters and append an ellipsis.
pub fn truncate_text_end(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    if max_length == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_length - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Keep roughly 60% of the budget from the start and the rest from the end,
/// joined by an ellipsis. Budgets below three fall back to end truncation.
pub fn truncate_text_middle(text: &str, max_length: usize) -> String {
    let len = text.chars().count();
    if len <= max_length {
        return text.to_string();
    }
    if max_length < 3 {
        return truncate_text_end(text, max_length);
    }

    // ceil(max_length * 0.6)
    let start_chars = (max_length * 3).div_ceil(5);
    let end_chars = max_length - start_chars - 1;

    let mut out: String = text.chars().take(start_chars).collect();
    out.push(ELLIPSIS);
    out.extend(text.chars().skip(len - end_chars));
    out
}
