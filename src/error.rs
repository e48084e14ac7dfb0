// Errors raised when parsing selector names (presets, policies, zones).
// Formatters themselves never fail; they degrade to displayable text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown format preset `{0}`")]
    UnknownPreset(String),

    #[error("unknown truncation policy `{0}` (expected none, end or middle)")]
    UnknownPolicy(String),

    #[error("invalid time zone `{0}` (expected local, utc or an offset like +02:00)")]
    InvalidZone(String),
}

pub type Result<T> = std::result::Result<T, Error>;
