//! Rendering configuration for printed sequences

use std::fmt::Display;

use crate::combinator::take;

/// Values printed from an unbounded sequence when no limit is set
pub const DEFAULT_UNBOUNDED_LIMIT: usize = 10;

/// How a sequence is turned into text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputConfig {
    /// Text placed between values
    pub separator: String,

    /// Maximum number of values to render (`None` renders everything)
    pub limit: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            limit: None,
        }
    }
}

impl OutputConfig {
    /// Same configuration, but never unbounded
    ///
    /// Used for producers that never exhaust on their own.
    pub fn bounded(&self) -> Self {
        Self {
            separator: self.separator.clone(),
            limit: Some(self.limit.unwrap_or(DEFAULT_UNBOUNDED_LIMIT)),
        }
    }

    /// Render `sequence`, stopping at the limit without pulling further
    pub fn render<S>(&self, sequence: S) -> String
    where
        S: IntoIterator,
        S::Item: Display,
    {
        let limit = self.limit.unwrap_or(usize::MAX);
        take(sequence, limit)
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}
