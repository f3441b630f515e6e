use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse sentiment of a free-text answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a model's native label onto the three coarse categories.
    ///
    /// Matching is case-insensitive but otherwise exact. Anything other than
    /// `positive` or `negative` (including `neutral`, `LABEL_1` or padded
    /// labels) is Neutral.
    pub fn from_model_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            SentimentLabel::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
