use crate::sentiment::SentimentLabel;
use crate::survey::SurveyResponse;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Rendering used for the `Timestamp` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Flat row delivered to the workflow endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(flatten)]
    pub response: SurveyResponse,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
}

impl FeedbackRecord {
    pub fn new(response: SurveyResponse, sentiment: SentimentLabel, at: DateTime<Local>) -> Self {
        Self {
            response,
            sentiment,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Record stamped with the current local time
    pub fn stamped_now(response: SurveyResponse, sentiment: SentimentLabel) -> Self {
        Self::new(response, sentiment, Local::now())
    }
}

/// Outcome of handling one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchResult {
    /// Endpoint accepted the record (200 or 202)
    Delivered {
        sentiment: SentimentLabel,
        status_code: u16,
    },
    /// Endpoint answered with any other status
    Rejected {
        sentiment: SentimentLabel,
        status_code: u16,
        body: String,
    },
    /// Nothing was accepted: the record could not be built or never reached the endpoint
    Failed {
        #[serde(skip_serializing_if = "Option::is_none")]
        sentiment: Option<SentimentLabel>,
        reason: String,
    },
}

impl DispatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Delivered { .. })
    }

    /// Status line shown to the respondent
    pub fn message(&self) -> String {
        match self {
            DispatchResult::Delivered { .. } => "Feedback sent successfully!".to_string(),
            DispatchResult::Rejected {
                status_code, body, ..
            } => format!("Failed: {}\n{}", status_code, body),
            DispatchResult::Failed { reason, .. } => format!("Failed: {}", reason),
        }
    }
}
