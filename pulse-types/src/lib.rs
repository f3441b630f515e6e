use serde::{Deserialize, Serialize};

pub mod feedback;
pub mod sentiment;
pub mod survey;

pub use feedback::{DispatchResult, FeedbackRecord, TIMESTAMP_FORMAT};
pub use sentiment::SentimentLabel;
pub use survey::{
    questions, Choice, Communication, Confidence, FeedbackHandling, GoalsClarity, Growth, Morale,
    Question, QuestionKind, Recognition, Support, SurveyError, SurveyResponse, Workload,
    OPEN_ENDED_FIELD,
};

// Payloads shared between pulse-api and its web clients

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
