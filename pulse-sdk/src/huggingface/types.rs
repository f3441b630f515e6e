use serde::{Deserialize, Serialize};

/// Request body for the text-classification task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HfClassificationRequest {
    pub inputs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HfOptions>,
}

/// Inference options understood by the hosted API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HfOptions {
    /// Block until the model is loaded instead of answering 503
    pub wait_for_model: bool,
    /// Allow the service to answer from its response cache
    pub use_cache: bool,
}

impl Default for HfOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
            use_cache: true,
        }
    }
}

/// One scored label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HfLabelScore {
    pub label: String,
    pub score: f32,
}

/// Classification output; the hosted API nests results per input, local
/// text-embeddings-inference style servers return a flat list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HfClassificationResponse {
    Nested(Vec<Vec<HfLabelScore>>),
    Flat(Vec<HfLabelScore>),
}

impl HfClassificationResponse {
    /// Highest-scoring label of the first input
    pub fn top(self) -> Option<HfLabelScore> {
        let scores = match self {
            HfClassificationResponse::Nested(batches) => batches.into_iter().next()?,
            HfClassificationResponse::Flat(scores) => scores,
        };
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

/// Error body returned on failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HfErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
}
