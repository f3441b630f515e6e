use crate::error::SdkError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Top-scoring label returned by a text-classification model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Label in the model's own vocabulary (e.g. "positive", "LABEL_0")
    pub label: String,
    /// Confidence score (0.0 to 1.0)
    pub score: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Core trait for pretrained sentiment model backends
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Classify one piece of text and return the best label
    async fn predict(&self, text: &str) -> Result<Prediction, SdkError>;

    /// Get provider name (e.g., "huggingface")
    fn provider_name(&self) -> &str;

    /// Get model name (e.g., "cardiffnlp/twitter-roberta-base-sentiment-latest")
    fn model_name(&self) -> &str;

    /// Make the model ready to serve predictions.
    ///
    /// May be slow. Callers go through [`crate::SentimentClassifier`], which
    /// runs this at most once.
    async fn load(&self) -> Result<(), SdkError> {
        Ok(())
    }
}
