use crate::error::SdkError;
use crate::models::sentiment::DEFAULT_MAX_INPUT_CHARS;
use crate::sentiment::model::SentimentModel;
use pulse_types::SentimentLabel;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Maps free text onto a coarse [`SentimentLabel`].
///
/// Wraps a [`SentimentModel`] that is loaded on first use and reused for the
/// lifetime of the classifier. Build one at start-up and share it behind an
/// `Arc`.
pub struct SentimentClassifier {
    model: Arc<dyn SentimentModel>,
    max_input_chars: usize,
    loaded: OnceCell<()>,
}

impl SentimentClassifier {
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self {
            model,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            loaded: OnceCell::new(),
        }
    }

    /// Override the character cap applied before text reaches the model
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.initialized()
    }

    /// Load the underlying model if that has not happened yet
    pub async fn warm_up(&self) -> Result<(), SdkError> {
        self.loaded
            .get_or_try_init(|| async {
                let started = Instant::now();
                self.model.load().await?;
                info!(
                    provider = %self.model.provider_name(),
                    model = %self.model.model_name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Sentiment model loaded"
                );
                Ok::<(), SdkError>(())
            })
            .await?;
        Ok(())
    }

    /// Classify a free-text answer.
    ///
    /// Blank text is Neutral and never reaches the model. Longer text is cut
    /// to the first `max_input_chars` characters.
    pub async fn classify(&self, text: &str) -> Result<SentimentLabel, SdkError> {
        if text.trim().is_empty() {
            return Ok(SentimentLabel::Neutral);
        }

        self.warm_up().await?;

        let input = truncate_chars(text, self.max_input_chars);
        let prediction = self.model.predict(input).await?;
        let label = SentimentLabel::from_model_label(&prediction.label);

        debug!(
            input_chars = input.chars().count(),
            model_label = %prediction.label,
            score = prediction.score,
            sentiment = %label,
            "Classified free-text answer"
        );

        Ok(label)
    }
}

/// First `max_chars` characters of `text`, ignoring word boundaries
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
