use candle_pipelines::sentiment::{
    ModernBertSize, SentimentAnalysisPipeline, SentimentAnalysisPipelineBuilder,
    SentimentModernBert,
};
use std::sync::Arc;

use crate::{
    error::SdkError,
    local::model::{LocalPipeline, LocalSentimentModel},
    models::sentiment::{MODERNBERT_BASE, MODERNBERT_LARGE},
    sentiment::Prediction,
};

impl LocalPipeline for SentimentAnalysisPipeline<SentimentModernBert> {
    fn predict(&self, text: &str) -> Result<Prediction, SdkError> {
        let output = self
            .run(text)
            .map_err(|e| SdkError::internal(format!("Local inference failed: {e}")))?;
        Ok(Prediction::new(
            output.prediction.label,
            output.prediction.score,
        ))
    }
}

fn build(large: bool) -> Result<Arc<dyn LocalPipeline>, SdkError> {
    let size = if large {
        ModernBertSize::Large
    } else {
        ModernBertSize::Base
    };
    let pipeline = SentimentAnalysisPipelineBuilder::modernbert(size)
        .build()
        .map_err(|e| SdkError::model_loading(format!("Failed to build pipeline: {e}"), None))?;
    Ok(Arc::new(pipeline))
}

impl LocalSentimentModel {
    /// ModernBERT sentiment pipeline by model name, or `None` for an unknown name.
    ///
    /// Nothing is downloaded until the model is first used.
    pub fn modernbert(model: &str) -> Option<Self> {
        match model {
            MODERNBERT_BASE => Some(Self::new(MODERNBERT_BASE, || build(false))),
            MODERNBERT_LARGE => Some(Self::new(MODERNBERT_LARGE, || build(true))),
            _ => None,
        }
    }
}
