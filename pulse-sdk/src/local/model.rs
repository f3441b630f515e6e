use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::info;

use crate::{
    error::SdkError,
    sentiment::{Prediction, SentimentModel},
};

/// A sentiment pipeline that runs in this process
pub trait LocalPipeline: Send + Sync + 'static {
    /// Score one text; blocks the calling thread
    fn predict(&self, text: &str) -> Result<Prediction, SdkError>;
}

/// Builds a pipeline, typically by fetching weights and a tokenizer
pub type PipelineLoader = dyn Fn() -> Result<Arc<dyn LocalPipeline>, SdkError> + Send + Sync;

/// [`SentimentModel`] backed by an in-process pipeline.
///
/// The pipeline is built on the first `load` or `predict` and kept for the
/// lifetime of the model. Building and inference run on the blocking pool.
pub struct LocalSentimentModel {
    model: String,
    loader: Arc<PipelineLoader>,
    pipeline: OnceCell<Arc<dyn LocalPipeline>>,
}

impl LocalSentimentModel {
    pub fn new<F>(model: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn LocalPipeline>, SdkError> + Send + Sync + 'static,
    {
        Self {
            model: model.into(),
            loader: Arc::new(loader),
            pipeline: OnceCell::new(),
        }
    }

    /// Whether the pipeline has been built
    pub fn is_built(&self) -> bool {
        self.pipeline.initialized()
    }

    async fn pipeline(&self) -> Result<Arc<dyn LocalPipeline>, SdkError> {
        let pipeline = self
            .pipeline
            .get_or_try_init(|| async {
                let started = Instant::now();
                let loader = Arc::clone(&self.loader);
                let pipeline = tokio::task::spawn_blocking(move || loader())
                    .await
                    .map_err(|e| SdkError::internal(format!("Model loader panicked: {e}")))??;
                info!(
                    model = %self.model,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Local sentiment pipeline built"
                );
                Ok::<_, SdkError>(pipeline)
            })
            .await?;
        Ok(Arc::clone(pipeline))
    }
}

#[async_trait]
impl SentimentModel for LocalSentimentModel {
    async fn predict(&self, text: &str) -> Result<Prediction, SdkError> {
        let pipeline = self.pipeline().await?;
        let text = text.to_string();
        tokio::task::spawn_blocking(move || pipeline.predict(&text))
            .await
            .map_err(|e| SdkError::internal(format!("Local inference panicked: {e}")))?
    }

    fn provider_name(&self) -> &str {
        crate::providers::LOCAL
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn load(&self) -> Result<(), SdkError> {
        self.pipeline().await.map(|_| ())
    }
}
