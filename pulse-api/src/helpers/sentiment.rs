use crate::config::SentimentConfig;
use anyhow::anyhow;
use pulse_sdk::huggingface::HuggingFaceClient;
use pulse_sdk::{SentimentClassifier, SentimentModel};
use std::sync::Arc;

/// Build the process-wide classifier from configuration.
///
/// The model itself is not contacted here; it loads on first use unless
/// `preload` is set and the caller warms it up.
pub fn create_sentiment_classifier(
    config: &SentimentConfig,
) -> anyhow::Result<Arc<SentimentClassifier>> {
    let model: Arc<dyn SentimentModel> = match config.provider.as_str() {
        pulse_sdk::providers::HUGGINGFACE => {
            let api_key = config
                .api_key
                .clone()
                .or_else(|| std::env::var("HF_TOKEN").ok());

            let mut client = HuggingFaceClient::new(api_key)?.with_model(config.model.clone());
            if let Some(base_url) = &config.base_url {
                client = client.with_base_url(base_url.clone());
            }
            Arc::new(client)
        }
        pulse_sdk::providers::LOCAL => create_local_model(&config.model)?,
        other => return Err(anyhow!("Unsupported sentiment provider: {}", other)),
    };

    Ok(Arc::new(
        SentimentClassifier::new(model).with_max_input_chars(config.max_input_chars),
    ))
}

#[cfg(feature = "local")]
fn create_local_model(model: &str) -> anyhow::Result<Arc<dyn SentimentModel>> {
    use pulse_sdk::local::LocalSentimentModel;
    use pulse_sdk::models::sentiment::{MODERNBERT_BASE, MODERNBERT_LARGE};

    let model = LocalSentimentModel::modernbert(model).ok_or_else(|| {
        anyhow!(
            "Unknown local sentiment model '{}'. Options: {}, {}",
            model,
            MODERNBERT_BASE,
            MODERNBERT_LARGE
        )
    })?;
    Ok(Arc::new(model))
}

#[cfg(not(feature = "local"))]
fn create_local_model(_model: &str) -> anyhow::Result<Arc<dyn SentimentModel>> {
    Err(anyhow!(
        "The local sentiment provider needs pulse-api built with `--features local`"
    ))
}
