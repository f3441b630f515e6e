use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    error::SdkError,
    huggingface::types::{
        HfClassificationRequest, HfClassificationResponse, HfErrorResponse, HfOptions,
    },
    models::sentiment::TWITTER_ROBERTA_LATEST_ID,
    sentiment::{Prediction, SentimentModel},
};

/// HF Inference provider behind the Inference Providers router
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference";

/// Text used to bring a cold model online
const WARM_UP_INPUT: &str = "Thanks for the help this week.";

/// Hugging Face Inference API client for text classification
pub struct HuggingFaceClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    options: HfOptions,
    http_client: reqwest::Client,
}

impl HuggingFaceClient {
    /// Create a new client; an API key is optional for public models
    pub fn new(api_key: Option<String>) -> Result<Self, SdkError> {
        let api_key = api_key.filter(|key| !key.trim().is_empty());

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(300)) // model cold starts are slow
            .build()
            .map_err(|e| SdkError::Network { source: e })?;

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: TWITTER_ROBERTA_LATEST_ID.to_string(),
            options: HfOptions::default(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a different text-classification model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }


    /// Run the text-classification task on one input
    pub async fn classify(
        &self,
        request: HfClassificationRequest,
    ) -> Result<HfClassificationResponse, SdkError> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let mut headers = HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .map_err(|_| SdkError::authentication("Invalid API key format"))?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| SdkError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            let hf_response: HfClassificationResponse = response
                .json()
                .await
                .map_err(|e| SdkError::internal(format!("Failed to parse response: {}", e)))?;
            Ok(hf_response)
        } else {
            let retry_after = if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                response
                    .headers()
                    .get("retry-after")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
            } else {
                None
            };

            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            let (message, estimated_time) =
                match serde_json::from_str::<HfErrorResponse>(&error_text) {
                    Ok(error_response) => (error_response.error, error_response.estimated_time),
                    Err(_) => (error_text, None),
                };

            match status {
                reqwest::StatusCode::BAD_REQUEST => Err(SdkError::invalid_request(message)),
                reqwest::StatusCode::UNAUTHORIZED => Err(SdkError::authentication(message)),
                reqwest::StatusCode::FORBIDDEN => Err(SdkError::authentication(message)),
                reqwest::StatusCode::PAYLOAD_TOO_LARGE => {
                    Err(SdkError::invalid_request("Request too large"))
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => {
                    Err(SdkError::rate_limit(message, retry_after))
                }
                reqwest::StatusCode::SERVICE_UNAVAILABLE => {
                    Err(SdkError::model_loading(message, estimated_time))
                }
                _ => Err(SdkError::api_error(status.as_u16(), message)),
            }
        }
    }
}

#[async_trait]
impl SentimentModel for HuggingFaceClient {
    async fn predict(&self, text: &str) -> Result<Prediction, SdkError> {
        let request = HfClassificationRequest {
            inputs: text.to_string(),
            options: Some(self.options.clone()),
        };

        let top = self
            .classify(request)
            .await?
            .top()
            .ok_or_else(|| SdkError::internal("Model returned no labels"))?;

        Ok(Prediction::new(top.label, top.score))
    }

    fn provider_name(&self) -> &str {
        crate::providers::HUGGINGFACE
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn load(&self) -> Result<(), SdkError> {
        // A blocking request makes the hosted service pull the weights once.
        let request = HfClassificationRequest {
            inputs: WARM_UP_INPUT.to_string(),
            options: Some(HfOptions {
                wait_for_model: true,
                use_cache: true,
            }),
        };
        self.classify(request).await.map(|_| ())
    }
}
