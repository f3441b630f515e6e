//! # Pulse SDK
//!
//! Outbound clients used by the team survey service: a pretrained sentiment
//! model and the workflow endpoint that stores finished records.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pulse_sdk::huggingface::HuggingFaceClient;
//! use pulse_sdk::SentimentClassifier;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = HuggingFaceClient::new(Some("hf_your_token".to_string()))?;
//!     let classifier = SentimentClassifier::new(Arc::new(model));
//!
//!     let label = classifier
//!         .classify("I absolutely love this team and how we support each other!")
//!         .await?;
//!     println!("Sentiment: {}", label);
//!     Ok(())
//! }
//! ```
//!
//! ## Local Example
//!
//! With the `local` feature, the model runs in-process instead:
//!
//! ```rust,ignore
//! use pulse_sdk::local::LocalSentimentModel;
//! use pulse_sdk::SentimentClassifier;
//! use std::sync::Arc;
//!
//! let model = LocalSentimentModel::modernbert("modernbert-base").expect("known model");
//! let classifier = SentimentClassifier::new(Arc::new(model));
//! ```
//!
//! ## Workflow Example
//!
//! ```rust,no_run
//! use pulse_sdk::workflow::WorkflowClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WorkflowClient::new("https://example.com/invoke?sig=secret", None)?;
//!     let receipt = client
//!         .submit(&serde_json::json!({ "Sentiment": "Neutral" }))
//!         .await?;
//!     println!("Accepted: {}", receipt.is_accepted());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod huggingface;
pub mod local;
pub mod models;
pub mod providers;
pub mod sentiment;
pub mod workflow;

pub use error::SdkError;
pub use sentiment::{Prediction, SentimentClassifier, SentimentModel};
