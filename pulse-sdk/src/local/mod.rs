//! In-process sentiment pipelines.
//!
//! The candle-backed ModernBERT pipeline is compiled with the `local` feature.

pub mod model;
#[cfg(feature = "local")]
mod modernbert;

pub use model::{LocalPipeline, LocalSentimentModel, PipelineLoader};
