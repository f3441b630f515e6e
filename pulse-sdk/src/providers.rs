//! Provider name constants
//!
//! This module defines canonical provider names used throughout the SDK

/// Hugging Face Inference API (hosted pretrained classifiers)
pub const HUGGINGFACE: &str = "huggingface";

/// In-process candle pipeline
pub const LOCAL: &str = "local";
