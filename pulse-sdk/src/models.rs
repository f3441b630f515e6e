//! Model identifiers known to the SDK

pub mod sentiment {
    /// RoBERTa fine-tuned on tweets, three labels: negative / neutral / positive
    pub const TWITTER_ROBERTA_LATEST_ID: &str = "cardiffnlp/twitter-roberta-base-sentiment-latest";

    /// ModernBERT sentiment pipelines run in-process
    pub const MODERNBERT_BASE: &str = "modernbert-base";
    pub const MODERNBERT_LARGE: &str = "modernbert-large";

    /// Input cap for RoBERTa-base models, applied in characters before tokenization
    pub const DEFAULT_MAX_INPUT_CHARS: usize = 512;
}
