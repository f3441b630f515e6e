pub mod classifier;
pub mod model;

pub use classifier::SentimentClassifier;
pub use model::{Prediction, SentimentModel};
