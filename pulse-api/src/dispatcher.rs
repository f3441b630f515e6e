use pulse_sdk::workflow::WorkflowClient;
use pulse_sdk::SentimentClassifier;
use pulse_types::{DispatchResult, FeedbackRecord, SurveyResponse};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Turns one survey submission into one delivered spreadsheet row
pub struct FeedbackDispatcher {
    classifier: Arc<SentimentClassifier>,
    workflow: WorkflowClient,
}

impl FeedbackDispatcher {
    pub fn new(classifier: Arc<SentimentClassifier>, workflow: WorkflowClient) -> Self {
        Self {
            classifier,
            workflow,
        }
    }

    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    /// Classify the free-text answer, stamp the record and POST it once.
    ///
    /// Never retries. Every failure, including transport faults, comes back
    /// as a `DispatchResult` instead of an error.
    pub async fn dispatch(&self, response: SurveyResponse) -> DispatchResult {
        let sentiment = match self.classifier.classify(&response.open_ended).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                error!(error = %e, "Sentiment classification failed");
                return DispatchResult::Failed {
                    sentiment: None,
                    reason: format!("Sentiment classification failed: {}", e),
                };
            }
        };

        let record = FeedbackRecord::stamped_now(response, sentiment);

        match self.workflow.submit(&record).await {
            Ok(receipt) if receipt.is_accepted() => {
                info!(
                    status = receipt.status,
                    sentiment = %sentiment,
                    host = %self.workflow.endpoint_host(),
                    "Feedback delivered"
                );
                DispatchResult::Delivered {
                    sentiment,
                    status_code: receipt.status,
                }
            }
            Ok(receipt) => {
                warn!(
                    status = receipt.status,
                    body = %receipt.body,
                    host = %self.workflow.endpoint_host(),
                    "Workflow endpoint rejected feedback"
                );
                DispatchResult::Rejected {
                    sentiment,
                    status_code: receipt.status,
                    body: receipt.body,
                }
            }
            Err(e) => {
                error!(
                    error = %e,
                    host = %self.workflow.endpoint_host(),
                    "Could not reach workflow endpoint"
                );
                DispatchResult::Failed {
                    sentiment: Some(sentiment),
                    reason: format!("Could not reach the feedback endpoint: {}", e),
                }
            }
        }
    }
}
