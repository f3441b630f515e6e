#![allow(dead_code)]

use actix_web::{test, web, App};
use async_trait::async_trait;
use mockito::{Matcher, Mock, ServerGuard};
use pulse_api::form::SurveyPage;
use pulse_api::routes::configure_routes;
use pulse_api::FeedbackDispatcher;
use pulse_sdk::workflow::WorkflowClient;
use pulse_sdk::{Prediction, SdkError, SentimentClassifier, SentimentModel};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const INVOKE_PATH: &str = "/workflows/test/triggers/manual/paths/invoke";
pub const SIGNATURE: &str = "test-signature";

pub struct TestApp<S> {
    pub mock_model: Arc<MockSentimentModel>,
    pub app: S,
}

pub struct MockSentimentModel {
    pub label: String,
    pub fail: bool,
    pub inputs: Arc<Mutex<Vec<String>>>,
    pub load_count: Arc<Mutex<usize>>,
}

impl MockSentimentModel {
    pub fn new(label: &str) -> Self {
        MockSentimentModel {
            label: label.to_string(),
            fail: false,
            inputs: Arc::new(Mutex::new(Vec::new())),
            load_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing() -> Self {
        MockSentimentModel {
            fail: true,
            ..Self::new("positive")
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn get_inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }

    pub fn get_load_count(&self) -> usize {
        *self.load_count.lock().unwrap()
    }
}

#[async_trait]
impl SentimentModel for MockSentimentModel {
    async fn predict(&self, text: &str) -> Result<Prediction, SdkError> {
        self.inputs.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(SdkError::api_error(500, "model crashed".to_string()));
        }
        Ok(Prediction::new(self.label.clone(), 0.97))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-sentiment"
    }

    async fn load(&self) -> Result<(), SdkError> {
        *self.load_count.lock().unwrap() += 1;
        Ok(())
    }
}

/// Signed trigger URL pointing at the mock workflow server
pub fn endpoint_url(server: &ServerGuard) -> String {
    format!(
        "{}{}?api-version=1&sp=%2Ftriggers%2Fmanual%2Frun&sv=1.0&sig={}",
        server.url(),
        INVOKE_PATH,
        SIGNATURE
    )
}

/// Mock for the workflow trigger, matched on path and signature
pub fn workflow_mock(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", INVOKE_PATH)
        .match_query(Matcher::UrlEncoded("sig".into(), SIGNATURE.into()))
        .match_header("content-type", "application/json")
}

pub fn create_dispatcher(
    endpoint_url: &str,
    mock_model: Arc<MockSentimentModel>,
) -> anyhow::Result<FeedbackDispatcher> {
    let classifier = Arc::new(SentimentClassifier::new(mock_model));
    let workflow = WorkflowClient::new(endpoint_url, None)?;
    Ok(FeedbackDispatcher::new(classifier, workflow))
}

pub async fn setup_test_app(
    endpoint_url: &str,
    mock_model: MockSentimentModel,
) -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    >,
> {
    let mock_model = Arc::new(mock_model);
    let dispatcher = Arc::new(create_dispatcher(endpoint_url, mock_model.clone())?);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(dispatcher))
            .app_data(web::Data::new(SurveyPage::new()?))
            .configure(configure_routes),
    )
    .await;

    Ok(TestApp { mock_model, app })
}

/// Form fields of a complete, valid submission
pub fn valid_form_fields(open_ended: &str) -> HashMap<String, String> {
    [
        ("Q1_Morale", "Good"),
        ("Q2_GoalsClarity", "Somewhat clear"),
        ("Q3_Support", "Always supported"),
        ("Q4_Communication", "Effectively"),
        ("Q5_Workload", "Occasionally overwhelming"),
        ("Q6_FeedbackHandling", "Well"),
        ("Q7_Growth", "Satisfied"),
        ("Q8_Confidence", "Somewhat confident"),
        ("Q9_Recognition", "Needs improvement"),
        ("Q10_OpenEnded", open_ended),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn valid_survey_json(open_ended: &str) -> serde_json::Value {
    serde_json::to_value(valid_form_fields(open_ended)).unwrap()
}
