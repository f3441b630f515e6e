mod common;

use common::{create_dispatcher, endpoint_url, workflow_mock, MockSentimentModel};
use pulse_types::{
    Communication, Confidence, DispatchResult, FeedbackHandling, GoalsClarity, Growth, Morale,
    Recognition, SentimentLabel, Support, SurveyResponse, Workload,
};
use std::sync::Arc;

fn response(open_ended: &str) -> SurveyResponse {
    SurveyResponse {
        morale: Morale::Fair,
        goals_clarity: GoalsClarity::NotVeryClear,
        support: Support::SometimesSupported,
        communication: Communication::Ineffectively,
        workload: Workload::OftenOverwhelming,
        feedback_handling: FeedbackHandling::Poorly,
        growth: Growth::Dissatisfied,
        confidence: Confidence::NotConfident,
        recognition: Recognition::Poorly,
        open_ended: open_ended.to_string(),
    }
}

#[tokio::test]
async fn test_long_answer_is_truncated_before_classification() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let long_answer = "x".repeat(600);
    let mock = workflow_mock(&mut server)
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "Q10_OpenEnded": long_answer.clone()
        })))
        .with_status(202)
        .expect(1)
        .create_async()
        .await;

    let model = Arc::new(MockSentimentModel::new("negative"));
    let dispatcher = create_dispatcher(&endpoint_url(&server), model.clone())?;

    let result = dispatcher.dispatch(response(&long_answer)).await;

    assert_eq!(
        result,
        DispatchResult::Delivered {
            sentiment: SentimentLabel::Negative,
            status_code: 202
        }
    );
    // The model sees the capped text; the spreadsheet keeps the full answer.
    assert_eq!(model.get_inputs(), vec!["x".repeat(512)]);
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_non_accepted_success_status_is_a_rejection() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = workflow_mock(&mut server)
        .with_status(201)
        .with_body("created")
        .expect(1)
        .create_async()
        .await;

    let model = Arc::new(MockSentimentModel::new("positive"));
    let dispatcher = create_dispatcher(&endpoint_url(&server), model)?;

    let result = dispatcher.dispatch(response("Good vibes")).await;

    assert_eq!(
        result,
        DispatchResult::Rejected {
            sentiment: SentimentLabel::Positive,
            status_code: 201,
            body: "created".to_string()
        }
    );
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_each_dispatch_posts_exactly_once() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = workflow_mock(&mut server)
        .with_status(202)
        .expect(3)
        .create_async()
        .await;

    let model = Arc::new(MockSentimentModel::new("neutral"));
    let dispatcher = create_dispatcher(&endpoint_url(&server), model.clone())?;

    for answer in ["one", "", "three"] {
        assert!(dispatcher.dispatch(response(answer)).await.is_success());
    }

    mock.assert_async().await;
    assert_eq!(model.get_call_count(), 2);
    assert_eq!(model.get_load_count(), 1);
    Ok(())
}
