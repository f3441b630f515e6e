use crate::dispatcher::FeedbackDispatcher;
use crate::models::HealthResponse;
use actix_web::{get, web, HttpResponse, Responder};
use std::sync::Arc;

#[get("/health")]
pub async fn health_check(dispatcher: web::Data<Arc<FeedbackDispatcher>>) -> impl Responder {
    let classifier = dispatcher.classifier();
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sentiment_model: classifier.model_name().to_string(),
        sentiment_model_loaded: classifier.is_loaded(),
    })
}
