//! Route table shared by the server binary and the integration tests.

use crate::handlers::{health, questions, survey};
use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use pulse_types::ErrorResponse;

/// Register every handler plus the JSON error shape on `cfg`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse {
            error: format!("Invalid survey payload: {}", err),
        });
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .service(survey::survey_page)
        .service(survey::submit_survey)
        .service(survey::submit_survey_json)
        .service(questions::list_questions)
        .service(health::health_check);
}
