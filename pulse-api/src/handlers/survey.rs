use crate::dispatcher::FeedbackDispatcher;
use crate::form::{Notice, SurveyPage};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};
use pulse_types::{DispatchResult, SurveyResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, warn};

fn html(
    page: &SurveyPage,
    status: StatusCode,
    notice: Option<&Notice>,
    values: &HashMap<String, String>,
) -> HttpResponse {
    match page.render(notice, values) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body),
        Err(e) => {
            error!(error = %e, "Failed to render survey page");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/")]
pub async fn survey_page(page: web::Data<SurveyPage>) -> impl Responder {
    html(&page, StatusCode::OK, None, &HashMap::new())
}

/// Browser form submission
#[post("/survey")]
pub async fn submit_survey(
    form: web::Form<HashMap<String, String>>,
    dispatcher: web::Data<Arc<FeedbackDispatcher>>,
    page: web::Data<SurveyPage>,
) -> impl Responder {
    let fields = form.into_inner();

    let response = match SurveyResponse::from_fields(|key| fields.get(key).map(String::as_str)) {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "Rejected invalid survey submission");
            let notice = Notice::Invalid {
                message: e.to_string(),
            };
            return html(&page, StatusCode::BAD_REQUEST, Some(&notice), &fields);
        }
    };

    info!(
        open_ended_chars = response.open_ended.chars().count(),
        "Survey submitted"
    );

    let result = dispatcher.dispatch(response).await;

    match result {
        DispatchResult::Delivered { sentiment, .. } => {
            // Fresh form for the next respondent
            let notice = Notice::Delivered { sentiment };
            html(&page, StatusCode::OK, Some(&notice), &HashMap::new())
        }
        failed => {
            // Keep the answers so the respondent can resubmit by hand
            let notice = Notice::Failed {
                message: failed.message(),
            };
            html(&page, StatusCode::BAD_GATEWAY, Some(&notice), &fields)
        }
    }
}

/// JSON submission for non-browser clients
#[post("/api/survey")]
pub async fn submit_survey_json(
    request: web::Json<SurveyResponse>,
    dispatcher: web::Data<Arc<FeedbackDispatcher>>,
) -> impl Responder {
    let response = request.into_inner();

    info!(
        open_ended_chars = response.open_ended.chars().count(),
        "Survey submitted via API"
    );

    let result = dispatcher.dispatch(response).await;

    if result.is_success() {
        HttpResponse::Ok().json(result)
    } else {
        HttpResponse::BadGateway().json(result)
    }
}
