use actix_web::{get, HttpResponse, Responder};
use pulse_types::{questions, QuestionsResponse};

#[get("/api/questions")]
pub async fn list_questions() -> impl Responder {
    HttpResponse::Ok().json(QuestionsResponse {
        questions: questions(),
    })
}
