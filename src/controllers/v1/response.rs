use actix_web::web::{Data, Json, Path};

use crate::database::DatabasePool;
use crate::errors::ApiError;
use crate::requests::v1::response::SubmitResponseRequest;
use crate::responses::v1::response::{ResponseCreated, SurveyResponse};
use crate::services;

/// Submit a response
///
/// The server stamps `submitted_at`; any client-supplied timestamp is
/// ignored. The value is validated against the referenced question's type.
#[utoipa::path(
    post,
    path = "/api/responses",
    tag = "Response",
    request_body = SubmitResponseRequest,
    responses(
        (status = 200, description = "Stored response id", body = ResponseCreated),
        (status = 422, description = "Malformed body, unknown question or value/type mismatch"),
        (status = 500, description = "Store failure"),
    )
)]
#[post("/api/responses")]
pub async fn store(
    pool: Data<DatabasePool>,
    Json(request): Json<SubmitResponseRequest>,
) -> Result<Json<ResponseCreated>, ApiError> {
    Ok(Json(services::v1::response::submit::submit(&pool, request).await?))
}

/// List responses for a question
#[utoipa::path(
    get,
    path = "/api/responses/{question_id}",
    tag = "Response",
    params(
        ("question_id" = String, Path, description = "Hex question id"),
    ),
    responses(
        (status = 200, description = "Responses for the question, capped at the fetch limit", body = Vec<SurveyResponse>),
        (status = 500, description = "Store failure"),
    )
)]
#[get("/api/responses/{question_id}")]
pub async fn index(
    pool: Data<DatabasePool>,
    question_id: Path<String>,
) -> Result<Json<Vec<SurveyResponse>>, ApiError> {
    Ok(Json(
        services::v1::response::list::list(&pool, question_id.as_str()).await?,
    ))
}
