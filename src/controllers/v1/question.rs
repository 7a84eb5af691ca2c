use actix_web::web::{Data, Json, Path};
use mongodb::bson::oid::ObjectId;

use crate::database::DatabasePool;
use crate::errors::ApiError;
use crate::responses::v1::question::Question;
use crate::services;

/// List questions
///
/// Returns every question, capped at a fixed fetch limit
#[utoipa::path(
    get,
    path = "/api/questions",
    tag = "Question",
    responses(
        (status = 200, description = "All questions, capped at the fetch limit", body = Vec<Question>),
        (status = 500, description = "Store failure"),
    )
)]
#[get("/api/questions")]
pub async fn index(pool: Data<DatabasePool>) -> Result<Json<Vec<Question>>, ApiError> {
    Ok(Json(services::v1::question::list::list(&pool).await?))
}

/// Show question by id
///
/// Fails with 404 if no question carries the id, 400 if the id is malformed
#[utoipa::path(
    get,
    path = "/api/questions/{question_id}",
    tag = "Question",
    params(
        ("question_id" = String, Path, description = "Hex question id"),
    ),
    responses(
        (status = 200, description = "The question", body = Question),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No such question"),
        (status = 500, description = "Store failure"),
    )
)]
#[get("/api/questions/{question_id}")]
pub async fn show(
    pool: Data<DatabasePool>,
    question_id: Path<String>,
) -> Result<Json<Question>, ApiError> {
    let id = ObjectId::parse_str(question_id.as_str())
        .map_err(|_| ApiError::InvalidIdentifier(question_id.into_inner()))?;

    Ok(Json(services::v1::question::show::show(&pool, id).await?))
}
