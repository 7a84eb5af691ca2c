use chrono::Utc;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::ApiError;
use crate::models::v1::response::SurveyResponse as Model;
use crate::requests::v1::response::SubmitResponseRequest;
use crate::responses::v1::response::ResponseCreated;

/// Validates a submission against its parent question and inserts it with a
/// server-assigned timestamp.
#[::tracing::instrument(skip(pool, request), fields(question_id = %request.question_id))]
pub async fn submit(
    pool: &DatabasePool,
    request: SubmitResponseRequest,
) -> Result<ResponseCreated, ApiError> {
    request.validate().map_err(|errors| ApiError::Validation { errors })?;

    let question_id = ObjectId::parse_str(&request.question_id).map_err(|_| ApiError::Validation {
        errors: vec![format!(
            "question_id '{}' is not a well-formed identifier",
            request.question_id
        )],
    })?;

    // the value must fit the question it answers
    let question = pool
        .questions()?
        .find_one(doc! { "_id": question_id })
        .await
        .map_err(DatabaseError::from)?
        .ok_or_else(|| ApiError::Validation {
            errors: vec![format!("question {} does not exist", request.question_id)],
        })?;

    if !question.kind.accepts(&request.response_text) {
        return Err(ApiError::Validation {
            errors: vec![format!(
                "response_text is not valid for a {} question",
                question.kind.as_str()
            )],
        });
    }

    let document = Model {
        id: None,
        question_id: request.question_id,
        response_text: request.response_text,
        submitted_at: Utc::now(),
    };

    let inserted = pool
        .responses()?
        .insert_one(&document)
        .await
        .map_err(DatabaseError::from)?;

    let response_id = inserted
        .inserted_id
        .as_object_id()
        .map(|id| id.to_hex())
        .unwrap_or_else(|| inserted.inserted_id.to_string());

    ::tracing::info!(response_id = %response_id, "response stored");

    Ok(ResponseCreated { response_id })
}
