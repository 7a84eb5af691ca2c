use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::ApiError;
use crate::responses::v1::response::SurveyResponse;
use crate::services::v1::FETCH_CAP;

/// Every stored response for one question, capped at the fetch limit. An
/// unknown question id yields an empty list, not an error.
#[::tracing::instrument(skip(pool))]
pub async fn list(pool: &DatabasePool, question_id: &str) -> Result<Vec<SurveyResponse>, ApiError> {
    let responses = pool
        .responses()?
        .find(doc! { "question_id": question_id })
        .limit(FETCH_CAP)
        .await
        .map_err(DatabaseError::from)?
        .try_collect::<Vec<_>>()
        .await
        .map_err(DatabaseError::from)?;

    ::tracing::debug!(count = responses.len(), "responses fetched");

    Ok(responses.into_iter().map(SurveyResponse::from).collect())
}
