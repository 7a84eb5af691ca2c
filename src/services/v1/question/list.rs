use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::ApiError;
use crate::responses::v1::question::Question;
use crate::services::v1::FETCH_CAP;

/// Every question in the store, capped at the fetch limit.
#[::tracing::instrument(skip(pool))]
pub async fn list(pool: &DatabasePool) -> Result<Vec<Question>, ApiError> {
    let questions = pool
        .questions()?
        .find(doc! {})
        .limit(FETCH_CAP)
        .await
        .map_err(DatabaseError::from)?
        .try_collect::<Vec<_>>()
        .await
        .map_err(DatabaseError::from)?;

    ::tracing::debug!(count = questions.len(), "questions fetched");

    Ok(questions.into_iter().map(Question::from).collect())
}
