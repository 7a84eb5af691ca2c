use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::database::{DatabaseError, DatabasePool};
use crate::errors::ApiError;
use crate::responses::v1::question::Question;

#[::tracing::instrument(skip(pool), fields(question_id = %id))]
pub async fn show(pool: &DatabasePool, id: ObjectId) -> Result<Question, ApiError> {
    let question = pool
        .questions()?
        .find_one(doc! { "_id": id })
        .await
        .map_err(DatabaseError::from)?
        .ok_or(ApiError::NotFound { resource: "question" })?;

    Ok(question.into())
}
