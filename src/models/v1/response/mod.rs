use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Collection holding the response documents.
pub const COLLECTION: &str = "responses";

/// Submitted answer value. Untagged on the wire: a bare string, an integer
/// or a list of option strings, keyed by the parent question's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Number(i64),
    Selection(Vec<String>),
}

/// A stored response document. Insert-only: responses are never mutated or
/// deleted through this API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    /// Store-generated id; None until the document is inserted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Hex id of the question this response answers. The store itself does
    /// not enforce referential integrity; submission validates it instead.
    pub question_id: String,
    pub response_text: ResponseValue,
    /// Stamped by the server at insert time, never taken from the client
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub submitted_at: DateTime<Utc>,
}
