use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::v1::response::{ResponseValue, SurveyResponse as Model};

/// Response payload as served to API clients.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct SurveyResponse {
    #[serde(rename = "_id")]
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub id: String,
    pub question_id: String,
    pub response_text: ResponseValue,
    /// Server-assigned submission time, RFC 3339 in UTC
    pub submitted_at: DateTime<Utc>,
}

impl From<Model> for SurveyResponse {
    fn from(response: Model) -> Self {
        Self {
            id: response.id.map(|id| id.to_hex()).unwrap_or_default(),
            question_id: response.question_id,
            response_text: response.response_text,
            submitted_at: response.submitted_at,
        }
    }
}

/// Acknowledgement returned by `POST /api/responses`.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct ResponseCreated {
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub response_id: String,
}
