use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::v1::response::ResponseValue;

/// Body of `POST /api/responses`.
///
/// Deliberately carries no timestamp: `submitted_at` is stamped server-side
/// at insert time and any client-supplied value is dropped.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SubmitResponseRequest {
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub question_id: String,
    pub response_text: ResponseValue,
}

impl SubmitResponseRequest {
    /// Validates the submission request
    ///
    /// Validates:
    /// - question_id: required, must be a well-formed object id
    /// - response_text: a selection must name at least one option
    ///
    /// Returns Ok(()) if all validations pass, Err(Vec<String>) with error messages otherwise
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.question_id.is_empty() {
            errors.push("question_id is required".to_string());
        } else if ObjectId::parse_str(&self.question_id).is_err() {
            errors.push(format!(
                "question_id '{}' is not a well-formed identifier",
                self.question_id
            ));
        }

        if let ResponseValue::Selection(options) = &self.response_text {
            if options.is_empty() {
                errors.push("response_text must name at least one option".to_string());
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
