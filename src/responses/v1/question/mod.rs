use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::v1::question::{Question as Model, QuestionType};

/// Question payload as served to API clients: the store identifier is
/// translated to its hex string form.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema)]
pub struct Question {
    #[serde(rename = "_id")]
    #[schema(example = "665f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "Which language should we adopt?")]
    pub question_text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub options: Option<Vec<String>>,
    pub scale: Option<i32>,
}

impl From<Model> for Question {
    fn from(question: Model) -> Self {
        Self {
            id: question.id.to_hex(),
            question_text: question.question_text,
            kind: question.kind,
            options: question.options,
            scale: question.scale,
        }
    }
}
