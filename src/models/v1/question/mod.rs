use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::v1::response::ResponseValue;

/// Collection holding the question documents.
pub const COLLECTION: &str = "questions";

/// Kind tag stored on every question document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Scale,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Scale => "scale",
        }
    }

    /// Whether a submitted value is admissible for this question type:
    /// multiple-choice takes a single option or a list of options, scale
    /// takes an integer.
    pub fn accepts(&self, value: &ResponseValue) -> bool {
        matches!(
            (self, value),
            (Self::MultipleChoice, ResponseValue::Text(_))
                | (Self::MultipleChoice, ResponseValue::Selection(_))
                | (Self::Scale, ResponseValue::Number(_))
        )
    }
}

/// A survey question document. Questions are created out-of-band and are
/// read-only as far as this API is concerned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub question_text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// Ordered option labels, present for multiple-choice questions
    #[serde(default)]
    pub options: Option<Vec<String>>,
    /// Upper bound of the rating range, present for scale questions
    #[serde(default)]
    pub scale: Option<i32>,
}

impl Question {
    /// Exactly one of {options, scale} populated, consistent with the type.
    pub fn is_well_formed(&self) -> bool {
        match self.kind {
            QuestionType::MultipleChoice => self.options.is_some() && self.scale.is_none(),
            QuestionType::Scale => self.scale.is_some() && self.options.is_none(),
        }
    }
}
