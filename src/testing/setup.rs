use mongodb::bson::oid::ObjectId;

use crate::database::DatabasePool;
use crate::models::v1::question::{Question, QuestionType};

/// Inserts a multiple-choice question and returns its id.
///
/// The question text embeds the id so seeded documents stay distinguishable
/// when the test database is reused across runs.
pub async fn seed_multiple_choice_question(pool: &DatabasePool, options: &[&str]) -> ObjectId {
    let id = ObjectId::new();
    let question = Question {
        id,
        question_text: format!("Which option do you prefer? [{}]", id.to_hex()),
        kind: QuestionType::MultipleChoice,
        options: Some(options.iter().map(|option| option.to_string()).collect()),
        scale: None,
    };

    insert(pool, &question).await;

    id
}

/// Inserts a scale question and returns its id.
pub async fn seed_scale_question(pool: &DatabasePool, scale: i32) -> ObjectId {
    let id = ObjectId::new();
    let question = Question {
        id,
        question_text: format!("How satisfied are you? [{}]", id.to_hex()),
        kind: QuestionType::Scale,
        options: None,
        scale: Some(scale),
    };

    insert(pool, &question).await;

    id
}

async fn insert(pool: &DatabasePool, question: &Question) {
    assert!(question.is_well_formed(), "seed questions must be well-formed");

    pool.questions()
        .expect("pool is open")
        .insert_one(question)
        .await
        .expect("failed to seed question");
}
