use crate::types::quiz::QuizId;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerId(pub i32);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: AnswerId,
    pub quiz_id: QuizId,
    pub answer_text: String,
    pub is_correct: bool,
}
