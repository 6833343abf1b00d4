use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::answer::Answer;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Quiz {
    pub id: QuizId,
    pub title: String,
    pub description: String,
    pub question_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizId(pub i32);

/// A quiz together with its answers, as rendered on the detail page.
#[derive(Debug, Clone)]
pub struct QuizDetail {
    pub quiz: Quiz,
    pub answers: Vec<Answer>,
}

/// One answer group from the create form, before it has a database id.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub text: String,
    pub is_correct: bool,
}

/// The create form holds exactly three answer groups.
pub const ANSWER_COUNT: usize = 3;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub title: String,
    pub description: String,
    pub question: String,
    pub answers: [NewAnswer; ANSWER_COUNT],
}

impl NewQuiz {
    /// Builds a quiz from the submitted form fields.
    ///
    /// Scalar fields are `title`, `description` and `question`; the answer
    /// groups are `answer-1..3` paired with `check-1..3` checkboxes, which
    /// browsers submit as `"on"` when ticked and omit otherwise. Absent
    /// fields become empty text / unchecked and are persisted as-is.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).cloned().unwrap_or_default();

        let answers = std::array::from_fn(|i| {
            let n = i + 1;
            NewAnswer {
                text: field(&format!("answer-{}", n)),
                is_correct: form.get(&format!("check-{}", n)).map(String::as_str)
                    == Some("on"),
            }
        });

        NewQuiz {
            title: field("title"),
            description: field("description"),
            question: field("question"),
            answers,
        }
    }
}

/// True only when the `show` query parameter is exactly `"true"`. Any other
/// value, or its absence, leaves correctness hidden.
pub fn reveal_requested(params: &HashMap<String, String>) -> bool {
    params.get("show").map(String::as_str) == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn extracts_full_form_in_order() {
        let new_quiz = NewQuiz::from_form(&form(&[
            ("title", "Capitals"),
            ("description", "European capitals"),
            ("question", "What is the capital of France?"),
            ("answer-1", "Paris"),
            ("check-1", "on"),
            ("answer-2", "London"),
            ("answer-3", "Berlin"),
        ]));

        assert_eq!(new_quiz.title, "Capitals");
        assert_eq!(new_quiz.question, "What is the capital of France?");
        assert_eq!(
            new_quiz.answers,
            [
                NewAnswer {
                    text: "Paris".to_string(),
                    is_correct: true
                },
                NewAnswer {
                    text: "London".to_string(),
                    is_correct: false
                },
                NewAnswer {
                    text: "Berlin".to_string(),
                    is_correct: false
                },
            ]
        );
    }

    #[test]
    fn absent_fields_become_empty_and_unchecked() {
        let new_quiz = NewQuiz::from_form(&form(&[("title", "Sparse")]));

        assert_eq!(new_quiz.description, "");
        assert_eq!(new_quiz.question, "");
        for answer in &new_quiz.answers {
            assert_eq!(answer.text, "");
            assert!(!answer.is_correct);
        }
    }

    #[test]
    fn checkbox_requires_exact_on_value() {
        let new_quiz = NewQuiz::from_form(&form(&[
            ("answer-1", "Yes"),
            ("check-1", "true"),
        ]));
        assert!(!new_quiz.answers[0].is_correct);
    }

    #[test]
    fn reveal_only_on_exact_true() {
        assert!(reveal_requested(&form(&[("show", "true")])));
        assert!(!reveal_requested(&form(&[("show", "1")])));
        assert!(!reveal_requested(&form(&[("show", "TRUE")])));
        assert!(!reveal_requested(&form(&[])));
    }
}
