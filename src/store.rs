use handle_errors::Error;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::types::{
    answer::{Answer, AnswerId},
    quiz::{NewQuiz, Quiz, QuizDetail, QuizId},
};

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: PgPool,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self, sqlx::Error> {
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await?;

        Ok(Store {
            connection: db_pool,
        })
    }

    fn quiz_from_row(row: &PgRow) -> Quiz {
        Quiz {
            id: QuizId(row.get("quiz_id")),
            title: row.get("title"),
            description: row.get("description"),
            question_text: row.get("question_text"),
            created_at: row.get("created_at"),
        }
    }

    /// All quizzes, store default order. An empty table is an empty list.
    pub async fn get_quizzes(&self) -> Result<Vec<Quiz>, Error> {
        sqlx::query(
            "SELECT quiz_id, title, description, question_text, created_at
             FROM quizzes",
        )
        .map(|row: PgRow| Self::quiz_from_row(&row))
        .fetch_all(&self.connection)
        .await
        .map_err(|e| {
            tracing::event!(tracing::Level::ERROR, "{:?}", e);
            Error::DatabaseQueryError(e)
        })
    }

    /// One quiz joined with its answers; `None` when the join yields no rows.
    pub async fn get_quiz_detail(&self, quiz_id: i32) -> Result<Option<QuizDetail>, Error> {
        let rows = sqlx::query(
            "SELECT q.quiz_id, q.title, q.description, q.question_text, q.created_at,
                    a.answer_id, a.answer_text, a.is_correct
             FROM quizzes q
             JOIN answers a ON a.quiz_id = q.quiz_id
             WHERE q.quiz_id = $1
             ORDER BY a.answer_id",
        )
        .bind(quiz_id)
        .fetch_all(&self.connection)
        .await
        .map_err(|e| {
            tracing::event!(tracing::Level::ERROR, "{:?}", e);
            Error::DatabaseQueryError(e)
        })?;

        let Some(first) = rows.first() else {
            return Ok(None);
        };

        let quiz = Self::quiz_from_row(first);
        let answers = rows
            .iter()
            .map(|row| Answer {
                id: AnswerId(row.get("answer_id")),
                quiz_id: quiz.id,
                answer_text: row.get("answer_text"),
                is_correct: row.get("is_correct"),
            })
            .collect();

        Ok(Some(QuizDetail { quiz, answers }))
    }

    /// Inserts the quiz and its three answers in one transaction, so no
    /// reader ever observes a quiz without its answers.
    pub async fn add_quiz(&self, new_quiz: NewQuiz) -> Result<Quiz, Error> {
        let mut transaction = self.connection.begin().await.map_err(|e| {
            tracing::event!(tracing::Level::ERROR, "{:?}", e);
            Error::DatabaseQueryError(e)
        })?;

        let quiz = sqlx::query(
            "INSERT INTO quizzes (title, description, question_text, created_at)
             VALUES ($1, $2, $3, now())
             RETURNING quiz_id, title, description, question_text, created_at",
        )
        .bind(new_quiz.title)
        .bind(new_quiz.description)
        .bind(new_quiz.question)
        .map(|row: PgRow| Self::quiz_from_row(&row))
        .fetch_one(&mut *transaction)
        .await
        .map_err(|e| {
            tracing::event!(tracing::Level::ERROR, "{:?}", e);
            Error::DatabaseQueryError(e)
        })?;

        for answer in new_quiz.answers {
            sqlx::query(
                "INSERT INTO answers (quiz_id, answer_text, is_correct)
                 VALUES ($1, $2, $3)",
            )
            .bind(quiz.id.0)
            .bind(answer.text)
            .bind(answer.is_correct)
            .execute(&mut *transaction)
            .await
            .map_err(|e| {
                tracing::event!(tracing::Level::ERROR, "{:?}", e);
                Error::DatabaseQueryError(e)
            })?;
        }

        transaction.commit().await.map_err(|e| {
            tracing::event!(tracing::Level::ERROR, "{:?}", e);
            Error::DatabaseQueryError(e)
        })?;

        Ok(quiz)
    }
}

// Run with `cargo test -- --ignored` against a PostgreSQL DATABASE_URL;
// #[sqlx::test] provisions a fresh database per test and applies migrations/.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quiz::{NewAnswer, NewQuiz};

    fn capitals_quiz() -> NewQuiz {
        NewQuiz {
            title: "Capitals".to_string(),
            description: "European capitals".to_string(),
            question: "What is the capital of France?".to_string(),
            answers: [
                NewAnswer {
                    text: "Paris".to_string(),
                    is_correct: true,
                },
                NewAnswer {
                    text: "London".to_string(),
                    is_correct: false,
                },
                NewAnswer {
                    text: "Berlin".to_string(),
                    is_correct: false,
                },
            ],
        }
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn created_quiz_appears_in_list(pool: PgPool) {
        let store = Store { connection: pool };

        store.add_quiz(capitals_quiz()).await.unwrap();

        let quizzes = store.get_quizzes().await.unwrap();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].title, "Capitals");
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn detail_carries_answers_in_form_order(pool: PgPool) {
        let store = Store { connection: pool };

        let quiz = store.add_quiz(capitals_quiz()).await.unwrap();

        let detail = store.get_quiz_detail(quiz.id.0).await.unwrap().unwrap();
        let texts: Vec<&str> = detail
            .answers
            .iter()
            .map(|a| a.answer_text.as_str())
            .collect();
        assert_eq!(texts, ["Paris", "London", "Berlin"]);
        assert!(detail.answers[0].is_correct);
        assert!(!detail.answers[1].is_correct);
        assert!(!detail.answers[2].is_correct);
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn unknown_quiz_id_is_none(pool: PgPool) {
        let store = Store { connection: pool };
        assert!(store.get_quiz_detail(4711).await.unwrap().is_none());
    }

    #[sqlx::test]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn answer_insert_failure_rolls_back_the_quiz(pool: PgPool) {
        let store = Store { connection: pool };

        // force the third answer insert to fail after the quiz row is in
        sqlx::query(
            "ALTER TABLE answers
             ADD CONSTRAINT answer_text_present CHECK (answer_text <> '')",
        )
        .execute(&store.connection)
        .await
        .unwrap();

        let mut new_quiz = capitals_quiz();
        new_quiz.answers[2].text = String::new();

        let result = store.add_quiz(new_quiz).await;
        assert!(matches!(result, Err(Error::DatabaseQueryError(_))));

        assert!(store.get_quizzes().await.unwrap().is_empty());
    }
}
