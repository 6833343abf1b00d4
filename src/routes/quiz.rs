use std::collections::HashMap;

use handle_errors::Error;
use tracing::{event, instrument, Level};
use warp::http::Uri;

use crate::cache::{ListCache, Lookup};
use crate::store::Store;
use crate::types::quiz::{reveal_requested, NewQuiz};
use crate::views;

/// `GET /` — the list page with the embedded create form. Served from the
/// list cache when a rendered copy exists.
#[instrument(skip(cache, store))]
pub async fn get_quizzes(
    cache: ListCache,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let generation = match cache.get().await {
        Lookup::Hit(page) => {
            event!(Level::INFO, cached = true, "serving list page");
            return Ok(warp::reply::html(page));
        }
        Lookup::Miss(generation) => generation,
    };

    match store.get_quizzes().await {
        Ok(quizzes) => {
            event!(Level::INFO, count = quizzes.len(), "rendering list page");
            let page = views::home(&quizzes).into_string();
            cache.put(page.clone(), generation).await;
            Ok(warp::reply::html(page))
        }
        Err(e) => Err(warp::reject::custom(e)),
    }
}

/// `POST /` — persists the quiz with its three answers, invalidates the list
/// cache and redirects back to the list page.
#[instrument(skip(store, cache, form))]
pub async fn add_quiz(
    store: Store,
    cache: ListCache,
    form: HashMap<String, String>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let new_quiz = NewQuiz::from_form(&form);

    match store.add_quiz(new_quiz).await {
        Ok(quiz) => {
            event!(Level::INFO, quiz_id = quiz.id.0, "quiz created");
            cache.invalidate().await;
            Ok(warp::redirect::see_other(Uri::from_static("/")))
        }
        Err(e) => Err(warp::reject::custom(e)),
    }
}

/// `GET /quiz/{id}` — the detail page. The `show=true` query parameter
/// reveals correctness; an unknown id rejects with [`Error::QuizNotFound`].
#[instrument(skip(store))]
pub async fn get_quiz(
    id: i32,
    params: HashMap<String, String>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    let reveal = reveal_requested(&params);

    match store.get_quiz_detail(id).await {
        Ok(Some(detail)) => {
            event!(Level::INFO, quiz_id = id, reveal, "rendering detail page");
            Ok(warp::reply::html(
                views::quiz_detail(&detail, reveal).into_string(),
            ))
        }
        Ok(None) => Err(warp::reject::custom(Error::QuizNotFound)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}
