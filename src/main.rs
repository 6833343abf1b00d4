#![warn(clippy::all)]

use clap::Parser;
use handle_errors::return_error;
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{http::Method, Filter};

mod cache;
mod config;
mod routes;
mod store;
mod types;
mod views;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        // Record an event when each span closes, which times the routes.
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let store = store::Store::new(&config.database_url).await?;
    sqlx::migrate!().run(&store.connection).await?;

    let store_filter = warp::any().map(move || store.clone());

    let list_cache = cache::ListCache::new();
    let cache_filter = warp::any().map(move || list_cache.clone());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(&[Method::GET, Method::POST]);

    let get_quizzes = warp::get()
        .and(warp::path::end())
        .and(cache_filter.clone())
        .and(store_filter.clone())
        .and_then(routes::quiz::get_quizzes)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_quizzes request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let add_quiz = warp::post()
        .and(warp::path::end())
        .and(store_filter.clone())
        .and(cache_filter.clone())
        .and(warp::body::form())
        .and_then(routes::quiz::add_quiz)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "add_quiz request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let get_quiz = warp::get()
        .and(warp::path("quiz"))
        .and(warp::path::param::<i32>())
        .and(warp::path::end())
        .and(warp::query())
        .and(store_filter.clone())
        .and_then(routes::quiz::get_quiz)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_quiz request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let routes = get_quizzes
        .or(add_quiz)
        .or(get_quiz)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error);

    warp::serve(routes).run((config.bind, config.port)).await;

    Ok(())
}
