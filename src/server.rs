//! The HTTP surface: one route, two methods.
//!
//! `GET /` returns a fixed informational payload; `POST /` accepts a JSON
//! string (not an object) containing a sentence and returns one NER label
//! per space-separated token. State is a shared immutable [`Tagger`], so
//! handlers are pure reads and need no coordination.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use log::debug;
use serde::Serialize;

use crate::tagger::Tagger;

/// Wording (including the typo) is part of the public contract; clients
/// match on the exact string.
pub const ABOUT_TEXT: &str = "This API perfoms NER on an input string";

#[derive(Debug, Serialize)]
pub struct About {
    #[serde(rename = "About")]
    pub about: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TagResponse {
    #[serde(rename = "Input Sentence")]
    pub sentence: String,
    #[serde(rename = "NER Labels")]
    pub labels: Vec<String>,
}

/// Builds the application router: `GET /` and `POST /` over a shared
/// tagger.
pub fn router(tagger: Arc<Tagger>) -> Router {
    Router::new()
        .route("/", get(describe).post(classify))
        .with_state(tagger)
}

/// `GET /` - fixed description of the API. Idempotent, no side effects.
async fn describe() -> Json<About> {
    Json(About { about: ABOUT_TEXT })
}

/// `POST /` - tags each space-separated token of the sentence, preserving
/// token order. Malformed bodies never reach this handler; the `Json`
/// extractor rejects them with a client error.
async fn classify(
    State(tagger): State<Arc<Tagger>>,
    Json(sentence): Json<String>,
) -> (StatusCode, Json<TagResponse>) {
    let labels = tagger.tag_sentence(&sentence);
    debug!("Tagged {} tokens", labels.len());

    (
        StatusCode::CREATED,
        Json(TagResponse { sentence, labels }),
    )
}
