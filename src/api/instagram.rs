// src/api/instagram.rs
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{get, options, State};
use serde_json::{json, Value};
use tracing::error;

use crate::models::FeedEnvelope;
use crate::posts::PostSource;
use crate::server::ServerState;

/// The feed endpoint never returns malformed JSON: data-source problems
/// are already recovered inside the source (defaults), and anything
/// unexpected collapses into the 500 envelope with an empty list.
#[get("/instagram")]
pub async fn get_posts(
    state: &State<ServerState>,
) -> std::result::Result<Json<FeedEnvelope>, status::Custom<Json<Value>>> {
    match state.posts.load_posts().await {
        Ok(posts) => Ok(Json(FeedEnvelope { data: posts })),
        Err(e) => {
            error!("Failed to produce posts from {}: {}", state.posts.describe(), e);
            Err(status::Custom(
                Status::InternalServerError,
                Json(json!({
                    "error": "Internal server error",
                    "data": []
                })),
            ))
        }
    }
}

#[options("/instagram")]
pub async fn preflight() -> Status {
    Status::Ok
}
