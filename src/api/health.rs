// src/api/health.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, options};
use serde_json::{json, Value};

#[get("/health")]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy"
    }))
}

/// Preflight requests get an empty 200; the CORS fairing attaches the
/// allow headers. No business logic runs here.
#[options("/health")]
pub async fn preflight() -> Status {
    Status::Ok
}
