use actix_web::{web::Json, Responder};
use serde_json::json;

pub async fn health() -> impl Responder {
    Json(json!({ "status": "SERVING" }))
}
