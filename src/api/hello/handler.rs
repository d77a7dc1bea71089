/*
    * This file contains the handler logic for the "hello" endpoint.
    * It responds with a constant JSON body and reads nothing from the request.
*/

use serde::Serialize;
use axum::{http::StatusCode, Json};
use tracing::{instrument, info};

const GREETING: &str = "Hello from FastAPI backend232";

/// The constant response payload for GET /api/hello
#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Returns the static greeting payload
#[instrument]
pub async fn hello_handler() -> (StatusCode, Json<HelloResponse>) {
    info!("Hello endpoint called");

    (StatusCode::OK, Json(HelloResponse { message: GREETING }))
}
