/*
    * This file defines the route(s) for the "hello" endpoint.
    * We register one GET route at `/api/hello` that calls `hello_handler`.
*/

use axum::{routing::get, Router};

use crate::api::hello::handler::hello_handler;
use crate::config::state::AppState;

pub fn hello_routes() -> Router<AppState> {
    Router::new().route("/api/hello", get(hello_handler))
}
