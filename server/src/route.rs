use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handler::AppModule;
use crate::response::Envelope;

pub use self::book::*;

mod book;

pub fn router(module: AppModule) -> Router {
    Router::<AppModule>::new()
        .route_book()
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(module)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::fail("Halaman tidak ditemukan")),
    )
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::fail(
            "Halaman tidak dapat diakses dengan method tersebut",
        )),
    )
}
