pub mod baked_goods;
pub mod bakeries;
pub mod error;
pub mod json;

use crate::AppState;
use axum::{response::Html, routing::get, Router};
use error::ApiError;

pub const INDEX_HTML: &str = "<h1>Bakery GET API</h1>";

// every feature router registers full paths, so they can simply be merged
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .merge(bakeries::bakeries_router())
        .merge(baked_goods::baked_goods_router())
        .fallback(fallback_handler)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
