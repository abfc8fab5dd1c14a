pub mod model;

use crate::features::error::ApiError;
use crate::features::json::PrettyJson;
use crate::AppState;
use axum::{extract::State, routing::get, Router};
use model::{serialize_baked_good, JsonBakedGood};

pub fn baked_goods_router() -> Router<AppState> {
    Router::new()
        .route("/baked_goods/by_price", get(list_by_price_handler))
        .route("/baked_goods/most_expensive", get(most_expensive_handler))
}

async fn list_by_price_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<JsonBakedGood>>, ApiError> {
    let baked_goods = state.repo.get_baked_goods_by_price().await?;

    let json_baked_goods: Vec<JsonBakedGood> =
        baked_goods.iter().map(serialize_baked_good).collect();

    Ok(PrettyJson(json_baked_goods))
}

async fn most_expensive_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<JsonBakedGood>, ApiError> {
    match state.repo.get_most_expensive_baked_good().await? {
        Some(baked_good) => Ok(PrettyJson(serialize_baked_good(&baked_good))),
        None => Err(ApiError::NotFound("No baked goods found".to_string())),
    }
}
