pub mod model;

use crate::database::BakeryRepository;
use crate::domain::Bakery;
use crate::features::error::ApiError;
use crate::features::json::PrettyJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use model::{serialize_bakery, JsonBakery};

pub fn bakeries_router() -> Router<AppState> {
    Router::new()
        .route("/bakeries", get(list_bakeries_handler))
        .route("/bakeries/{id}", get(get_bakery_handler))
}

async fn list_bakeries_handler(
    State(state): State<AppState>,
) -> Result<PrettyJson<Vec<JsonBakery>>, ApiError> {
    let bakeries = state.repo.get_all_bakeries().await?;

    let mut json_bakeries = Vec::with_capacity(bakeries.len());
    for bakery in &bakeries {
        json_bakeries.push(load_json_bakery(state.repo.as_ref(), bakery).await?);
    }

    Ok(PrettyJson(json_bakeries))
}

async fn get_bakery_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<PrettyJson<JsonBakery>, ApiError> {
    // a non-integer id can never name a bakery, treat it like an unknown route
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::NotFound("Not found".to_string()))?;

    let bakery = state
        .repo
        .get_bakery_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bakery not found".to_string()))?;

    Ok(PrettyJson(load_json_bakery(state.repo.as_ref(), &bakery).await?))
}

// one query per bakery for its children, run explicitly here
async fn load_json_bakery(
    repo: &dyn BakeryRepository,
    bakery: &Bakery,
) -> anyhow::Result<JsonBakery> {
    let baked_goods = repo.get_baked_goods_by_bakery(bakery.id).await?;
    Ok(serialize_bakery(bakery, &baked_goods))
}
