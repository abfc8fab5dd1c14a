use crate::domain::{BakedGood, Bakery};
use anyhow::Result;
use async_trait::async_trait;

pub mod model;
pub mod sqlite;

// read-only access to bakeries and their baked goods.
// handlers hold this behind an Arc<dyn ...>, sqlx::Pool is thread safe
// sqlite specific implementation lives in "sqlite.rs"
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    // bakeries, ordered by id
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>>;
    async fn get_bakery_by_id(&self, id: i64) -> Result<Option<Bakery>>;

    // children of a single bakery, in insertion (id) order
    async fn get_baked_goods_by_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>>;

    // price descending, equal prices ordered by id ascending
    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>>;
    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>>;
}
