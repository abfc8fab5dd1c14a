use crate::config::BakeryConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::BakeryRepository;
use crate::domain::{BakedGood, Bakery};
use crate::AppState;
use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

// --- Manual Mock: BakeryRepository ---
// keeps bakeries and baked goods in plain vectors, mirroring the ordering rules
// of the sqlite repository. flip `fail` to simulate a broken database
#[derive(Clone, Default)]
pub struct MockRepository {
    pub bakeries: Arc<Mutex<Vec<Bakery>>>,
    pub baked_goods: Arc<Mutex<Vec<BakedGood>>>,
    pub fail: Arc<Mutex<bool>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bakery(&self, id: i64, name: &str) {
        self.bakeries.lock().unwrap().push(Bakery {
            id,
            name: name.to_string(),
        });
    }

    pub fn add_baked_good(&self, id: i64, name: &str, price: f64, bakery_id: i64) {
        self.baked_goods.lock().unwrap().push(BakedGood {
            id,
            name: name.to_string(),
            price,
            bakery_id,
        });
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn check(&self) -> Result<()> {
        if *self.fail.lock().unwrap() {
            anyhow::bail!("mock database is unavailable");
        }
        Ok(())
    }

    fn sorted_by_price(&self) -> Vec<BakedGood> {
        let mut goods = self.baked_goods.lock().unwrap().clone();
        goods.sort_by(|a, b| b.price.total_cmp(&a.price).then(a.id.cmp(&b.id)));
        goods
    }
}

#[async_trait]
impl BakeryRepository for MockRepository {
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>> {
        self.check()?;
        let mut bakeries = self.bakeries.lock().unwrap().clone();
        bakeries.sort_by_key(|b| b.id);
        Ok(bakeries)
    }

    async fn get_bakery_by_id(&self, id: i64) -> Result<Option<Bakery>> {
        self.check()?;
        let bakeries = self.bakeries.lock().unwrap();
        Ok(bakeries.iter().find(|b| b.id == id).cloned())
    }

    async fn get_baked_goods_by_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>> {
        self.check()?;
        let mut goods: Vec<BakedGood> = self
            .baked_goods
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.bakery_id == bakery_id)
            .cloned()
            .collect();
        goods.sort_by_key(|g| g.id);
        Ok(goods)
    }

    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>> {
        self.check()?;
        Ok(self.sorted_by_price())
    }

    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>> {
        self.check()?;
        Ok(self.sorted_by_price().into_iter().next())
    }
}

pub fn test_config() -> Arc<BakeryConfig> {
    Arc::new(BakeryConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        ..BakeryConfig::default()
    })
}

pub fn mock_state(repo: MockRepository) -> AppState {
    AppState {
        repo: Arc::new(repo),
        config: test_config(),
    }
}

// the "Sunrise" bakery with a muffin and a croissant
pub fn sunrise_mock() -> MockRepository {
    let repo = MockRepository::new();
    repo.add_bakery(1, "Sunrise");
    repo.add_baked_good(1, "Muffin", 2.5, 1);
    repo.add_baked_good(2, "Croissant", 3.75, 1);
    repo
}

// a fresh in-memory database with the real schema.
// one connection only: every new in-memory connection is its own empty database
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn insert_bakery(pool: &Pool<Sqlite>, id: i64, name: &str) {
    sqlx::query("INSERT INTO bakeries (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert bakery");
}

pub async fn insert_baked_good(
    pool: &Pool<Sqlite>,
    id: i64,
    name: &str,
    price: f64,
    bakery_id: i64,
) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO baked_goods (id, name, price, bakery_id) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(price)
        .bind(bakery_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn sqlite_state(pool: Pool<Sqlite>) -> AppState {
    AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
        config: test_config(),
    }
}

// send a GET through the router, hand back the status, content type and raw body
pub async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
