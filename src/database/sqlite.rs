use crate::database::model::{DbBakedGood, DbBakery};
use crate::database::BakeryRepository;
use crate::domain::{BakedGood, Bakery};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakeryRepository for SqliteRepository {
    async fn get_all_bakeries(&self) -> Result<Vec<Bakery>> {
        let rows = sqlx::query_as::<_, DbBakery>("SELECT id, name FROM bakeries ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to load bakeries")?;

        Ok(rows.into_iter().map(Bakery::from).collect())
    }

    async fn get_bakery_by_id(&self, id: i64) -> Result<Option<Bakery>> {
        let row_opt =
            sqlx::query_as::<_, DbBakery>("SELECT id, name FROM bakeries WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context(format!("Failed to load bakery {}", id))?;

        match row_opt {
            Some(row) => {
                tracing::debug!(bakery = %row, "found bakery");
                Ok(Some(row.into()))
            }
            None => Ok(None),
        }
    }

    async fn get_baked_goods_by_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>> {
        let rows = sqlx::query_as::<_, DbBakedGood>(
            r#"
            SELECT id, name, price, bakery_id
            FROM baked_goods
            WHERE bakery_id = ?
            ORDER BY id
            "#,
        )
        .bind(bakery_id)
        .fetch_all(&self.pool)
        .await
        .context(format!("Failed to load baked goods for bakery {}", bakery_id))?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    async fn get_baked_goods_by_price(&self) -> Result<Vec<BakedGood>> {
        let rows = sqlx::query_as::<_, DbBakedGood>(
            r#"
            SELECT id, name, price, bakery_id
            FROM baked_goods
            ORDER BY price DESC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load baked goods by price")?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    async fn get_most_expensive_baked_good(&self) -> Result<Option<BakedGood>> {
        // same ordering as get_baked_goods_by_price, so ties resolve to the lowest id
        let row_opt = sqlx::query_as::<_, DbBakedGood>(
            r#"
            SELECT id, name, price, bakery_id
            FROM baked_goods
            ORDER BY price DESC, id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load most expensive baked good")?;

        if let Some(row) = &row_opt {
            tracing::debug!(baked_good = %row, "found most expensive baked good");
        }

        Ok(row_opt.map(BakedGood::from))
    }
}
