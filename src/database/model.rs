use crate::domain::{BakedGood, Bakery};
use derive_more::derive::Display;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq, Display)]
#[display("{} (#{})", name, id)]
pub struct DbBakery {
    pub id: i64,
    pub name: String,
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Display)]
#[display("{} (#{}) at {}", name, id, price)]
pub struct DbBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

impl From<DbBakery> for Bakery {
    fn from(row: DbBakery) -> Self {
        Bakery {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<DbBakedGood> for BakedGood {
    fn from(row: DbBakedGood) -> Self {
        BakedGood {
            id: row.id,
            name: row.name,
            price: row.price,
            bakery_id: row.bakery_id,
        }
    }
}
