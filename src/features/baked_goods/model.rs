use crate::domain::BakedGood;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonBakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

pub fn serialize_baked_good(baked_good: &BakedGood) -> JsonBakedGood {
    JsonBakedGood {
        id: baked_good.id,
        name: baked_good.name.to_owned(),
        price: baked_good.price,
        bakery_id: baked_good.bakery_id,
    }
}
