use crate::domain::{BakedGood, Bakery};
use crate::features::baked_goods::model::{serialize_baked_good, JsonBakedGood};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JsonBakery {
    pub id: i64,
    pub name: String,
    pub baked_goods: Vec<JsonBakedGood>,
}

// `baked_goods` is expected to be exactly this bakery's goods, already ordered
pub fn serialize_bakery(bakery: &Bakery, baked_goods: &[BakedGood]) -> JsonBakery {
    JsonBakery {
        id: bakery.id,
        name: bakery.name.to_owned(),
        baked_goods: baked_goods.iter().map(serialize_baked_good).collect(),
    }
}
