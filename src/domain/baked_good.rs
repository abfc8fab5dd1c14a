// price is a plain float, as stored in SQLite's REAL column
#[derive(Debug, Clone, PartialEq)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}
