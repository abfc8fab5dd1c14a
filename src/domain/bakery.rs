#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
}
