pub mod baked_good;
pub mod bakery;

pub use baked_good::BakedGood;
pub use bakery::Bakery;
