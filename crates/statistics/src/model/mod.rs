pub mod product;
pub mod sell;
pub mod user;
