pub mod api;
pub mod page;
pub mod product;
pub mod sell;
pub mod user;

pub use self::api::ApiResponse;
pub use self::page::Paged;
pub use self::product::ProductResponse;
pub use self::sell::SellResponse;
pub use self::user::UserResponse;
