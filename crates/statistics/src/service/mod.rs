mod product;
mod sell;
mod user;

pub use self::product::ProductService;
pub use self::sell::SellService;
pub use self::user::UserService;
