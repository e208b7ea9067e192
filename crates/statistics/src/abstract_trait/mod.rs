pub mod repository;
pub mod service;

pub use self::repository::{
    DynProductRepository, DynSellRepository, DynUserRepository, EntityRepositoryTrait,
    SellRepositoryTrait,
};
pub use self::service::{
    DynProductService, DynSellService, DynUserService, ProductServiceTrait, SellServiceTrait,
    UserServiceTrait,
};
