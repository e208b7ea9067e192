use std::{fmt, sync::Arc};

use shared::config::ConnectionPool;
use shared::utils::Metrics;

use crate::abstract_trait::{
    DynProductRepository, DynProductService, DynSellRepository, DynSellService, DynUserRepository,
    DynUserService,
};
use crate::model::{product::Product, sell::Sell, user::User};
use crate::repository::PgRepository;
use crate::service::{ProductService, SellService, UserService};

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_service: DynUserService,
    pub product_service: DynProductService,
    pub sell_service: DynSellService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_service", &"UserService")
            .field("product_service", &"ProductService")
            .field("sell_service", &"SellService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, metrics: Metrics) -> Self {
        let user_repository: DynUserRepository = Arc::new(PgRepository::<User>::new(pool.clone()));
        let product_repository: DynProductRepository =
            Arc::new(PgRepository::<Product>::new(pool.clone()));
        let sell_repository: DynSellRepository = Arc::new(PgRepository::<Sell>::new(pool));

        let user_service =
            Arc::new(UserService::new(user_repository, metrics.clone())) as DynUserService;
        let product_service =
            Arc::new(ProductService::new(product_repository, metrics.clone())) as DynProductService;
        let sell_service = Arc::new(SellService::new(sell_repository, metrics)) as DynSellService;

        Self {
            user_service,
            product_service,
            sell_service,
        }
    }
}
