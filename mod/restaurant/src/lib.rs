pub mod api;
pub mod model;
pub mod service;
pub mod store;

use std::sync::Arc;

use axum::Router;

use resto_core::{Module, ServiceError};
use resto_sql::SQLStore;

use service::RestaurantService;

/// Restaurant module — CRUD over the restaurant resource.
pub struct RestaurantModule {
    service: Arc<RestaurantService>,
}

impl RestaurantModule {
    pub fn new(db: Arc<dyn SQLStore>) -> Result<Self, ServiceError> {
        Ok(Self {
            service: Arc::new(RestaurantService::new(db)?),
        })
    }
}

impl Module for RestaurantModule {
    fn name(&self) -> &str {
        "restaurant"
    }

    fn routes(&self) -> Router {
        api::router(self.service.clone())
    }
}
