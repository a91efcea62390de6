pub mod restaurant;

use std::sync::Arc;

use axum::Router;

use crate::service::RestaurantService;

/// Shared application state.
pub type AppState = Arc<RestaurantService>;

/// Build the restaurant API router.
pub fn router(state: AppState) -> Router {
    Router::new().merge(restaurant::routes()).with_state(state)
}
