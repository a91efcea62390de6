use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use resto_core::ServiceError;

use super::AppState;
use crate::model::{CreateRestaurant, Restaurant, UpdateRestaurant};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/restaurant", post(create_restaurant))
        .route(
            "/restaurant/{id}",
            get(get_restaurant)
                .put(update_restaurant)
                .delete(delete_restaurant),
        )
}

async fn create_restaurant(
    State(svc): State<AppState>,
    Json(body): Json<CreateRestaurant>,
) -> Result<impl IntoResponse, ServiceError> {
    let created = svc.create_restaurant(body)?;

    // These routes are mounted under /api by the server binary.
    let location = format!("/api/restaurant/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn get_restaurant(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Restaurant>, ServiceError> {
    svc.get_restaurant(id).map(Json)
}

async fn update_restaurant(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateRestaurant>,
) -> Result<StatusCode, ServiceError> {
    svc.update_restaurant(id, body)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_restaurant(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_restaurant(id)?;
    Ok(StatusCode::NO_CONTENT)
}
