pub mod car_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(car_routes::create_car_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
