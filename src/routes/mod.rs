use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, with_security_headers};
use crate::handlers::{events, users};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/usuarios", post(users::register).get(users::login))
        .route(
            "/eventos",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/eventos/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer());

    with_security_headers(router)
}
