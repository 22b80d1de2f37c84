use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::totem::{
    available_totem_stream, claim_totem, delete_totem, register_totem, release_totem,
    show_available_totens, show_totem, show_totem_list, start_totem,
};

pub fn build_totem_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_totem))
        .route("/", get(show_totem_list))
        .route("/available", get(show_available_totens))
        .route("/available/stream", get(available_totem_stream))
        .route("/:totem_id", get(show_totem))
        .route("/:totem_id", delete(delete_totem))
        .route("/:totem_id/claim", post(claim_totem))
        .route("/:totem_id/start", put(start_totem))
        .route("/:totem_id/release", put(release_totem));

    Router::new().nest("/totens", routers)
}
