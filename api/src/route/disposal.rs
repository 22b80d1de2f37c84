use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::disposal::{
    approve_disposal, register_disposal, reject_disposal, show_all_disposals, show_own_disposals,
};

pub fn build_disposal_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(register_disposal))
        .route("/", get(show_all_disposals))
        .route("/me", get(show_own_disposals))
        .route("/:disposal_id/approve", put(approve_disposal))
        .route("/:disposal_id/reject", put(reject_disposal));

    Router::new().nest("/descartes", routers)
}
