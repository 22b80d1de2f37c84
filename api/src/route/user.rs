use axum::{
    routing::{delete, get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{
    delete_user, show_current_user, show_total_points, show_user_list, toggle_user_role,
    update_current_user_profile,
};

pub fn build_user_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(show_user_list))
        .route("/me", get(show_current_user))
        .route("/me/points", get(show_total_points))
        .route("/me/profile", put(update_current_user_profile))
        .route("/:user_id/role/toggle", put(toggle_user_role))
        .route("/:user_id", delete(delete_user));

    Router::new().nest("/users", routers)
}
