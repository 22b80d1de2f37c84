use axum::Router;
use registry::AppRegistry;

use super::{
    auth::build_auth_routers, disposal::build_disposal_routers,
    health::build_health_check_routers, totem::build_totem_routers, user::build_user_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_totem_routers())
        .merge(build_disposal_routers());

    Router::new().nest("/api/v1", router)
}
