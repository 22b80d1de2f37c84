use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::{
    auth::AuthRepositoryImpl, disposal::DisposalRepositoryImpl, health::HealthCheckRepositoryImpl,
    totem::TotemRepositoryImpl, user::UserRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, disposal::DisposalRepository, health::HealthCheckRepository,
    totem::TotemRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    totem_repository: Arc<dyn TotemRepository>,
    disposal_repository: Arc<dyn DisposalRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let totem_repository = Arc::new(TotemRepositoryImpl::new(pool.clone()));
        // The disposal repository releases totens on completion, so it
        // shares the totem change-feed sender.
        let disposal_repository = Arc::new(DisposalRepositoryImpl::new(
            pool.clone(),
            totem_repository.notifier(),
        ));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            totem_repository,
            disposal_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn totem_repository(&self) -> Arc<dyn TotemRepository> {
        self.totem_repository.clone()
    }

    pub fn disposal_repository(&self) -> Arc<dyn DisposalRepository> {
        self.disposal_repository.clone()
    }
}
