//! Contract tests for `UserRepository` against an in-memory fake: points
//! are authoritative on the profile, and deletes of absent users are
//! no-op successes.

use std::{
    collections::HashMap,
    sync::Mutex,
};

use async_trait::async_trait;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserProfile, UpdateUserRole},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(Default)]
struct InMemoryUserRepository {
    usuarios: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    fn insert(&self, user: User) {
        self.usuarios.lock().unwrap().insert(user.user_id, user);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        self.insert(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            age: event.age,
            role: Role::default(),
            points: 0,
        });
        Ok(user_id)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.usuarios.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.usuarios.lock().unwrap().get(&user_id).cloned())
    }

    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()> {
        let mut usuarios = self.usuarios.lock().unwrap();
        let user = usuarios
            .get_mut(&event.user_id)
            .ok_or_else(|| AppError::EntityNotFound("specified user not found".into()))?;
        user.user_name = event.user_name;
        user.age = event.age;
        Ok(())
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let mut usuarios = self.usuarios.lock().unwrap();
        let user = usuarios
            .get_mut(&event.user_id)
            .ok_or_else(|| AppError::EntityNotFound("specified user not found".into()))?;
        user.role = event.role;
        Ok(())
    }

    async fn total_points(&self, user_id: UserId) -> AppResult<i32> {
        self.usuarios
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|u| u.points)
            .ok_or_else(|| AppError::EntityNotFound("specified user not found".into()))
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        // absent id is a no-op success
        self.usuarios.lock().unwrap().remove(&event.user_id);
        Ok(())
    }
}

fn profile_with_points(points: i32) -> User {
    User {
        user_id: UserId::new(),
        user_name: "Ana".into(),
        email: "ana@example.com".into(),
        age: Some(31),
        role: Role::Usuario,
        points,
    }
}

#[tokio::test]
async fn total_points_reads_the_profile_not_the_records() {
    let repo = InMemoryUserRepository::default();
    let user = profile_with_points(40);
    let user_id = user.user_id;
    repo.insert(user);

    // 40 regardless of how many disposal records exist elsewhere.
    assert_eq!(repo.total_points(user_id).await.unwrap(), 40);
}

#[tokio::test]
async fn total_points_for_a_missing_user_is_not_found() {
    let repo = InMemoryUserRepository::default();
    let res = repo.total_points(UserId::new()).await;
    assert!(matches!(res, Err(AppError::EntityNotFound(_))));
}

#[tokio::test]
async fn registration_defaults_to_usuario_with_zero_points() {
    let repo = InMemoryUserRepository::default();
    let user_id = repo
        .create(CreateUser {
            user_name: "Carlos".into(),
            email: "carlos@example.com".into(),
            password: "senha123".into(),
            age: None,
        })
        .await
        .unwrap();

    let user = repo.find_by_id(user_id).await.unwrap().unwrap();
    assert_eq!(user.role, Role::Usuario);
    assert_eq!(user.points, 0);
}

#[tokio::test]
async fn toggling_a_role_twice_restores_it() {
    let repo = InMemoryUserRepository::default();
    let user = profile_with_points(0);
    let user_id = user.user_id;
    let original = user.role;
    repo.insert(user);

    for _ in 0..2 {
        let current = repo.find_by_id(user_id).await.unwrap().unwrap().role;
        repo.update_role(UpdateUserRole {
            user_id,
            role: current.toggled(),
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.find_by_id(user_id).await.unwrap().unwrap().role, original);
}

#[tokio::test]
async fn deleting_an_absent_user_succeeds() {
    let repo = InMemoryUserRepository::default();
    repo.delete(DeleteUser {
        user_id: UserId::new(),
    })
    .await
    .unwrap();
}
