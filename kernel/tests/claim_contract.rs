//! Contract tests for `TotemRepository` run against an in-memory fake.
//! The fake applies the same conditional-update semantics the Postgres
//! implementation expresses in SQL, which lets the one-winner claim
//! property be exercised without a database.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use kernel::model::{
    id::{TotemId, UserId},
    totem::{
        event::{ClaimTotem, CreateTotem, DeleteTotem, ReleaseTotem, StartTotem},
        Totem, TotemStatus,
    },
};
use kernel::repository::totem::TotemRepository;
use shared::error::{AppError, AppResult};
use tokio::sync::broadcast;

struct InMemoryTotemRepository {
    totens: Mutex<HashMap<TotemId, Totem>>,
    tx: broadcast::Sender<TotemId>,
}

impl InMemoryTotemRepository {
    fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self {
            totens: Mutex::new(HashMap::new()),
            tx,
        }
    }

    fn insert(&self, totem: Totem) {
        self.totens.lock().unwrap().insert(totem.totem_id, totem);
    }
}

#[async_trait]
impl TotemRepository for InMemoryTotemRepository {
    async fn create(&self, event: CreateTotem) -> AppResult<TotemId> {
        let totem_id = TotemId::new();
        self.insert(Totem {
            totem_id,
            name: event.name,
            status: TotemStatus::Parado,
            claimed_by: None,
            registered_by: event.registered_by,
        });
        let _ = self.tx.send(totem_id);
        Ok(totem_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Totem>> {
        Ok(self.totens.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_status(&self, status: TotemStatus) -> AppResult<Vec<Totem>> {
        Ok(self
            .totens
            .lock()
            .unwrap()
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, totem_id: TotemId) -> AppResult<Option<Totem>> {
        Ok(self.totens.lock().unwrap().get(&totem_id).cloned())
    }

    async fn claim(&self, event: ClaimTotem) -> AppResult<()> {
        let mut totens = self.totens.lock().unwrap();
        let totem = totens
            .get_mut(&event.totem_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("totem ({})", event.totem_id)))?;
        totem.claim(event.claimed_by)?;
        let _ = self.tx.send(event.totem_id);
        Ok(())
    }

    async fn start(&self, event: StartTotem) -> AppResult<()> {
        let mut totens = self.totens.lock().unwrap();
        let totem = totens
            .get_mut(&event.totem_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("totem ({})", event.totem_id)))?;
        totem.start()?;
        let _ = self.tx.send(event.totem_id);
        Ok(())
    }

    async fn release(&self, event: ReleaseTotem) -> AppResult<()> {
        let mut totens = self.totens.lock().unwrap();
        let totem = totens
            .get_mut(&event.totem_id)
            .ok_or_else(|| AppError::EntityNotFound(format!("totem ({})", event.totem_id)))?;
        totem.release()?;
        let _ = self.tx.send(event.totem_id);
        Ok(())
    }

    async fn delete(&self, event: DeleteTotem) -> AppResult<()> {
        // absent id is a no-op success
        self.totens.lock().unwrap().remove(&event.totem_id);
        let _ = self.tx.send(event.totem_id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<TotemId> {
        self.tx.subscribe()
    }
}

fn available_totem() -> Totem {
    Totem {
        totem_id: TotemId::new(),
        name: "Totem Praça".into(),
        status: TotemStatus::Iniciado,
        claimed_by: None,
        registered_by: UserId::new(),
    }
}

#[tokio::test]
async fn concurrent_claims_yield_exactly_one_winner() {
    let repo = Arc::new(InMemoryTotemRepository::new());
    let totem = available_totem();
    let totem_id = totem.totem_id;
    repo.insert(totem);

    let mut handles = Vec::new();
    for _ in 0..16 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.claim(ClaimTotem::new(totem_id, UserId::new())).await
        }));
    }

    let mut wins = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => wins += 1,
            Err(AppError::AlreadyClaimed(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(conflicts, 15);

    let claimed = repo.find_by_id(totem_id).await.unwrap().unwrap();
    assert_eq!(claimed.status, TotemStatus::Aguardo);
    assert!(claimed.claimed_by.is_some());
}

#[tokio::test]
async fn claiming_a_missing_totem_is_not_found() {
    let repo = InMemoryTotemRepository::new();
    let res = repo.claim(ClaimTotem::new(TotemId::new(), UserId::new())).await;
    assert!(matches!(res, Err(AppError::EntityNotFound(_))));
}

#[tokio::test]
async fn claim_scenario_matches_lifecycle() {
    let repo = InMemoryTotemRepository::new();
    let totem = available_totem();
    let totem_id = totem.totem_id;
    repo.insert(totem);

    let user_a = UserId::new();
    repo.claim(ClaimTotem::new(totem_id, user_a)).await.unwrap();

    let t = repo.find_by_id(totem_id).await.unwrap().unwrap();
    assert_eq!(t.status, TotemStatus::Aguardo);
    assert_eq!(t.claimed_by, Some(user_a));

    let res = repo.claim(ClaimTotem::new(totem_id, UserId::new())).await;
    assert!(matches!(res, Err(AppError::AlreadyClaimed(_))));
}

#[tokio::test]
async fn deleting_an_absent_totem_succeeds() {
    let repo = InMemoryTotemRepository::new();
    repo.delete(DeleteTotem {
        totem_id: TotemId::new(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn mutations_notify_subscribers() {
    let repo = InMemoryTotemRepository::new();
    let mut rx = repo.subscribe();

    let totem = available_totem();
    let totem_id = totem.totem_id;
    repo.insert(totem);
    repo.claim(ClaimTotem::new(totem_id, UserId::new()))
        .await
        .unwrap();

    assert_eq!(rx.recv().await.unwrap(), totem_id);
}
