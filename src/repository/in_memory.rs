use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use super::{RepositoryError, RepositoryResult, WishRepository};
use crate::models::{AttendingStatus, Wish, WishRequest};

#[derive(Default)]
struct Inner {
    last_id: i32,
    wishes: BTreeMap<i32, Wish>,
}

/// Process-local wish storage. Ids start at 1 and are never reused.
///
/// Storage can be switched off with [`set_available`](Self::set_available)
/// to exercise failure paths; every call then fails with
/// [`RepositoryError::Unavailable`].
pub struct InMemoryWishRepository {
    inner: RwLock<Inner>,
    available: AtomicBool,
}

impl Default for InMemoryWishRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryWishRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.wishes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn check_available(&self) -> RepositoryResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Unavailable)
        }
    }
}

#[axum::async_trait]
impl WishRepository for InMemoryWishRepository {
    async fn ping(&self) -> RepositoryResult<()> {
        self.check_available()
    }

    async fn list(&self) -> RepositoryResult<Vec<Wish>> {
        self.check_available()?;
        let inner = self.inner.read().await;
        let mut wishes: Vec<Wish> = inner.wishes.values().cloned().collect();
        wishes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(wishes)
    }

    async fn find(&self, id: i32) -> RepositoryResult<Option<Wish>> {
        self.check_available()?;
        Ok(self.inner.read().await.wishes.get(&id).cloned())
    }

    async fn create(&self, request: &WishRequest) -> RepositoryResult<Wish> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let wish = Wish {
            id: inner.last_id,
            name: request.name.clone(),
            message: request.message.clone(),
            attending: request.attending,
            timestamp: Utc::now(),
        };
        inner.wishes.insert(wish.id, wish.clone());
        Ok(wish)
    }

    async fn update(&self, id: i32, request: &WishRequest) -> RepositoryResult<Wish> {
        self.check_available()?;
        let mut inner = self.inner.write().await;
        let wish = inner
            .wishes
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        wish.name = request.name.clone();
        wish.message = request.message.clone();
        wish.attending = request.attending;
        Ok(wish.clone())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.check_available()?;
        self.inner
            .write()
            .await
            .wishes
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn count(&self, attending: Option<AttendingStatus>) -> RepositoryResult<i64> {
        self.check_available()?;
        let inner = self.inner.read().await;
        let count = inner
            .wishes
            .values()
            .filter(|wish| attending.map_or(true, |status| wish.attending == status))
            .count();
        Ok(count as i64)
    }
}
