use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use model::{NewUser, RecordId, UserRecord};

use crate::{ApiError, UserGateway};

/// In-memory UserGateway for tests. Ids are assigned sequentially from 1.
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    users: Arc<Mutex<Vec<UserRecord>>>,
    failing: Arc<AtomicBool>,
    list_calls: Arc<AtomicUsize>,
    create_calls: Arc<AtomicUsize>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway already holding `users`.
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let gateway = Self::default();
        *gateway.lock() = users;
        gateway
    }

    /// While set, every call fails with a 503.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.lock().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UserRecord>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failing(&self) -> Result<(), ApiError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Status(503))
        } else {
            Ok(())
        }
    }
}

impl UserGateway for MemoryGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Ok(self.users())
    }

    async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        let mut users = self.lock();
        let id = RecordId::Number(users.len() as u64 + 1);
        let record = UserRecord::from_new(id, user);
        users.push(record.clone());
        Ok(record)
    }
}
