//! In-memory test doubles for the entity use cases and the HTTP layer.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::gateways::EntityRepository;
use crate::domain::models::entity::{Entity, EntityId};
use crate::shared::errors::RepositoryError;

/// Entity repository backed by a `BTreeMap`, mimicking the store's
/// primary-key and email uniqueness constraints.
pub(crate) struct InMemoryEntityRepository<E> {
    rows: Mutex<BTreeMap<EntityId, E>>,
    broken: bool,
}

impl<E: Entity> InMemoryEntityRepository<E> {
    pub(crate) fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            broken: false,
        }
    }

    /// Repository whose every call fails like an unreachable database
    pub(crate) fn broken() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            broken: true,
        }
    }

    pub(crate) fn with_entity(self, entity: E) -> Self {
        self.rows.lock().unwrap().insert(entity.id(), entity);
        self
    }

    pub(crate) fn snapshot(&self, id: EntityId) -> Option<E> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.broken {
            return Err(RepositoryError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryEntityRepository<E> {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, entity: &E) -> Result<E, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&entity.id()) {
            return Err(RepositoryError::UniqueViolation("pkey".to_string()));
        }
        if rows.values().any(|e| e.email() == entity.email()) {
            return Err(RepositoryError::UniqueViolation("email_key".to_string()));
        }
        rows.insert(entity.id(), entity.clone());
        Ok(entity.clone())
    }

    async fn update(&self, entity: &E) -> Result<Option<E>, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(Some(entity.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn exists_by_email(
        &self,
        email: &str,
        exclude_id: Option<EntityId>,
    ) -> Result<bool, RepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .any(|e| e.email() == email && Some(e.id()) != exclude_id))
    }
}

pub(crate) fn customer_data(email: &str) -> crate::domain::models::CreateCustomerData {
    crate::domain::models::CreateCustomerData {
        image_url: None,
        name: "John Doe".to_string(),
        email: email.to_string(),
        password: None,
        rating: 5,
        balance: 100,
        location: "New York".to_string(),
        destination: "Los Angeles".to_string(),
    }
}

pub(crate) fn customer(id: i64, email: &str) -> crate::domain::models::Customer {
    crate::domain::models::Customer::new(EntityId::new(id).unwrap(), customer_data(email), None)
}
