//! In-memory [`TeacherStore`] for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::teachers::model::{Teacher, TeacherId};
use crate::modules::teachers::store::{StoreError, TeacherStore};

/// Mirrors the constraints of the `teachers` table: unique email and a
/// non-empty credential hash.
#[derive(Default)]
pub struct InMemoryTeacherStore {
    teachers: Mutex<Vec<Teacher>>,
    calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryTeacherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent operation fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Stored record including its credential hash.
    pub async fn raw(&self, id: TeacherId) -> Option<Teacher> {
        self.teachers.lock().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.teachers.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn empty_hash() -> StoreError {
    StoreError::Database(sqlx::Error::Protocol(
        "password_hash must not be empty".to_string(),
    ))
}

fn email_conflict() -> StoreError {
    StoreError::UniqueViolation("teachers_email_key".to_string())
}

#[async_trait]
impl TeacherStore for InMemoryTeacherStore {
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, StoreError> {
        self.begin()?;
        if teacher.password_hash.is_empty() {
            return Err(empty_hash());
        }

        let mut teachers = self.teachers.lock().await;
        if teachers.iter().any(|t| t.email == teacher.email) {
            return Err(email_conflict());
        }

        let mut created = teacher.clone();
        created.id = TeacherId::new();
        teachers.push(created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: TeacherId) -> Result<Teacher, StoreError> {
        self.begin()?;
        self.teachers
            .lock()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<Teacher, StoreError> {
        self.begin()?;
        self.teachers
            .lock()
            .await
            .iter()
            .find(|t| t.email == email)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Teacher>, StoreError> {
        self.begin()?;
        let mut teachers = self.teachers.lock().await.clone();
        teachers.sort_by(|a, b| {
            (a.full_name.is_empty(), &a.full_name).cmp(&(b.full_name.is_empty(), &b.full_name))
        });
        Ok(teachers)
    }

    async fn update(&self, teacher: &Teacher) -> Result<Teacher, StoreError> {
        self.begin()?;
        let mut teachers = self.teachers.lock().await;

        if teachers
            .iter()
            .any(|t| t.id != teacher.id && t.email == teacher.email)
        {
            return Err(email_conflict());
        }

        let existing = teachers
            .iter_mut()
            .find(|t| t.id == teacher.id)
            .ok_or(StoreError::NotFound)?;

        let password_hash = if teacher.password_hash.is_empty() {
            std::mem::take(&mut existing.password_hash)
        } else {
            teacher.password_hash.clone()
        };

        *existing = Teacher {
            password_hash,
            ..teacher.clone()
        };
        Ok(existing.clone())
    }

    async fn update_password_hash(
        &self,
        id: TeacherId,
        password_hash: &str,
    ) -> Result<(), StoreError> {
        self.begin()?;
        if password_hash.is_empty() {
            return Err(empty_hash());
        }

        let mut teachers = self.teachers.lock().await;
        let existing = teachers
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        existing.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn delete(&self, id: TeacherId) -> Result<(), StoreError> {
        self.begin()?;
        let mut teachers = self.teachers.lock().await;
        let before = teachers.len();
        teachers.retain(|t| t.id != id);

        if teachers.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
