use std::sync::{Arc, OnceLock};

use anyhow::anyhow;
use jschs_core::{AppError, CredentialCodec};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::modules::teachers::model::{Teacher, TeacherId};
use crate::modules::teachers::store::{StoreError, TeacherStore};
use crate::validator::format_errors;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// Verified against when the email is unknown so both login failures cost one hash check.
const UNKNOWN_ACCOUNT_PASSWORD: &str = "jschs-unknown-account";

/// Business rules around the teacher entity.
///
/// Every record returned from this service has its credential hash cleared.
#[derive(Clone)]
pub struct TeacherService {
    store: Arc<dyn TeacherStore>,
    codec: Arc<dyn CredentialCodec>,
    dummy_hash: Arc<OnceLock<String>>,
}

impl TeacherService {
    pub fn new(store: Arc<dyn TeacherStore>, codec: Arc<dyn CredentialCodec>) -> Self {
        Self {
            store,
            codec,
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Hash with the codec's cost, computed on first use.
    fn dummy_hash(&self) -> &str {
        self.dummy_hash.get_or_init(|| {
            self.codec
                .hash(UNKNOWN_ACCOUNT_PASSWORD)
                .unwrap_or_else(|e| {
                    error!(error = %e.error, "Failed to prepare unknown-account hash");
                    String::new()
                })
        })
    }

    #[instrument(skip(self, teacher, password), fields(email = %teacher.email))]
    pub async fn register(&self, mut teacher: Teacher, password: &str) -> Result<Teacher, AppError> {
        if password.is_empty() {
            return Err(AppError::bad_request(anyhow!("password is required")));
        }
        validate(&teacher)?;

        teacher.password_hash = self.codec.hash(password)?;

        let created = self.store.create(&teacher).await.map_err(store_error)?;
        info!(teacher_id = %created.id, "Teacher registered");

        Ok(created.redacted())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: TeacherId) -> Result<Teacher, AppError> {
        let teacher = self.store.get_by_id(id).await.map_err(store_error)?;
        Ok(teacher.redacted())
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        let teachers = self.store.get_all().await.map_err(store_error)?;
        Ok(teachers.into_iter().map(Teacher::redacted).collect())
    }

    /// Check a plaintext password against the stored hash for `email`.
    ///
    /// An unknown email and a wrong password produce the same error.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Teacher, AppError> {
        let teacher = match self.store.get_by_email(email.trim()).await {
            Ok(teacher) => teacher,
            Err(StoreError::NotFound) => {
                let _ = self.codec.verify(password, self.dummy_hash())?;
                return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
            }
            Err(e) => return Err(store_error(e)),
        };

        if !self.codec.verify(password, &teacher.password_hash)? {
            warn!(teacher_id = %teacher.id, "Password verification failed");
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        Ok(teacher.redacted())
    }

    /// Replace the profile fields of an existing teacher. The stored
    /// credential hash is never touched here.
    #[instrument(skip(self, teacher), fields(teacher_id = %teacher.id))]
    pub async fn update_profile(&self, mut teacher: Teacher) -> Result<Teacher, AppError> {
        if teacher.id.is_nil() {
            return Err(AppError::bad_request(anyhow!("Teacher id is required")));
        }
        validate(&teacher)?;

        teacher.password_hash.clear();

        let updated = self.store.update(&teacher).await.map_err(store_error)?;
        info!("Teacher profile updated");

        Ok(updated.redacted())
    }

    #[instrument(skip(self, new_password))]
    pub async fn change_password(&self, id: TeacherId, new_password: &str) -> Result<(), AppError> {
        if id.is_nil() {
            return Err(AppError::bad_request(anyhow!("Teacher id is required")));
        }
        if new_password.is_empty() {
            return Err(AppError::bad_request(anyhow!("new_password is required")));
        }

        let password_hash = self.codec.hash(new_password)?;
        self.store
            .update_password_hash(id, &password_hash)
            .await
            .map_err(store_error)?;
        info!("Teacher password changed");

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: TeacherId) -> Result<(), AppError> {
        if id.is_nil() {
            return Err(AppError::bad_request(anyhow!("Teacher id is required")));
        }

        self.store.delete(id).await.map_err(store_error)?;
        info!("Teacher deleted");

        Ok(())
    }
}

fn validate(teacher: &Teacher) -> Result<(), AppError> {
    teacher
        .validate()
        .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))
}

fn store_error(err: StoreError) -> AppError {
    match err {
        StoreError::NotFound => AppError::not_found(anyhow!("Teacher not found")),
        StoreError::UniqueViolation(constraint) => {
            warn!(%constraint, "Unique constraint violated");
            AppError::conflict(anyhow!("A teacher with this email already exists"))
        }
        StoreError::Database(e) => {
            error!(error = %e, "Teacher store failure");
            AppError::internal(anyhow!("Internal server error"))
        }
    }
}
