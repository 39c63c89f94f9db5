//! Persistence for teacher records.
//!
//! [`TeacherStore`] is the seam between the service and the database. The
//! production implementation is [`PgTeacherStore`]; tests use
//! [`InMemoryTeacherStore`](super::memory::InMemoryTeacherStore).

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::modules::teachers::model::{Teacher, TeacherId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("teacher not found")]
    NotFound,

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Self::UniqueViolation(
                db_err.constraint().unwrap_or("unknown").to_string(),
            ),
            other => Self::Database(other),
        }
    }
}

#[async_trait]
pub trait TeacherStore: Send + Sync {
    /// Insert a new record. The store assigns the identifier; `teacher.id` is
    /// ignored.
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, StoreError>;

    async fn get_by_id(&self, id: TeacherId) -> Result<Teacher, StoreError>;

    async fn get_by_email(&self, email: &str) -> Result<Teacher, StoreError>;

    /// All records ordered by full name, empty names last.
    async fn get_all(&self) -> Result<Vec<Teacher>, StoreError>;

    /// Replace the profile fields of `teacher.id`. An empty `password_hash`
    /// keeps the stored hash.
    async fn update(&self, teacher: &Teacher) -> Result<Teacher, StoreError>;

    async fn update_password_hash(
        &self,
        id: TeacherId,
        password_hash: &str,
    ) -> Result<(), StoreError>;

    async fn delete(&self, id: TeacherId) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgTeacherStore {
    db: PgPool,
}

impl PgTeacherStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeacherStore for PgTeacherStore {
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, StoreError> {
        let created = sqlx::query_as::<_, Teacher>(
            r#"
            INSERT INTO teachers (
                email, password_hash, full_name, phone, is_active, photo,
                date_of_birth, joining_date, gender, bio, address, designation, qualification
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, email, password_hash, full_name, phone, is_active, photo,
                      date_of_birth, joining_date, gender, bio, address, designation, qualification
            "#,
        )
        .bind(&teacher.email)
        .bind(&teacher.password_hash)
        .bind(&teacher.full_name)
        .bind(&teacher.phone)
        .bind(teacher.is_active)
        .bind(&teacher.photo)
        .bind(teacher.date_of_birth)
        .bind(teacher.joining_date)
        .bind(teacher.gender)
        .bind(&teacher.bio)
        .bind(&teacher.address)
        .bind(&teacher.designation)
        .bind(&teacher.qualification)
        .fetch_one(&self.db)
        .await?;

        Ok(created)
    }

    async fn get_by_id(&self, id: TeacherId) -> Result<Teacher, StoreError> {
        sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, email, password_hash, full_name, phone, is_active, photo,
                   date_of_birth, joining_date, gender, bio, address, designation, qualification
            FROM teachers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn get_by_email(&self, email: &str) -> Result<Teacher, StoreError> {
        sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, email, password_hash, full_name, phone, is_active, photo,
                   date_of_birth, joining_date, gender, bio, address, designation, qualification
            FROM teachers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn get_all(&self) -> Result<Vec<Teacher>, StoreError> {
        let teachers = sqlx::query_as::<_, Teacher>(
            r#"
            SELECT id, email, password_hash, full_name, phone, is_active, photo,
                   date_of_birth, joining_date, gender, bio, address, designation, qualification
            FROM teachers
            ORDER BY NULLIF(full_name, '') ASC NULLS LAST, created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(teachers)
    }

    async fn update(&self, teacher: &Teacher) -> Result<Teacher, StoreError> {
        sqlx::query_as::<_, Teacher>(
            r#"
            UPDATE teachers
            SET email = $2,
                full_name = $3,
                phone = $4,
                is_active = $5,
                photo = $6,
                date_of_birth = $7,
                joining_date = $8,
                gender = $9,
                bio = $10,
                address = $11,
                designation = $12,
                qualification = $13,
                password_hash = COALESCE(NULLIF($14, ''), password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, phone, is_active, photo,
                      date_of_birth, joining_date, gender, bio, address, designation, qualification
            "#,
        )
        .bind(teacher.id)
        .bind(&teacher.email)
        .bind(&teacher.full_name)
        .bind(&teacher.phone)
        .bind(teacher.is_active)
        .bind(&teacher.photo)
        .bind(teacher.date_of_birth)
        .bind(teacher.joining_date)
        .bind(teacher.gender)
        .bind(&teacher.bio)
        .bind(&teacher.address)
        .bind(&teacher.designation)
        .bind(&teacher.qualification)
        .bind(&teacher.password_hash)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn update_password_hash(
        &self,
        id: TeacherId,
        password_hash: &str,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE teachers SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: TeacherId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
