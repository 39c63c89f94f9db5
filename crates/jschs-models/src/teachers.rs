//! Teacher domain model and request DTOs.
//!
//! [`Teacher`] is the single persisted entity. Its `password_hash` is never
//! serialized and never printed by `Debug`; services additionally clear it
//! (see [`Teacher::redacted`]) before a record leaves the service layer.

use crate::ids::TeacherId;
use crate::value_types::{Email, Gender};
use chrono::NaiveDate;
use jschs_core::serde::deserialize_empty_as_none;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// A teacher record.
///
/// Optional text fields use the empty string for "absent"; dates and gender
/// use `None`, serialized as `null`.
#[derive(Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, Validate, ToSchema)]
pub struct Teacher {
    pub id: TeacherId,
    pub email: Email,
    #[serde(skip)]
    pub password_hash: String,
    #[validate(length(min = 2, message = "full_name must be at least 2 characters"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub is_active: bool,
    #[serde(default)]
    pub photo: String,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    #[schema(value_type = Option<String>, format = Date, example = "1985-04-12")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2020-09-01")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub qualification: String,
}

impl Teacher {
    /// Consume the record and return it with the credential hash cleared.
    #[must_use]
    pub fn redacted(mut self) -> Self {
        self.password_hash.clear();
        self
    }

    pub fn is_redacted(&self) -> bool {
        self.password_hash.is_empty()
    }
}

impl fmt::Debug for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hash = if self.password_hash.is_empty() {
            ""
        } else {
            "[redacted]"
        };

        f.debug_struct("Teacher")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &hash)
            .field("full_name", &self.full_name)
            .field("phone", &self.phone)
            .field("is_active", &self.is_active)
            .field("photo", &self.photo)
            .field("date_of_birth", &self.date_of_birth)
            .field("joining_date", &self.joining_date)
            .field("gender", &self.gender)
            .field("bio", &self.bio)
            .field("address", &self.address)
            .field("designation", &self.designation)
            .field("qualification", &self.qualification)
            .finish()
    }
}

fn default_active() -> bool {
    true
}

/// Request body for `POST /api/v1/teachers`.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct CreateTeacherDto {
    pub email: Email,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    #[schema(example = "s3cret")]
    pub password: String,
    #[validate(length(min = 2, message = "full_name must be at least 2 characters"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub photo: String,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    #[schema(value_type = Option<String>, format = Date, example = "1985-04-12")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2020-09-01")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub qualification: String,
}

impl CreateTeacherDto {
    /// Split the request into the record to persist and the plaintext password.
    ///
    /// The returned teacher has a nil id; the store assigns the real one.
    pub fn into_parts(self) -> (Teacher, String) {
        let teacher = Teacher {
            id: TeacherId::nil(),
            email: self.email,
            password_hash: String::new(),
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            is_active: self.is_active,
            photo: self.photo,
            date_of_birth: self.date_of_birth,
            joining_date: self.joining_date,
            gender: self.gender,
            bio: self.bio,
            address: self.address,
            designation: self.designation,
            qualification: self.qualification,
        };
        (teacher, self.password)
    }
}

// Never print the plaintext password.
impl fmt::Debug for CreateTeacherDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateTeacherDto")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}

/// Request body for `PUT /api/v1/teachers/{id}`.
///
/// Replaces every profile field. Identifier and credential fields that a
/// client may send (`id`, `password`, `password_hash`) are not part of this
/// type and are therefore ignored.
#[derive(Debug, Deserialize, Clone, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    pub email: Email,
    #[validate(length(min = 2, message = "full_name must be at least 2 characters"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub photo: String,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    #[schema(value_type = Option<String>, format = Date, example = "1985-04-12")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2020-09-01")]
    pub joining_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_empty_as_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub qualification: String,
}

impl UpdateTeacherDto {
    /// Build the record to update. `id` comes from the request path and the
    /// credential hash is always left empty so the store keeps the current one.
    pub fn into_teacher(self, id: TeacherId) -> Teacher {
        Teacher {
            id,
            email: self.email,
            password_hash: String::new(),
            full_name: self.full_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            is_active: self.is_active,
            photo: self.photo,
            date_of_birth: self.date_of_birth,
            joining_date: self.joining_date,
            gender: self.gender,
            bio: self.bio,
            address: self.address,
            designation: self.designation,
            qualification: self.qualification,
        }
    }
}

/// Request body for `PUT /api/v1/teachers/{id}/password`.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct ChangePasswordDto {
    #[validate(length(min = 4, message = "new_password must be at least 4 characters"))]
    #[schema(example = "n3wer-s3cret")]
    pub new_password: String,
}

/// Request body for `POST /api/v1/teachers/login`.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "teacher@school.edu")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
