//! # jschs Models
//!
//! Domain models and DTOs for the jschs teacher API.
//!
//! # Modules
//!
//! - [`ids`]: the [`TeacherId`] identifier newtype
//! - [`value_types`]: validated [`Email`] and [`Gender`]
//! - [`teachers`]: the [`Teacher`] entity and its request bodies
//!
//! # Example
//!
//! ```ignore
//! use jschs_models::{CreateTeacherDto, Teacher};
//!
//! let dto: CreateTeacherDto = serde_json::from_str(body)?;
//! let (teacher, password) = dto.into_parts();
//! ```

pub mod ids;
pub mod teachers;
pub mod value_types;

pub use ids::TeacherId;
pub use teachers::{ChangePasswordDto, CreateTeacherDto, LoginRequest, Teacher, UpdateTeacherDto};
pub use value_types::{Email, Gender, ValueTypeError};
