use serde::Serialize;
use utoipa::ToSchema;

pub use jschs_models::ids::TeacherId;
pub use jschs_models::teachers::{
    ChangePasswordDto, CreateTeacherDto, LoginRequest, Teacher, UpdateTeacherDto,
};
pub use jschs_models::value_types::{Email, Gender};

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
