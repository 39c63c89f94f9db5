use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use crate::AppError;
use crate::modules::teachers::model::{
    ChangePasswordDto, CreateTeacherDto, ErrorResponse, LoginRequest, Teacher, TeacherId,
    UpdateTeacherDto,
};
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    post,
    path = "/api/v1/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 400, description = "Malformed body or validation error", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let (teacher, password) = dto.into_parts();
    let teacher = state.teacher_service.register(teacher, &password).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers",
    responses(
        (status = 200, description = "All teachers ordered by full name", body = Vec<Teacher>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = state.teacher_service.get_all().await?;
    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID (UUID)")
    ),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<TeacherId>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state.teacher_service.get(id).await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID (UUID)")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 400, description = "Malformed id, body or validation error", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<TeacherId>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state
        .teacher_service
        .update_profile(dto.into_teacher(id))
        .await?;
    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/v1/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher ID (UUID)")
    ),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<TeacherId>,
) -> Result<StatusCode, AppError> {
    state.teacher_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v1/teachers/{id}/password",
    params(
        ("id" = String, Path, description = "Teacher ID (UUID)")
    ),
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Malformed id or validation error", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn change_password(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<TeacherId>,
    ValidatedJson(dto): ValidatedJson<ChangePasswordDto>,
) -> Result<StatusCode, AppError> {
    state
        .teacher_service
        .change_password(id, &dto.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Verify a teacher's credentials. No session or token is issued.
#[utoipa::path(
    post,
    path = "/api/v1/teachers/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials valid", body = Teacher),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto), fields(email = %dto.email))]
pub async fn login_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = state
        .teacher_service
        .authenticate(&dto.email, &dto.password)
        .await?;
    Ok(Json(teacher))
}
