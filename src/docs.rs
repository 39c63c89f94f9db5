use utoipa::OpenApi;

use crate::modules::teachers::model::{
    ChangePasswordDto, CreateTeacherDto, ErrorResponse, Gender, LoginRequest, Teacher,
    UpdateTeacherDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::change_password,
        crate::modules::teachers::controller::login_teacher,
    ),
    components(
        schemas(
            Teacher,
            Gender,
            CreateTeacherDto,
            UpdateTeacherDto,
            ChangePasswordDto,
            LoginRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Teachers", description = "Teacher records and credential checks")
    ),
    info(
        title = "jschs API",
        version = "0.1.0",
        description = "Teacher management REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
