use std::sync::Arc;

use jschs_config::{CorsConfig, PasswordConfig, ServerConfig};
use jschs_core::BcryptCodec;
use sqlx::PgPool;

use crate::modules::teachers::{PgTeacherStore, TeacherService};

#[derive(Clone)]
pub struct AppState {
    pub teacher_service: TeacherService,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl AppState {
    pub fn new(
        teacher_service: TeacherService,
        cors_config: CorsConfig,
        server_config: ServerConfig,
    ) -> Self {
        Self {
            teacher_service,
            cors_config,
            server_config,
        }
    }
}

/// Wire the production store and codec around an established pool.
pub fn init_app_state(
    db: PgPool,
    password_config: &PasswordConfig,
    cors_config: CorsConfig,
    server_config: ServerConfig,
) -> AppState {
    let teacher_service = TeacherService::new(
        Arc::new(PgTeacherStore::new(db)),
        Arc::new(BcryptCodec::new(password_config.bcrypt_cost)),
    );

    AppState::new(teacher_service, cors_config, server_config)
}
