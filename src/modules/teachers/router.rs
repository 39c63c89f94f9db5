use crate::modules::teachers::controller::{
    change_password, create_teacher, delete_teacher, get_teacher, get_teachers, login_teacher,
    update_teacher,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// `/login` is a reserved segment: it never reaches the `/{id}` handlers, so
/// a non-POST request to it is a 405 rather than a malformed-id 400.
pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers))
        .route("/login", post(login_teacher))
        .route(
            "/{id}",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
        .route("/{id}/password", put(change_password))
}
