pub mod controller;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod model;
pub mod router;
pub mod service;
pub mod store;

pub use model::*;
pub use router::init_teachers_router;
pub use service::TeacherService;
pub use store::{PgTeacherStore, StoreError, TeacherStore};
