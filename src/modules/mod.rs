pub mod teachers;

pub use self::teachers::model::Teacher;
