//! Resume intake: upload, parse, store, list and delete candidate resumes.

pub mod handlers;
pub mod store;
