//! Job descriptions: the requirements resumes are matched against.

pub mod handlers;
pub mod store;
