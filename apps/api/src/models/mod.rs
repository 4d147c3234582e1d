pub mod job;
pub mod match_result;
pub mod resume;
pub mod user;
