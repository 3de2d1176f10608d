pub mod chat;
pub mod job_detail;
pub mod settings;
