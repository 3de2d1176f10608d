pub mod message;
pub mod job;
pub mod event;
pub mod config;
pub mod error;
pub mod session;


pub use error::{FailureKind, JoblyError};
pub type Result<T> = std::result::Result<T, JoblyError>;
