//! Browser adapters for the jobly-core ports.
//!
//! - [`http::HttpJobBackend`] talks to the job backend with `fetch()`
//! - [`timer::GlooTimer`] sleeps on `setTimeout`
//! - [`url_config`] reads configuration overrides from the page URL

pub mod http;
pub mod timer;
pub mod url_config;

pub use http::HttpJobBackend;
pub use timer::GlooTimer;
