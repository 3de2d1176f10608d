use serde::{Deserialize, Serialize};

use crate::{JoblyError, Result};

/// Top-level client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the job backend, without trailing slash
    pub backend_url: String,
    /// Answer chat queries from the canned local corpus instead of the network
    pub use_mock_data: bool,
    /// Artificial latency of the mock backend
    pub mock_delay_ms: u64,
    pub chat: ChatConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            use_mock_data: true,
            mock_delay_ms: 2000,
            chat: ChatConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub welcome_message: String,
    pub loading_message: String,
    pub error_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            welcome_message: WELCOME_MESSAGE.to_string(),
            loading_message: "Buscando empleos...".to_string(),
            error_message: "Lo siento, hubo un error al buscar empleos. Por favor, intenta de nuevo."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input is capped at this many characters
    pub max_message_length: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_message_length: 500,
        }
    }
}

impl AppConfig {
    /// Apply `key=value` overrides (typically parsed from the page URL).
    ///
    /// Recognised keys: `backend`, `mock`, `max_length`, `mock_delay`.
    /// Unknown keys are ignored; malformed values are errors.
    pub fn apply_overrides<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            match key {
                "backend" => {
                    if value.is_empty() {
                        return Err(JoblyError::Config("backend URL is empty".to_string()));
                    }
                    self.backend_url = value.trim_end_matches('/').to_string();
                }
                "mock" => {
                    self.use_mock_data = parse_flag(value).ok_or_else(|| {
                        JoblyError::Config(format!("invalid mock flag: {}", value))
                    })?;
                }
                "max_length" => {
                    self.ui.max_message_length = value
                        .parse()
                        .map_err(|_| JoblyError::Config(format!("invalid max_length: {}", value)))?;
                }
                "mock_delay" => {
                    self.mock_delay_ms = value
                        .parse()
                        .map_err(|_| JoblyError::Config(format!("invalid mock_delay: {}", value)))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Backend URL joined with an endpoint path
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.backend_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

const WELCOME_MESSAGE: &str = "¡Hola! Soy Jobly, tu asistente para encontrar empleos. \
Escribe qué tipo de trabajo estás buscando y te ayudaré a encontrar las mejores oportunidades.";
