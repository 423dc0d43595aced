// src/infrastructure/rest/error.rs
use crate::domain::errors::DomainError;
use serde::Deserialize;
use thiserror::Error;

const PG_UNDEFINED_TABLE: &str = "42P01";
const PGRST_SCHEMA_CACHE_MISS: &str = "PGRST205";

#[derive(Debug, Error)]
pub enum RestError {
    #[error("invalid request: {0}")]
    Request(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("store responded {status}: {message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("could not decode store response: {0}")]
    Decode(String),
}

/// Error payload returned by `PostgREST`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl RestError {
    /// Builds an API error from a non-2xx body, keeping the raw text when it
    /// is not a `PostgREST` error document.
    #[must_use]
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) else {
            let message = if body.is_empty() {
                "empty response body".to_string()
            } else {
                body.to_string()
            };
            return Self::Api {
                status,
                code: None,
                message,
            };
        };

        let mut message = parsed.message.unwrap_or_else(|| body.to_string());
        if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
            message.push_str(&format!(" ({details})"));
        }
        if let Some(hint) = parsed.hint.filter(|h| !h.is_empty()) {
            message.push_str(&format!(" hint: {hint}"));
        }
        Self::Api {
            status,
            code: parsed.code,
            message,
        }
    }
}

#[must_use]
pub fn map_rest(err: RestError) -> DomainError {
    match err {
        RestError::Request(msg) => DomainError::Validation(msg),
        RestError::Transport(e) => DomainError::Transport(e.to_string()),
        RestError::Api {
            status,
            code,
            message,
        } => match code.as_deref() {
            Some(PG_UNDEFINED_TABLE | PGRST_SCHEMA_CACHE_MISS) => {
                DomainError::NotFound(message)
            }
            _ if status == 404 => DomainError::NotFound(message),
            Some(code) => DomainError::Persistence(format!("{message} [{code}]")),
            None => DomainError::Persistence(message),
        },
        RestError::Decode(msg) => DomainError::Persistence(msg),
    }
}
