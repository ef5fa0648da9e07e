//! Description generator abstraction.
//!
//! The generator turns a facts object into natural-language text. The HTTP
//! implementation calls the external AI service.

pub mod http;
#[cfg(test)]
pub mod mock;

use crate::models::Facts;
use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

pub use http::HttpDescriptionGenerator;
#[cfg(test)]
pub use mock::MockDescriptionGenerator;

/// Error type for generator calls.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Error calling AI service: {0}")]
    Network(String),

    #[error("AI service returned an error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Error decoding AI response: {0}")]
    Decode(String),
}

impl GeneratorError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorError::Network(_) => "network",
            GeneratorError::Status { .. } => "status",
            GeneratorError::Decode(_) => "decode",
        }
    }
}

impl From<GeneratorError> for AppError {
    fn from(err: GeneratorError) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}

#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Produce a description for `facts`. One attempt, no retry.
    async fn generate(&self, facts: &Facts) -> Result<String, GeneratorError>;
}
