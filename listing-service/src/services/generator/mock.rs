//! Mock generator for tests.

use super::{DescriptionGenerator, GeneratorError};
use crate::models::Facts;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

enum Behaviour {
    Describe(String),
    FailWithStatus(u16, String),
}

/// Returns a fixed description (or a fixed failure) and counts calls.
#[derive(Clone)]
pub struct MockDescriptionGenerator {
    behaviour: Arc<Behaviour>,
    calls: Arc<AtomicUsize>,
}

impl MockDescriptionGenerator {
    pub fn describing(description: impl Into<String>) -> Self {
        Self::with(Behaviour::Describe(description.into()))
    }

    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::with(Behaviour::FailWithStatus(status, body.into()))
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour: Arc::new(behaviour),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DescriptionGenerator for MockDescriptionGenerator {
    async fn generate(&self, _facts: &Facts) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behaviour.as_ref() {
            Behaviour::Describe(description) => Ok(description.clone()),
            Behaviour::FailWithStatus(status, body) => Err(GeneratorError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
