//! Common test utilities for listing-service integration tests.

use listing_service::config::{DatabaseConfig, GeneratorConfig, ListingConfig};
use listing_service::services::{HttpDescriptionGenerator, InMemoryListingStore};
use listing_service::Application;
use secrecy::Secret;
use serde_json::{json, Value};
use service_core::config::Config as CommonConfig;
use std::sync::{Arc, Once};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,listing_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: InMemoryListingStore,
    pub ai_service: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the server on a random port, backed by an in-memory store and a
    /// mock AI service.
    pub async fn spawn() -> Self {
        init_tracing();

        let ai_service = MockServer::start().await;
        let store = InMemoryListingStore::new();

        let config = ListingConfig {
            common: CommonConfig { port: 0 },
            service_name: "listing-service-test".to_string(),
            log_level: "debug".to_string(),
            otlp_endpoint: None,
            database: DatabaseConfig {
                url: Secret::new("postgres://unused".to_string()),
                max_connections: 1,
                min_connections: 1,
            },
            generator: GeneratorConfig {
                base_url: ai_service.uri(),
            },
        };

        let generator = HttpDescriptionGenerator::new(&config.generator);
        let app = Application::build_with(config, Arc::new(store.clone()), Arc::new(generator))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            ai_service,
            client,
        }
    }

    /// Make the mock AI service answer with `description`.
    pub async fn stub_description(&self, description: &str) {
        Mock::given(method("POST"))
            .and(path("/generate_description"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "description": description })),
            )
            .mount(&self.ai_service)
            .await;
    }

    /// Make the mock AI service fail with `status` and a plain-text body.
    pub async fn stub_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/generate_description"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.ai_service)
            .await;
    }

    /// Number of requests the mock AI service has received.
    pub async fn ai_requests(&self) -> usize {
        self.ai_service
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    pub async fn create_listing(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/listings/create", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_listing(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/listings/{}", self.address, id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
