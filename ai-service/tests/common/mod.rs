//! Test helper module for ai-service integration tests.
//!
//! Provides common setup utilities: a test configuration, an application
//! spawned on a random port, and provider doubles.

#![allow(dead_code)]

use ai_service::config::{AiConfig, GoogleConfig, ModelConfig, PromptConfig};
use ai_service::services::providers::{ProviderError, TextProvider};
use ai_service::startup::Application;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Template used by every test; carries exactly one substitution marker.
pub const TEST_TEMPLATE: &str = "You are a memory allocator. Request: {prompt}";

pub fn test_config() -> AiConfig {
    AiConfig {
        common: service_core::config::Config { port: 0 },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
        },
        prompt: PromptConfig {
            template: TEST_TEMPLATE.to_string(),
        },
    }
}

/// Provider double that records every prompt it is asked to generate for.
pub struct CapturingProvider {
    calls: Arc<Mutex<Vec<String>>>,
    response: String,
}

impl CapturingProvider {
    pub fn new(response: &str) -> (Self, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
                response: response.to_string(),
            },
            calls,
        )
    }
}

#[async_trait]
impl TextProvider for CapturingProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}

/// Test application with running HTTP server.
pub struct TestApp {
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application on a random port with the given provider.
    pub async fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config(), provider)
            .await
            .expect("Failed to build application");

        let port = app.port();

        // Spawn the server in the background
        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            port,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port, path)
    }

    pub async fn post_ai(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url("/ai"))
            .json(&body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }
}
