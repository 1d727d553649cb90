use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::types::ApiError;
use crate::config;

/// Thin HTTP client for the NovaAI backend. The base URL comes from
/// runtime configuration unless fixed at construction (tests).
#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let payload = serde_json::to_value(body)
            .map_err(|e| ApiError::unknown(format!("Failed to serialize request: {e}")))?;
        let (status, value) = self
            .execute(Method::POST, format!("{base_url}{path}"), Some(payload))
            .await?;
        decode(status, value)
    }

    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Option<Value>,
    ) -> Result<(u16, Value), ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            let mut builder = self.client.request(method.clone(), &url);
            if let Some(body) = &body {
                builder = builder.json(body);
            }
            let request = builder
                .build()
                .map_err(|e| ApiError::request_failed(format!("Request failed: {e}")))?;
            if let Some(responder) = mock_registry::lookup(request.url().as_str()) {
                let mock = responder.respond(&request)?;
                return Ok((mock.status, mock.body));
            }
        }

        let mut builder = self.client.request(method, &url);
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {e}")))?;
        let status = response.status().as_u16();
        let value = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {e}")))?;
        Ok((status, value))
    }
}

fn decode<T: DeserializeOwned>(status: u16, body: Value) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        serde_json::from_value(body)
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {e}")))
    } else {
        match serde_json::from_value::<ApiError>(body) {
            Ok(error) => Err(error),
            Err(e) => Err(ApiError::unknown(format!("Failed to parse error: {e}"))),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

/// Host-test seam: requests whose URL starts with a registered base are
/// answered by the responder instead of hitting the network.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod mock_registry {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, OnceLock};

    use serde_json::Value;

    use super::ApiError;

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: Value) -> Self {
            Self { status, body }
        }
    }

    static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<dyn TestResponder>>>> = OnceLock::new();

    fn registry() -> &'static Mutex<HashMap<String, Arc<dyn TestResponder>>> {
        REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
        registry()
            .lock()
            .expect("mock registry")
            .insert(base_url, responder);
    }

    pub(super) fn lookup(url: &str) -> Option<Arc<dyn TestResponder>> {
        registry()
            .lock()
            .ok()?
            .iter()
            .find(|(base, _)| url.starts_with(base.as_str()))
            .map(|(_, responder)| responder.clone())
    }
}
