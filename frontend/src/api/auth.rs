use super::client::ApiClient;
use super::types::{ApiError, LoginRequest, RegisterRequest, SessionResponse};
use crate::utils::storage as storage_utils;

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<SessionResponse, ApiError> {
        let response: SessionResponse = self.post_json("/auth/login", &request).await?;
        persist_session(&response);
        Ok(response)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<SessionResponse, ApiError> {
        let response: SessionResponse = self.post_json("/auth/register", &request).await?;
        persist_session(&response);
        Ok(response)
    }
}

/// Best effort; a missing window (host tests) or a full storage never
/// fails the exchange itself.
fn persist_session(response: &SessionResponse) {
    let Ok(storage) = storage_utils::local_storage() else {
        return;
    };
    let _ = storage.set_item("access_token", &response.access_token);
    if let Ok(user) = serde_json::to_string(&response.user) {
        let _ = storage.set_item("current_user", &user);
    }
}
