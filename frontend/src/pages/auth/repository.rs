use std::rc::Rc;

use leptos::*;

use crate::api::{ApiClient, ApiError, LoginRequest, RegisterRequest};
use crate::form::gateway::{AuthError, AuthGateway, Credentials, RegistrationPayload, Session};

/// The concrete authentication gateway: credential exchanges over the
/// NovaAI API, shared by the sign-in and sign-up screens.
#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl AuthRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Uses the app-wide client when one is provided.
    pub fn from_context() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self::new_with_client(Rc::new(api))
    }
}

impl AuthGateway for AuthRepository {
    async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError> {
        let response = self
            .client
            .login(LoginRequest {
                email: credentials.email,
                password: credentials.password,
            })
            .await
            .map_err(map_api_error)?;
        Ok(response.user.into())
    }

    async fn register(&self, payload: RegistrationPayload) -> Result<Session, AuthError> {
        let response = self
            .client
            .register(RegisterRequest {
                username: payload.username,
                email: payload.email,
                password: payload.password,
                confirm_password: payload.confirm_password,
            })
            .await
            .map_err(map_api_error)?;
        Ok(response.user.into())
    }
}

fn map_api_error(error: ApiError) -> AuthError {
    match error.code.as_str() {
        "INVALID_CREDENTIALS" => AuthError::InvalidCredentials(error.error),
        "REQUEST_FAILED" => AuthError::Network(error.error),
        _ => AuthError::Server(error.error),
    }
}
