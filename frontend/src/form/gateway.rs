use thiserror::Error;

use super::fields::{FieldStore, CONFIRM_PASSWORD, EMAIL, PASSWORD, USERNAME};

/// Sign-in payload. Transient; rebuilt per submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload, exactly the declared registration fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationPayload {
    pub fn from_fields(fields: &FieldStore) -> Self {
        Self {
            username: fields.value(USERNAME).to_string(),
            email: fields.value(EMAIL).to_string(),
            password: fields.value(PASSWORD).to_string(),
            confirm_password: fields.value(CONFIRM_PASSWORD).to_string(),
        }
    }
}

/// Authenticated-user snapshot returned by the gateway on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

/// Failure of a credential exchange. The submission lifecycle treats
/// every variant the same way; the split exists for logging and for
/// callers that want to branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    Server(String),
    #[error("{0}")]
    Network(String),
}

/// The external authentication service boundary.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn authenticate(&self, credentials: Credentials) -> Result<Session, AuthError>;
    async fn register(&self, payload: RegistrationPayload) -> Result<Session, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::SIGNUP_FIELDS;

    #[test]
    fn registration_payload_snapshots_all_fields() {
        let mut fields = FieldStore::new(SIGNUP_FIELDS);
        fields.set_field(USERNAME, "neo").unwrap();
        fields.set_field(EMAIL, "neo@example.com").unwrap();
        fields.set_field(PASSWORD, "Password1").unwrap();
        fields.set_field(CONFIRM_PASSWORD, "Password1").unwrap();

        let payload = RegistrationPayload::from_fields(&fields);
        assert_eq!(payload.username, "neo");
        assert_eq!(payload.email, "neo@example.com");
        assert_eq!(payload.password, "Password1");
        assert_eq!(payload.confirm_password, "Password1");
    }

    #[test]
    fn auth_error_displays_its_message() {
        let error = AuthError::InvalidCredentials("Invalid email or password".into());
        assert_eq!(error.to_string(), "Invalid email or password");
    }
}
