use leptos::*;

use crate::config;
use crate::form::fields::{ErrorMap, FieldStore, SIGNUP_FIELDS};
use crate::form::gateway::{AuthGateway, RegistrationPayload, Session};
use crate::form::submission::SubmissionController;
use crate::form::validate;
use crate::pages::auth::repository::AuthRepository;
use crate::state::notifications::use_notifications;
use crate::state::session;
use crate::utils::navigation::BrowserNavigator;

pub const SIGNUP_SUCCESS_TEXT: &str = "Account created! Check your email to verify it.";

#[derive(Clone)]
pub struct SignupViewModel {
    pub fields: RwSignal<FieldStore>,
    pub controller: SubmissionController,
    pub submit_action: Action<RegistrationPayload, Option<Session>>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let fields = create_rw_signal(FieldStore::new(SIGNUP_FIELDS));
    let controller = SubmissionController::new();
    let repository = AuthRepository::from_context();
    let notifications = use_notifications();
    let (_session, set_session) = session::use_session();

    let controller_for_action = controller.clone();
    let submit_action = create_action(move |payload: &RegistrationPayload| {
        let controller = controller_for_action.clone();
        let repository = repository.clone();
        let payload = payload.clone();
        async move {
            let destination = config::destinations().post_signup;
            controller
                .run(
                    repository.register(payload),
                    &notifications,
                    &BrowserNavigator,
                    SIGNUP_SUCCESS_TEXT,
                    &destination,
                )
                .await
        }
    });

    create_effect(move |_| {
        if let Some(Some(new_session)) = submit_action.value().get() {
            session::store_session(set_session, new_session);
        }
    });

    SignupViewModel {
        fields,
        controller,
        submit_action,
    }
}

/// Recomputes the error map wholesale; submission only proceeds on an
/// empty map.
pub fn signup_submission(fields: &FieldStore) -> Result<RegistrationPayload, ErrorMap> {
    let errors = validate::validate_signup(fields);
    if errors.is_empty() {
        Ok(RegistrationPayload::from_fields(fields))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::{CONFIRM_PASSWORD, EMAIL, PASSWORD, USERNAME};
    use crate::form::validate::{PASSWORDS_DO_NOT_MATCH, USERNAME_REQUIRED};

    #[test]
    fn signup_submission_builds_the_payload_when_valid() {
        let mut fields = FieldStore::new(SIGNUP_FIELDS);
        fields.set_field(USERNAME, "neo").unwrap();
        fields.set_field(EMAIL, "neo@example.com").unwrap();
        fields.set_field(PASSWORD, "Password1").unwrap();
        fields.set_field(CONFIRM_PASSWORD, "Password1").unwrap();

        let payload = signup_submission(&fields).unwrap();
        assert_eq!(payload.username, "neo");
        assert_eq!(payload.email, "neo@example.com");
    }

    #[test]
    fn signup_submission_returns_every_failure() {
        let mut fields = FieldStore::new(SIGNUP_FIELDS);
        fields.set_field(EMAIL, "neo@example.com").unwrap();
        fields.set_field(PASSWORD, "Password1").unwrap();
        fields.set_field(CONFIRM_PASSWORD, "Password2").unwrap();

        let errors = signup_submission(&fields).unwrap_err();
        assert_eq!(
            errors.get(USERNAME).map(String::as_str),
            Some(USERNAME_REQUIRED)
        );
        assert_eq!(
            errors.get(CONFIRM_PASSWORD).map(String::as_str),
            Some(PASSWORDS_DO_NOT_MATCH)
        );
    }
}
