use leptos::*;

use crate::config;
use crate::form::gateway::{AuthGateway, Credentials, Session};
use crate::form::submission::SubmissionController;
use crate::form::validate;
use crate::pages::auth::repository::AuthRepository;
use crate::state::notifications::use_notifications;
use crate::state::session;
use crate::utils::navigation::BrowserNavigator;

pub const LOGIN_SUCCESS_TEXT: &str = "Welcome back!";

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub controller: SubmissionController,
    pub submit_action: Action<Credentials, Option<Session>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let controller = SubmissionController::new();
    let repository = AuthRepository::from_context();
    let notifications = use_notifications();
    let (_session, set_session) = session::use_session();

    let controller_for_action = controller.clone();
    let submit_action = create_action(move |credentials: &Credentials| {
        let controller = controller_for_action.clone();
        let repository = repository.clone();
        let credentials = credentials.clone();
        async move {
            let destination = config::destinations().post_login;
            controller
                .run(
                    repository.authenticate(credentials),
                    &notifications,
                    &BrowserNavigator,
                    LOGIN_SUCCESS_TEXT,
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

    LoginViewModel {
        email,
        password,
        controller,
        submit_action,
    }
}

/// Builds the request, or yields the single combined message that
/// blocks submission; the gateway is never reached on that path.
pub fn login_submission(email: &str, password: &str) -> Result<Credentials, String> {
    validate::validate_login(email, password)?;
    Ok(Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}
