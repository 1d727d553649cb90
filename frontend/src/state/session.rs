use leptos::*;

use crate::form::gateway::Session;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub is_authenticated: bool,
}

fn create_session_context() -> SessionContext {
    let (state, set_state) = create_signal(SessionState::default());
    if let Some(session) = persisted_session() {
        set_state.update(|state| {
            state.session = Some(session);
            state.is_authenticated = true;
        });
    }
    (state, set_state)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn store_session(set_state: WriteSignal<SessionState>, session: Session) {
    set_state.update(|state| {
        state.session = Some(session);
        state.is_authenticated = true;
    });
}

/// User snapshot left behind by the last successful exchange, if any.
fn persisted_session() -> Option<Session> {
    let storage = crate::utils::storage::local_storage().ok()?;
    let raw = storage.get_item("current_user").ok()??;
    let user: crate::api::UserResponse = serde_json::from_str(&raw).ok()?;
    Some(user.into())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_session();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.session.is_none());
        });
    }

    #[test]
    fn store_session_marks_authenticated() {
        with_runtime(|| {
            let (state, set_state) = create_signal(SessionState::default());
            store_session(
                set_state,
                Session {
                    user_id: "u1".into(),
                    username: "neo".into(),
                    email: "neo@example.com".into(),
                },
            );
            let snapshot = state.get();
            assert!(snapshot.is_authenticated);
            assert_eq!(snapshot.session.unwrap().username, "neo");
        });
    }
}
