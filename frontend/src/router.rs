use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::toast::Toaster,
    pages::{
        auth::{login::LoginPage, signup::SignupPage, verify::VerifyPage},
        home::HomePage,
        not_found::NotFoundPage,
    },
    state::{notifications, session::SessionProvider, theme},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/signup", "/verify"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    notifications::provide_notifications();
    theme::provide_theme();

    view! {
        <SessionProvider>
            <Router>
                <Toaster/>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/verify" view=VerifyPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
