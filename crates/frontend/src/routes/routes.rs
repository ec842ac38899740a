use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Without a router the session decides the whole screen: the shell for a
/// signed-in user, the login page otherwise.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    view! {
        <Show
            when=move || state.with(|s| s.is_authenticated)
            fallback=|| view! { <LoginPage /> }
        >
            <Shell />
        </Show>
    }
}
