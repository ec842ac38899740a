use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let auth = use_auth();
    let state = auth.state();
    let is_loading = move || state.with(|s| s.is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let auth = auth.clone();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        // Success swaps the page for the shell through the auth state.
        spawn_local(async move {
            auth.login(email_val, password_val).await;
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Papaloma"</h1>
                <h2>"Masuk ke sistem inventaris"</h2>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="error-message">
                        {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@papaloma.com"
                            value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                if state.with_untracked(|s| s.error.is_some()) {
                                    state.update(|s| s.error = None);
                                }
                            }
                            required
                            disabled=is_loading
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=is_loading
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=is_loading>
                        {move || if is_loading() { "Memproses..." } else { "Masuk" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
