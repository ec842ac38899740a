use leptos::prelude::*;

use super::context::{use_auth, AuthState};

/// User management and activity logs are reserved for the super admin
pub fn admits_super_admin(state: &AuthState) -> bool {
    state.is_authenticated && state.is_super_admin()
}

#[component]
pub fn RequireSuperAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    view! {
        <Show
            when=move || state.with(admits_super_admin)
            fallback=|| view! { <div class="guard-message">"Akses ditolak. Hanya untuk Super Admin."</div> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::user;

    #[test]
    fn test_only_signed_in_super_admin_is_admitted() {
        let mut state = AuthState {
            user: Some(user(1, "Pemilik", "super_admin")),
            token: Some("tok".into()),
            is_authenticated: true,
            ..Default::default()
        };
        assert!(admits_super_admin(&state));

        state.user = Some(user(2, "Staf Gudang", "admin"));
        assert!(!admits_super_admin(&state));

        state.user = Some(user(1, "Pemilik", "super_admin"));
        state.is_authenticated = false;
        assert!(!admits_super_admin(&state));
    }
}
