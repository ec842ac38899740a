use crate::domain::inventory::InventoryStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::GatewayConfig;
use crate::shared::gateway::Gateway;
use crate::shared::toast::{ToastService, Toaster};
use crate::system::auth::AuthStore;
use crate::system::notifications::store::NotificationStore;
use crate::system::users::UserStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let toasts = ToastService::new();
    let gateway = Gateway::browser(GatewayConfig::default());

    let auth = AuthStore::new(gateway.clone(), toasts);

    provide_context(toasts);
    provide_context(AppGlobalContext::new());
    provide_context(InventoryStore::new(gateway.clone(), toasts));
    provide_context(UserStore::new(gateway.clone(), toasts));
    provide_context(NotificationStore::new(gateway, toasts));
    provide_context(auth.clone());

    // Revalidate a restored session; an expired token signs out.
    spawn_local(async move { auth.fetch_user().await });

    view! {
        <AppRoutes />
        <Toaster />
    }
}
