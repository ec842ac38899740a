//! Top bar: sidebar toggles, theme switch, notification bell, user and
//! logout.

use crate::layout::global_context::use_ui;
use crate::shared::icons::icon;
use crate::shared::theme::Theme;
use crate::system::auth::context::use_auth;
use crate::system::notifications::store::use_notifications;
use contracts::system::notifications::NotificationFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Notifications shown in the bell dropdown
const BELL_LIMIT: u32 = 10;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ui = use_ui();
    let auth = use_auth();
    let notifications = use_notifications();
    let (bell_open, set_bell_open) = signal(false);

    {
        let notifications = notifications.clone();
        spawn_local(async move {
            notifications
                .fetch_notifications(NotificationFilter {
                    limit: Some(BELL_LIMIT),
                    ..Default::default()
                })
                .await;
            notifications.fetch_unread_count().await;
        });
    }

    let auth_state = auth.state();
    let inbox = notifications.state();

    let logout = {
        let auth = auth.clone();
        move |_| {
            let auth = auth.clone();
            spawn_local(async move { auth.logout().await });
        }
    };

    let mark_all = {
        let notifications = notifications.clone();
        move |_| {
            let notifications = notifications.clone();
            spawn_local(async move {
                notifications.mark_all_as_read().await;
            });
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn top-header__menu" on:click=move |_| ui.toggle_sidebar() title="Menu">
                    {icon("menu")}
                </button>
                <button class="top-header__icon-btn" on:click=move |_| ui.toggle_sidebar_collapse() title="Perkecil sidebar">
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Papaloma Inventaris"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ui.toggle_dark_mode()
                    title=move || Theme::from_dark_mode(ui.dark_mode.get()).toggle_label()
                >
                    {move || if ui.dark_mode.get() { icon("sun") } else { icon("moon") }}
                </button>

                <div class="top-header__bell">
                    <button
                        class="top-header__icon-btn"
                        title="Notifikasi"
                        on:click=move |_| set_bell_open.update(|open| *open = !*open)
                    >
                        {icon("bell")}
                        <Show when=move || inbox.with(|s| s.unread_count > 0)>
                            <span class="top-header__badge">
                                {move || inbox.with(|s| s.unread_count)}
                            </span>
                        </Show>
                    </button>
                    <Show when=move || bell_open.get()>
                        <div class="bell-dropdown">
                            <div class="bell-dropdown__header">
                                <span>"Notifikasi"</span>
                                <button class="bell-dropdown__link" on:click=mark_all.clone()>
                                    "Tandai semua dibaca"
                                </button>
                            </div>
                            <For
                                each=move || inbox.with(|s| s.notifications.items.clone())
                                key=|n| (n.id, n.read)
                                children={
                                    let notifications = notifications.clone();
                                    move |n| {
                                        let id = n.id;
                                        let notifications = notifications.clone();
                                        let class = if n.read { "bell-item" } else { "bell-item bell-item--unread" };
                                        view! {
                                            <div
                                                class=class
                                                on:click=move |_| {
                                                    let notifications = notifications.clone();
                                                    spawn_local(async move {
                                                        notifications.mark_as_read(id).await;
                                                    });
                                                }
                                            >
                                                <strong>{n.title}</strong>
                                                <p>{n.message}</p>
                                            </div>
                                        }
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth_state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Keluar">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
