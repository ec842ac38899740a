//! Notification inbox.
//!
//! Unlike the inventory lists this store patches its local state after the
//! server confirmed a change instead of re-reading the list. Nothing is
//! touched when the remote call fails.

use contracts::system::notifications::{Notification, NotificationFilter};
use leptos::prelude::*;

use super::api;
use crate::shared::gateway::Gateway;
use crate::shared::state::ListSlice;
use crate::shared::toast::ToastService;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub notifications: ListSlice<Notification, NotificationFilter>,
    pub unread_count: u32,
    pub error: Option<String>,
}

impl NotificationsState {
    fn find(&self, id: i64) -> Option<&Notification> {
        self.notifications.items.iter().find(|n| n.id == id)
    }

    fn decrement_unread(&mut self) {
        self.unread_count = self.unread_count.saturating_sub(1);
    }
}

#[derive(Clone)]
pub struct NotificationStore {
    state: RwSignal<NotificationsState>,
    gateway: Gateway,
    toasts: ToastService,
}

impl NotificationStore {
    pub fn new(gateway: Gateway, toasts: ToastService) -> Self {
        Self {
            state: RwSignal::new(NotificationsState::default()),
            gateway,
            toasts,
        }
    }

    pub fn state(&self) -> RwSignal<NotificationsState> {
        self.state
    }

    pub fn snapshot(&self) -> NotificationsState {
        self.state.get_untracked()
    }

    pub fn unread_count(&self) -> u32 {
        self.state.with(|s| s.unread_count)
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Failure is recorded but not toasted; the bell polls this quietly
    pub async fn fetch_notifications(&self, filter: NotificationFilter) {
        self.state.update(|s| {
            s.notifications.begin(filter.clone());
            s.error = None;
        });
        match api::fetch_notifications(&self.gateway, &filter).await {
            Ok(page) => self.state.update(|s| s.notifications.fill(page)),
            Err(e) => {
                log::warn!("Failed to fetch notifications: {}", e);
                self.state.update(|s| {
                    s.notifications.fail();
                    s.error = Some(e.message);
                });
            }
        }
    }

    pub async fn fetch_unread_count(&self) {
        match api::fetch_unread_count(&self.gateway).await {
            Ok(count) => self.state.update(|s| s.unread_count = count),
            Err(e) => log::error!("Failed to fetch unread count: {}", e),
        }
    }

    /// Entries known locally as read are left alone without asking the
    /// server. The counter covers notifications outside the loaded page too,
    /// so any other confirmed read decrements it.
    pub async fn mark_as_read(&self, id: i64) -> bool {
        let already_read = self
            .state
            .with_untracked(|s| s.find(id).map(|n| n.read).unwrap_or(false));
        if already_read {
            return true;
        }
        match api::mark_as_read(&self.gateway, id).await {
            Ok(_) => {
                self.state.update(|s| {
                    if let Some(n) = s.notifications.items.iter_mut().find(|n| n.id == id) {
                        n.read = true;
                    }
                    s.decrement_unread();
                });
                true
            }
            Err(e) => {
                self.toasts.error(e.message);
                false
            }
        }
    }

    pub async fn mark_all_as_read(&self) -> bool {
        match api::mark_all_as_read(&self.gateway).await {
            Ok(_) => {
                self.state.update(|s| {
                    s.notifications.items.iter_mut().for_each(|n| n.read = true);
                    s.unread_count = 0;
                });
                self.toasts.success("Semua notifikasi ditandai sudah dibaca");
                true
            }
            Err(e) => {
                self.toasts.error(e.message);
                false
            }
        }
    }

    pub async fn delete_notification(&self, id: i64) -> bool {
        match api::delete_notification(&self.gateway, id).await {
            Ok(_) => {
                self.state.update(|s| {
                    let was_unread = s.find(id).map(|n| !n.read).unwrap_or(false);
                    s.notifications.items.retain(|n| n.id != id);
                    if was_unread {
                        s.decrement_unread();
                    }
                });
                self.toasts.success("Notifikasi berhasil dihapus");
                true
            }
            Err(e) => {
                self.toasts.error(e.message);
                false
            }
        }
    }

    pub async fn delete_all_notifications(&self) -> bool {
        match api::delete_all(&self.gateway).await {
            Ok(_) => {
                self.state.update(|s| {
                    s.notifications.items.clear();
                    s.unread_count = 0;
                });
                self.toasts.success("Semua notifikasi berhasil dihapus");
                true
            }
            Err(e) => {
                self.toasts.error(e.message);
                false
            }
        }
    }
}

pub fn use_notifications() -> NotificationStore {
    use_context::<NotificationStore>().expect("NotificationStore not provided")
}
