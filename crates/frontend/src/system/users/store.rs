use contracts::shared::Ack;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserFilter};
use leptos::prelude::*;
use std::future::Future;

use super::api;
use crate::shared::gateway::{ApiError, Gateway};
use crate::shared::state::ListSlice;
use crate::shared::toast::ToastService;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub users: ListSlice<User, UserFilter>,
    /// A user mutation is in flight
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Account administration for the super admin
#[derive(Clone)]
pub struct UserStore {
    state: RwSignal<UsersState>,
    gateway: Gateway,
    toasts: ToastService,
}

impl UserStore {
    pub fn new(gateway: Gateway, toasts: ToastService) -> Self {
        Self {
            state: RwSignal::new(UsersState::default()),
            gateway,
            toasts,
        }
    }

    pub fn state(&self) -> RwSignal<UsersState> {
        self.state
    }

    pub fn snapshot(&self) -> UsersState {
        self.state.get_untracked()
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    pub async fn fetch_users(&self, filter: UserFilter) {
        self.state.update(|s| {
            s.users.begin(filter.clone());
            s.error = None;
        });
        match api::fetch_users(&self.gateway, &filter).await {
            Ok(page) => self.state.update(|s| s.users.fill(page)),
            Err(e) => {
                log::warn!("Failed to fetch users: {}", e);
                self.state.update(|s| {
                    s.users.fail();
                    s.error = Some(e.message.clone());
                });
                self.toasts.error(e.message);
            }
        }
    }

    async fn refetch(&self) {
        let filter = self.state.with_untracked(|s| s.users.filter.clone());
        self.fetch_users(filter).await;
    }

    /// Run a mutation; on success re-read the list with its current filter
    async fn mutate<Fut>(&self, call: Fut, success: &str, refetch: bool) -> bool
    where
        Fut: Future<Output = Result<Ack, ApiError>>,
    {
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
        match call.await {
            Ok(_) => {
                if refetch {
                    self.refetch().await;
                }
                self.state.update(|s| s.is_loading = false);
                self.toasts.success(success);
                true
            }
            Err(e) => {
                log::warn!("User mutation failed: {}", e);
                self.state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(e.message.clone());
                });
                self.toasts.error(e.message);
                false
            }
        }
    }

    pub async fn create_user(&self, dto: CreateUserDto) -> bool {
        let gw = &self.gateway;
        self.mutate(api::create_user(gw, &dto), "User berhasil ditambahkan", true)
            .await
    }

    pub async fn update_user(&self, id: i64, dto: UpdateUserDto) -> bool {
        let gw = &self.gateway;
        self.mutate(api::update_user(gw, id, &dto), "User berhasil diperbarui", true)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> bool {
        let gw = &self.gateway;
        self.mutate(api::delete_user(gw, id), "User berhasil dihapus", true)
            .await
    }

    pub async fn toggle_status(&self, id: i64) -> bool {
        let gw = &self.gateway;
        self.mutate(api::toggle_status(gw, id), "Status user berhasil diubah", true)
            .await
    }

    /// Does not touch the list
    pub async fn reset_password(&self, id: i64, new_password: String) -> bool {
        let gw = &self.gateway;
        self.mutate(
            api::reset_password(gw, id, new_password),
            "Password berhasil direset",
            false,
        )
        .await
    }
}

pub fn use_users() -> UserStore {
    use_context::<UserStore>().expect("UserStore not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::Method;
    use crate::shared::navigation::LOGIN_PATH;
    use crate::shared::testing::*;
    use crate::system::auth::storage::SessionStorage;
    use contracts::enums::UserStatus;
    use futures::executor::block_on;
    use serde_json::json;

    fn store(h: &Harness) -> UserStore {
        UserStore::new(gateway_with(h), ToastService::new())
    }

    fn users_page(users: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "success": true,
            "message": "OK",
            "data": users,
            "pagination": { "page": 1, "limit": 10, "total": 2, "totalPages": 1 }
        })
    }

    #[test]
    fn test_fetch_records_pagination_and_filter() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let users = store(&h);
        h.transport.on(
            Method::Get,
            "/users",
            200,
            users_page(vec![user_json(1, "Admin", "super_admin"), user_json(2, "Budi", "admin")]),
        );

        let filter = UserFilter {
            status: Some(UserStatus::Active),
            ..Default::default()
        };
        block_on(users.fetch_users(filter.clone()));

        let state = users.snapshot();
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users.pagination.unwrap().total, 2);
        assert_eq!(state.users.filter, filter);
        assert!(h.transport.last_request().unwrap().url.ends_with("/users?status=active"));
    }

    #[test]
    fn test_toggle_status_refetches_with_current_filter() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let users = store(&h);
        h.transport
            .on(Method::Get, "/users", 200, users_page(vec![user_json(2, "Budi", "admin")]));
        h.transport.on(Method::Post, "/users/2/toggle-status", 200, ack());

        block_on(users.fetch_users(UserFilter {
            search: Some("budi".into()),
            ..Default::default()
        }));
        assert!(block_on(users.toggle_status(2)));

        let lists = h.transport.requests_to(Method::Get, "/users");
        assert_eq!(lists.len(), 2);
        assert!(lists[1].url.ends_with("/users?search=budi"));
        assert!(!users.snapshot().is_loading);
    }

    #[test]
    fn test_create_user_sends_payload_and_refetches() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let toasts = ToastService::new();
        let users = UserStore::new(gateway_with(&h), toasts);
        h.transport
            .on(Method::Get, "/users", 200, users_page(vec![user_json(1, "Admin", "super_admin")]));
        h.transport.on(
            Method::Get,
            "/users",
            200,
            users_page(vec![user_json(1, "Admin", "super_admin"), user_json(3, "Rina", "admin")]),
        );
        h.transport.on(Method::Post, "/users", 201, ack());
        block_on(users.fetch_users(UserFilter::default()));

        let dto = CreateUserDto {
            name: "Rina".into(),
            email: "rina@papaloma.id".into(),
            password: "rahasia123".into(),
            role: None,
            status: None,
        };
        assert!(block_on(users.create_user(dto)));

        assert_eq!(
            h.transport.body_of_last(Method::Post, "/users"),
            Some(json!({ "name": "Rina", "email": "rina@papaloma.id", "password": "rahasia123" }))
        );
        let state = users.snapshot();
        assert_eq!(state.users.items.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!state.is_loading);
        assert_eq!(toasts.current().last().unwrap().message, "User berhasil ditambahkan");
    }

    #[test]
    fn test_update_user_refetches_list() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let toasts = ToastService::new();
        let users = UserStore::new(gateway_with(&h), toasts);
        h.transport
            .on(Method::Get, "/users", 200, users_page(vec![user_json(2, "Budi", "admin")]));
        h.transport
            .on(Method::Get, "/users", 200, users_page(vec![user_json(2, "Budi Santoso", "admin")]));
        h.transport.on(Method::Put, "/users/2", 200, ack());
        block_on(users.fetch_users(UserFilter::default()));

        let dto = UpdateUserDto {
            name: Some("Budi Santoso".into()),
            ..Default::default()
        };
        assert!(block_on(users.update_user(2, dto)));

        assert_eq!(
            h.transport.body_of_last(Method::Put, "/users/2"),
            Some(json!({ "name": "Budi Santoso" }))
        );
        assert_eq!(users.snapshot().users.items[0].name, "Budi Santoso");
        assert_eq!(h.transport.count(Method::Get, "/users"), 2);
        assert_eq!(toasts.current().last().unwrap().message, "User berhasil diperbarui");
    }

    #[test]
    fn test_reset_password_does_not_refetch() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let users = store(&h);
        h.transport.on(Method::Post, "/users/5/reset-password", 200, ack());

        assert!(block_on(users.reset_password(5, "sementara1".into())));
        assert_eq!(h.transport.count(Method::Get, "/users"), 0);
        assert_eq!(
            h.transport.body_of_last(Method::Post, "/users/5/reset-password"),
            Some(json!({ "newPassword": "sementara1" }))
        );
    }

    #[test]
    fn test_failed_delete_keeps_list() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("tok");
        let users = store(&h);
        h.transport
            .on(Method::Get, "/users", 200, users_page(vec![user_json(2, "Budi", "admin")]));
        h.transport.on(
            Method::Delete,
            "/users/1",
            400,
            fail("Tidak dapat menghapus akun sendiri"),
        );

        block_on(users.fetch_users(UserFilter::default()));
        let before = users.snapshot().users.items;
        assert!(!block_on(users.delete_user(1)));

        let state = users.snapshot();
        assert_eq!(state.users.items, before);
        assert_eq!(state.error.as_deref(), Some("Tidak dapat menghapus akun sendiri"));
        assert!(!state.is_loading);
        assert_eq!(h.transport.count(Method::Get, "/users"), 1);
    }

    #[test]
    fn test_unauthorized_from_user_store_clears_session() {
        let owner = Owner::new();
        owner.set();
        let h = Harness::signed_in("stale");
        let users = store(&h);
        h.transport.on(Method::Get, "/users", 401, fail("Unauthorized"));

        block_on(users.fetch_users(UserFilter::default()));

        assert!(h.session.load().is_none());
        assert_eq!(h.navigator.redirects(), vec![LOGIN_PATH.to_string()]);
    }
}
