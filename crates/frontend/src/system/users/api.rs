use contracts::shared::Ack;
use contracts::system::auth::UserData;
use contracts::system::users::{CreateUserDto, ResetUserPasswordDto, UpdateUserDto, User, UserFilter};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway, Page};

/// Fetch users matching the filter
pub async fn fetch_users(gw: &Gateway, filter: &UserFilter) -> Result<Page<User>, ApiError> {
    Ok(gw.get("/users").query(filter).send::<Vec<User>>().await?.into())
}

pub async fn fetch_user(gw: &Gateway, id: i64) -> Result<User, ApiError> {
    Ok(gw
        .get(format!("/users/{}", id))
        .send::<UserData>()
        .await?
        .into_data()?
        .user)
}

pub async fn create_user(gw: &Gateway, dto: &CreateUserDto) -> Result<Ack, ApiError> {
    gw.post("/users").json(dto).send().await
}

pub async fn update_user(gw: &Gateway, id: i64, dto: &UpdateUserDto) -> Result<Ack, ApiError> {
    gw.put(format!("/users/{}", id)).json(dto).send().await
}

pub async fn delete_user(gw: &Gateway, id: i64) -> Result<Ack, ApiError> {
    gw.delete(format!("/users/{}", id)).send().await
}

/// Set a new password for another user (super admin only)
pub async fn reset_password(gw: &Gateway, id: i64, new_password: String) -> Result<Ack, ApiError> {
    gw.post(format!("/users/{}/reset-password", id))
        .json(&ResetUserPasswordDto { new_password })
        .send()
        .await
}

pub async fn toggle_status(gw: &Gateway, id: i64) -> Result<Ack, ApiError> {
    gw.post(format!("/users/{}/toggle-status", id)).send().await
}
