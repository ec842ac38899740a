use contracts::shared::Ack;
use contracts::system::auth::{
    ChangePasswordDto, ForgotPasswordData, ForgotPasswordRequest, LoginData, LoginRequest,
    ResetPasswordRequest, UpdateProfileDto, UserData, VerifyResetTokenData,
};
use contracts::system::users::User;

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway};

/// Login with email and password
pub async fn login(gw: &Gateway, email: String, password: String) -> Result<LoginData, ApiError> {
    gw.post("/auth/login")
        .public()
        .json(&LoginRequest { email, password })
        .send::<LoginData>()
        .await?
        .into_data()
}

/// Logout (server-side session bookkeeping only)
pub async fn logout(gw: &Gateway) -> Result<(), ApiError> {
    gw.post("/auth/logout").send::<serde_json::Value>().await?;
    Ok(())
}

/// Get current user info
pub async fn get_me(gw: &Gateway) -> Result<User, ApiError> {
    Ok(gw.get("/auth/me").send::<UserData>().await?.into_data()?.user)
}

pub async fn update_profile(gw: &Gateway, dto: &UpdateProfileDto) -> Result<User, ApiError> {
    Ok(gw
        .put("/auth/profile")
        .json(dto)
        .send::<UserData>()
        .await?
        .into_data()?
        .user)
}

pub async fn change_password(gw: &Gateway, dto: &ChangePasswordDto) -> Result<Ack, ApiError> {
    gw.put("/auth/change-password").json(dto).send().await
}

pub async fn forgot_password(gw: &Gateway, email: String) -> Result<ForgotPasswordData, ApiError> {
    let response = gw
        .post("/auth/forgot-password")
        .public()
        .json(&ForgotPasswordRequest { email })
        .send::<ForgotPasswordData>()
        .await?;
    let message = response.message.clone();
    let mut data = response.into_data_or_default();
    if data.message.is_none() && !message.is_empty() {
        data.message = Some(message);
    }
    Ok(data)
}

pub async fn verify_reset_token(gw: &Gateway, token: &str) -> Result<VerifyResetTokenData, ApiError> {
    gw.get(format!("/auth/verify-reset-token/{}", urlencoding::encode(token)))
        .public()
        .send::<VerifyResetTokenData>()
        .await?
        .into_data()
}

pub async fn reset_password(
    gw: &Gateway,
    token: String,
    new_password: String,
) -> Result<Ack, ApiError> {
    gw.post("/auth/reset-password")
        .public()
        .json(&ResetPasswordRequest {
            token,
            new_password,
        })
        .send()
        .await
}
