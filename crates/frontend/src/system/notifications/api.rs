use contracts::shared::Ack;
use contracts::system::notifications::{Notification, NotificationFilter, UnreadCountData};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway, Page};

pub async fn fetch_notifications(
    gw: &Gateway,
    filter: &NotificationFilter,
) -> Result<Page<Notification>, ApiError> {
    Ok(gw
        .get("/notifications")
        .query(filter)
        .send::<Vec<Notification>>()
        .await?
        .into())
}

pub async fn fetch_unread_count(gw: &Gateway) -> Result<u32, ApiError> {
    Ok(gw
        .get("/notifications/unread-count")
        .send::<UnreadCountData>()
        .await?
        .into_data_or_default()
        .count)
}

pub async fn mark_as_read(gw: &Gateway, id: i64) -> Result<Ack, ApiError> {
    gw.put(format!("/notifications/{}/read", id)).send().await
}

pub async fn mark_all_as_read(gw: &Gateway) -> Result<Ack, ApiError> {
    gw.put("/notifications/read-all").send().await
}

pub async fn delete_notification(gw: &Gateway, id: i64) -> Result<Ack, ApiError> {
    gw.delete(format!("/notifications/{}", id)).send().await
}

pub async fn delete_all(gw: &Gateway) -> Result<Ack, ApiError> {
    gw.delete("/notifications").send().await
}
