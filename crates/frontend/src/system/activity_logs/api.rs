//! Audit trail reads. No store: the log pages read these directly.

use contracts::shared::LimitQuery;
use contracts::system::activity_logs::{ActivityLog, ActivityLogFilter, ActivityLogListData};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway, Page};

/// All users' activity (super admin)
pub async fn fetch_activity_logs(
    gw: &Gateway,
    filter: &ActivityLogFilter,
) -> Result<Page<ActivityLog>, ApiError> {
    Ok(gw
        .get("/activity-logs")
        .query(filter)
        .send::<Vec<ActivityLog>>()
        .await?
        .into())
}

/// Activity of the signed-in user
pub async fn fetch_my_activity(gw: &Gateway, limit: Option<u32>) -> Result<Vec<ActivityLog>, ApiError> {
    Ok(gw
        .get("/activity-logs/me")
        .query(&LimitQuery { limit })
        .send::<ActivityLogListData>()
        .await?
        .into_data_or_default()
        .logs)
}
