use contracts::dashboards::d400_inventory::dto::{
    ChartData, ChartDataData, DashboardStats, DistributionData, KategoriDistribution,
    LowStockData, RecentActivitiesData, RecentActivity, StatsData, TopUsedData, TopUsedItem,
};
use contracts::domain::a002_barang::aggregate::Barang;
use contracts::shared::{LimitQuery, YearQuery};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway};

/// Default number of rows of the "most used" widget
pub const TOP_USED_LIMIT: u32 = 8;
/// Default number of rows of the "recent activity" widget
pub const RECENT_ACTIVITY_LIMIT: u32 = 5;

pub async fn fetch_stats(gw: &Gateway) -> Result<DashboardStats, ApiError> {
    Ok(gw
        .get("/dashboard/stats")
        .send::<StatsData>()
        .await?
        .into_data()?
        .stats)
}

/// In/out totals per month of `year` (current year when `None`)
pub async fn fetch_chart_data(gw: &Gateway, year: Option<i32>) -> Result<Vec<ChartData>, ApiError> {
    Ok(gw
        .get("/dashboard/chart-data")
        .query(&YearQuery { year })
        .send::<ChartDataData>()
        .await?
        .into_data_or_default()
        .chart_data)
}

pub async fn fetch_kategori_distribution(
    gw: &Gateway,
) -> Result<Vec<KategoriDistribution>, ApiError> {
    Ok(gw
        .get("/dashboard/kategori-distribution")
        .send::<DistributionData>()
        .await?
        .into_data_or_default()
        .distribution)
}

pub async fn fetch_low_stock_items(gw: &Gateway) -> Result<Vec<Barang>, ApiError> {
    Ok(gw
        .get("/dashboard/low-stock")
        .send::<LowStockData>()
        .await?
        .into_data_or_default()
        .items)
}

pub async fn fetch_top_used(gw: &Gateway, limit: u32) -> Result<Vec<TopUsedItem>, ApiError> {
    Ok(gw
        .get("/dashboard/top-used")
        .query(&LimitQuery { limit: Some(limit) })
        .send::<TopUsedData>()
        .await?
        .into_data_or_default()
        .items)
}

pub async fn fetch_recent_activities(
    gw: &Gateway,
    limit: u32,
) -> Result<Vec<RecentActivity>, ApiError> {
    Ok(gw
        .get("/dashboard/recent-activities")
        .query(&LimitQuery { limit: Some(limit) })
        .send::<RecentActivitiesData>()
        .await?
        .into_data_or_default()
        .activities)
}
