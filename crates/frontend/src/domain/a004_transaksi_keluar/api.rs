use contracts::domain::a003_transaksi_masuk::aggregate::{
    MonthlyTrend, MonthlyTrendData, TotalData, TransaksiData,
};
use contracts::domain::a004_transaksi_keluar::aggregate::{
    CreateTransaksiKeluarDto, ReasonSummary, ReasonSummaryData, TransaksiKeluar,
    TransaksiKeluarFilter,
};
use contracts::shared::{Ack, DateRange, YearQuery};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway, Page};

pub async fn fetch_transaksi_keluar(
    gw: &Gateway,
    filter: &TransaksiKeluarFilter,
) -> Result<Page<TransaksiKeluar>, ApiError> {
    Ok(gw
        .get("/transaksi-keluar")
        .query(filter)
        .send::<Vec<TransaksiKeluar>>()
        .await?
        .into())
}

pub async fn fetch_transaksi_keluar_by_id(gw: &Gateway, id: i64) -> Result<TransaksiKeluar, ApiError> {
    Ok(gw
        .get(format!("/transaksi-keluar/{}", id))
        .send::<TransaksiData<TransaksiKeluar>>()
        .await?
        .into_data()?
        .transaksi)
}

/// Record a stock-out. Stock sufficiency is checked by the server only.
pub async fn create_transaksi_keluar(
    gw: &Gateway,
    dto: &CreateTransaksiKeluarDto,
) -> Result<Ack, ApiError> {
    gw.post("/transaksi-keluar").json(dto).send().await
}

pub async fn fetch_monthly_trend(gw: &Gateway, year: Option<i32>) -> Result<Vec<MonthlyTrend>, ApiError> {
    Ok(gw
        .get("/transaksi-keluar/monthly-trend")
        .query(&YearQuery { year })
        .send::<MonthlyTrendData>()
        .await?
        .into_data_or_default()
        .trend)
}

pub async fn fetch_total_current_month(gw: &Gateway) -> Result<u64, ApiError> {
    Ok(gw
        .get("/transaksi-keluar/total-current-month")
        .send::<TotalData>()
        .await?
        .into_data_or_default()
        .total)
}

pub async fn fetch_by_reason(gw: &Gateway, range: &DateRange) -> Result<Vec<ReasonSummary>, ApiError> {
    Ok(gw
        .get("/transaksi-keluar/by-reason")
        .query(range)
        .send::<ReasonSummaryData>()
        .await?
        .into_data_or_default()
        .data)
}
