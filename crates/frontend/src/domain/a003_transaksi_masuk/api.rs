use contracts::domain::a003_transaksi_masuk::aggregate::{
    CreateTransaksiMasukDto, MonthlyTrend, MonthlyTrendData, TotalData, TransaksiData,
    TransaksiMasuk, TransaksiMasukFilter,
};
use contracts::shared::{Ack, YearQuery};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway, Page};

pub async fn fetch_transaksi_masuk(
    gw: &Gateway,
    filter: &TransaksiMasukFilter,
) -> Result<Page<TransaksiMasuk>, ApiError> {
    Ok(gw
        .get("/transaksi-masuk")
        .query(filter)
        .send::<Vec<TransaksiMasuk>>()
        .await?
        .into())
}

pub async fn fetch_transaksi_masuk_by_id(gw: &Gateway, id: i64) -> Result<TransaksiMasuk, ApiError> {
    Ok(gw
        .get(format!("/transaksi-masuk/{}", id))
        .send::<TransaksiData<TransaksiMasuk>>()
        .await?
        .into_data()?
        .transaksi)
}

/// Record a stock-in; the server raises the item's stock
pub async fn create_transaksi_masuk(
    gw: &Gateway,
    dto: &CreateTransaksiMasukDto,
) -> Result<Ack, ApiError> {
    gw.post("/transaksi-masuk").json(dto).send().await
}

pub async fn fetch_monthly_trend(gw: &Gateway, year: Option<i32>) -> Result<Vec<MonthlyTrend>, ApiError> {
    Ok(gw
        .get("/transaksi-masuk/monthly-trend")
        .query(&YearQuery { year })
        .send::<MonthlyTrendData>()
        .await?
        .into_data_or_default()
        .trend)
}

pub async fn fetch_total_current_month(gw: &Gateway) -> Result<u64, ApiError> {
    Ok(gw
        .get("/transaksi-masuk/total-current-month")
        .send::<TotalData>()
        .await?
        .into_data_or_default()
        .total)
}
