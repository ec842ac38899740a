//! Report reads. Reports are fetched on demand by the report pages and are
//! not cached in any store.

use contracts::dashboards::d401_laporan::dto::{
    ComprehensiveReport, KeluarReport, MasukReport, PenyusutanReport, ReportData, StokReport,
    StokReportQuery,
};
use contracts::shared::DateRange;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway};

async fn report<T, Q>(gw: &Gateway, path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    Ok(gw
        .get(path)
        .query(query)
        .send::<ReportData<T>>()
        .await?
        .into_data()?
        .report)
}

/// Stock position, optionally limited to one category
pub async fn fetch_stok_report(gw: &Gateway, kategori_id: Option<i64>) -> Result<StokReport, ApiError> {
    report(gw, "/laporan/stok", &StokReportQuery { kategori_id }).await
}

pub async fn fetch_masuk_report(gw: &Gateway, range: &DateRange) -> Result<MasukReport, ApiError> {
    report(gw, "/laporan/masuk", range).await
}

pub async fn fetch_keluar_report(gw: &Gateway, range: &DateRange) -> Result<KeluarReport, ApiError> {
    report(gw, "/laporan/keluar", range).await
}

/// Shrinkage: damaged and expired stock with the resulting loss
pub async fn fetch_penyusutan_report(gw: &Gateway) -> Result<PenyusutanReport, ApiError> {
    report(gw, "/laporan/penyusutan", &DateRange::default()).await
}

pub async fn fetch_comprehensive_report(
    gw: &Gateway,
    range: &DateRange,
) -> Result<ComprehensiveReport, ApiError> {
    report(gw, "/laporan/comprehensive", range).await
}
