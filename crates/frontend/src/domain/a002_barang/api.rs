use contracts::dashboards::d400_inventory::dto::{TopUsedData, TopUsedItem};
use contracts::domain::a002_barang::aggregate::{
    Barang, BarangData, BarangFilter, BarangListData, CreateBarangDto, UpdateBarangDto,
};
use contracts::shared::{Ack, LimitQuery};

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway, Page};

pub async fn fetch_barang(gw: &Gateway, filter: &BarangFilter) -> Result<Page<Barang>, ApiError> {
    Ok(gw.get("/barang").query(filter).send::<Vec<Barang>>().await?.into())
}

pub async fn fetch_barang_by_id(gw: &Gateway, id: i64) -> Result<Barang, ApiError> {
    Ok(gw
        .get(format!("/barang/{}", id))
        .send::<BarangData>()
        .await?
        .into_data()?
        .barang)
}

pub async fn create_barang(gw: &Gateway, dto: &CreateBarangDto) -> Result<Ack, ApiError> {
    gw.post("/barang").json(dto).send().await
}

pub async fn update_barang(gw: &Gateway, id: i64, dto: &UpdateBarangDto) -> Result<Ack, ApiError> {
    gw.put(format!("/barang/{}", id)).json(dto).send().await
}

pub async fn delete_barang(gw: &Gateway, id: i64) -> Result<Ack, ApiError> {
    gw.delete(format!("/barang/{}", id)).send().await
}

/// Items at or below their minimum stock
pub async fn fetch_low_stock(gw: &Gateway) -> Result<Vec<Barang>, ApiError> {
    Ok(gw
        .get("/barang/low-stock")
        .send::<BarangListData>()
        .await?
        .into_data_or_default()
        .barang)
}

/// Items whose condition is damaged or expired
pub async fn fetch_damaged(gw: &Gateway) -> Result<Vec<Barang>, ApiError> {
    Ok(gw
        .get("/barang/damaged")
        .send::<BarangListData>()
        .await?
        .into_data_or_default()
        .barang)
}

pub async fn fetch_top_used(gw: &Gateway, limit: Option<u32>) -> Result<Vec<TopUsedItem>, ApiError> {
    Ok(gw
        .get("/barang/top-used")
        .query(&LimitQuery { limit })
        .send::<TopUsedData>()
        .await?
        .into_data_or_default()
        .items)
}
