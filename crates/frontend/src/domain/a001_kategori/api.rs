use contracts::dashboards::d400_inventory::dto::{DistributionData, KategoriDistribution};
use contracts::domain::a001_kategori::aggregate::{
    CreateKategoriDto, Kategori, KategoriData, KategoriListData, UpdateKategoriDto,
};
use contracts::shared::Ack;

use crate::shared::gateway::{ApiError, EnvelopeExt, Gateway};

/// All categories with their item counts; the endpoint is not paginated
pub async fn fetch_kategori(gw: &Gateway) -> Result<Vec<Kategori>, ApiError> {
    Ok(gw
        .get("/kategori")
        .send::<KategoriListData>()
        .await?
        .into_data_or_default()
        .kategori)
}

pub async fn fetch_kategori_by_id(gw: &Gateway, id: i64) -> Result<Kategori, ApiError> {
    Ok(gw
        .get(format!("/kategori/{}", id))
        .send::<KategoriData>()
        .await?
        .into_data()?
        .kategori)
}

pub async fn create_kategori(gw: &Gateway, dto: &CreateKategoriDto) -> Result<Ack, ApiError> {
    gw.post("/kategori").json(dto).send().await
}

pub async fn update_kategori(
    gw: &Gateway,
    id: i64,
    dto: &UpdateKategoriDto,
) -> Result<Ack, ApiError> {
    gw.put(format!("/kategori/{}", id)).json(dto).send().await
}

pub async fn delete_kategori(gw: &Gateway, id: i64) -> Result<Ack, ApiError> {
    gw.delete(format!("/kategori/{}", id)).send().await
}

pub async fn fetch_distribution(gw: &Gateway) -> Result<Vec<KategoriDistribution>, ApiError> {
    Ok(gw
        .get("/kategori/distribution")
        .send::<DistributionData>()
        .await?
        .into_data_or_default()
        .distribution)
}
