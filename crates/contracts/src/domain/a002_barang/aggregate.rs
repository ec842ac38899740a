use crate::domain::a001_kategori::aggregate::KategoriRef;
use crate::enums::{Kondisi, StokStatus, StokStatusFilter};
use serde::{Deserialize, Serialize};

/// Inventory item (aggregate a002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barang {
    pub id: i64,
    pub name: String,
    pub kategori: KategoriRef,
    /// Unit of measure ("kg", "liter", "pcs", ...)
    pub satuan: String,
    pub stok: u32,
    pub stok_minimum: u32,
    pub harga_per_unit: f64,
    pub lokasi: String,
    pub kondisi: Kondisi,
    #[serde(default)]
    pub tanggal_kadaluarsa: Option<String>,
    #[serde(default)]
    pub catatan: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Barang {
    pub fn stok_status(&self) -> StokStatus {
        StokStatus::evaluate(self.stok, self.stok_minimum)
    }

    /// Stock value at the current unit price
    pub fn total_nilai(&self) -> f64 {
        self.stok as f64 * self.harga_per_unit
    }
}

/// Body of `POST /barang`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBarangDto {
    pub name: String,
    pub kategori_id: i64,
    pub satuan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stok: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stok_minimum: Option<u32>,
    /// Rupiah, no minor units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harga_per_unit: Option<u64>,
    pub lokasi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kondisi: Option<Kondisi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal_kadaluarsa: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

/// Body of `PUT /barang/:id`; only present fields are changed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBarangDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kategori_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satuan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stok: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stok_minimum: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub harga_per_unit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lokasi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kondisi: Option<Kondisi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal_kadaluarsa: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

/// Query of `GET /barang`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarangFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kategori_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kondisi: Option<Kondisi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stok_status: Option<StokStatusFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `data` of `GET/POST/PUT /barang/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarangData {
    pub barang: Barang,
}

/// `data` of `GET /barang/low-stock` and `/barang/damaged`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarangListData {
    #[serde(default)]
    pub barang: Vec<Barang>,
}
