use crate::domain::a001_kategori::aggregate::KategoriRef;
use serde::{Deserialize, Serialize};

/// Item as embedded in a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarangRef {
    pub id: i64,
    pub name: String,
    pub satuan: String,
    pub kategori: KategoriRef,
}

/// Author of a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedBy {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Stock-in ledger entry (aggregate a003)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransaksiMasuk {
    pub id: i64,
    pub barang: BarangRef,
    pub jumlah: u32,
    pub tanggal: String,
    pub supplier: String,
    #[serde(default)]
    pub catatan: Option<String>,
    pub created_by: CreatedBy,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /transaksi-masuk`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaksiMasukDto {
    pub barang_id: i64,
    pub jumlah: u32,
    pub tanggal: chrono::NaiveDate,
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

/// Query of `GET /transaksi-masuk`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransaksiMasukFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barang_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// `data` of `GET/POST /transaksi-masuk/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransaksiData<T> {
    pub transaksi: T,
}

/// One point of `/monthly-trend`; `month` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendData {
    #[serde(default)]
    pub trend: Vec<MonthlyTrend>,
}

/// `data` of `/total-current-month`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalData {
    pub total: u64,
}
