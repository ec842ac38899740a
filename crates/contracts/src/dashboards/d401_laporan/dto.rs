//! Report payloads of `/laporan/*`. Each carries a summary block and the
//! rows it was computed from.

use crate::domain::a002_barang::aggregate::Barang;
use crate::domain::a003_transaksi_masuk::aggregate::TransaksiMasuk;
use crate::domain::a004_transaksi_keluar::aggregate::{ReasonSummary, TransaksiKeluar};
use serde::{Deserialize, Serialize};

/// Wrapper of every report response: `data: { report: ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData<T> {
    pub report: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StokReportItem {
    #[serde(flatten)]
    pub barang: Barang,
    pub total_nilai: f64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StokSummary {
    pub total_items: u64,
    pub total_nilai: f64,
    pub low_stock_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StokReport {
    #[serde(default)]
    pub items: Vec<StokReportItem>,
    pub summary: StokSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransaksiSummary {
    pub total_transaksi: u64,
    pub total_jumlah: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasukReport {
    #[serde(default)]
    pub items: Vec<TransaksiMasuk>,
    pub summary: TransaksiSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeluarSummary {
    pub total_transaksi: u64,
    pub total_jumlah: u64,
    #[serde(default)]
    pub by_reason: Vec<ReasonSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeluarReport {
    #[serde(default)]
    pub items: Vec<TransaksiKeluar>,
    pub summary: KeluarSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenyusutanItem {
    #[serde(flatten)]
    pub barang: Barang,
    pub estimasi_kerugian: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KerugianByKondisi {
    pub rusak: u64,
    pub kadaluarsa: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenyusutanSummary {
    pub total_items: u64,
    pub total_kerugian: f64,
    pub by_kondisi: KerugianByKondisi,
}

/// Shrinkage report: damaged and expired items with estimated loss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenyusutanReport {
    #[serde(default)]
    pub items: Vec<PenyusutanItem>,
    pub summary: PenyusutanSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveStok {
    pub total_items: u64,
    pub total_nilai: f64,
    pub low_stock: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensivePenyusutan {
    pub total_items: u64,
    pub total_kerugian: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReport {
    pub generated_at: String,
    #[serde(default)]
    pub period: ReportPeriod,
    pub stok: ComprehensiveStok,
    pub barang_masuk: TransaksiSummary,
    pub barang_keluar: TransaksiSummary,
    pub penyusutan: ComprehensivePenyusutan,
}

/// Query of `GET /laporan/stok`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StokReportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kategori_id: Option<i64>,
}
