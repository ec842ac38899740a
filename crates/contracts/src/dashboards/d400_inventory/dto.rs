use crate::domain::a002_barang::aggregate::Barang;
use serde::{Deserialize, Serialize};

/// Headline numbers of the inventory dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_barang: u64,
    /// Sum of stock × unit price, rupiah
    pub total_nilai_inventaris: f64,
    pub total_barang_masuk: u64,
    pub total_barang_keluar: u64,
    pub barang_stok_rendah: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsData {
    pub stats: DashboardStats,
}

/// One month of the in/out chart, `name` is the short month label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub name: String,
    pub masuk: u64,
    pub keluar: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataData {
    #[serde(default)]
    pub chart_data: Vec<ChartData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KategoriDistribution {
    pub name: String,
    pub value: u64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionData {
    #[serde(default)]
    pub distribution: Vec<KategoriDistribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopUsedItem {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopUsedData {
    #[serde(default)]
    pub items: Vec<TopUsedItem>,
}

/// `data` of `GET /dashboard/low-stock`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LowStockData {
    #[serde(default)]
    pub items: Vec<Barang>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityDirection {
    Masuk,
    Keluar,
}

/// Feed entry merging stock-in and stock-out transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: i64,
    #[serde(rename = "type")]
    pub direction: ActivityDirection,
    pub barang: String,
    pub jumlah: u32,
    pub satuan: String,
    pub tanggal: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentActivitiesData {
    #[serde(default)]
    pub activities: Vec<RecentActivity>,
}
