use crate::domain::a003_transaksi_masuk::aggregate::{BarangRef, CreatedBy};
use crate::enums::AlasanKeluar;
use serde::{Deserialize, Serialize};

/// Stock-out ledger entry (aggregate a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransaksiKeluar {
    pub id: i64,
    pub barang: BarangRef,
    pub jumlah: u32,
    pub tanggal: String,
    /// Kept as text: older rows carry labels outside [`AlasanKeluar`]
    pub alasan: String,
    #[serde(default)]
    pub catatan: Option<String>,
    pub created_by: CreatedBy,
    #[serde(default)]
    pub created_at: String,
}

impl TransaksiKeluar {
    pub fn alasan_kind(&self) -> Option<AlasanKeluar> {
        AlasanKeluar::from_label(&self.alasan)
    }
}

/// Body of `POST /transaksi-keluar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaksiKeluarDto {
    pub barang_id: i64,
    pub jumlah: u32,
    pub tanggal: chrono::NaiveDate,
    pub alasan: AlasanKeluar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

/// Query of `GET /transaksi-keluar`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransaksiKeluarFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barang_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alasan: Option<AlasanKeluar>,
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

/// One row of `/transaksi-keluar/by-reason`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonSummary {
    pub alasan: String,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasonSummaryData {
    #[serde(default)]
    pub data: Vec<ReasonSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_create_dto_wire_shape() {
        let dto = CreateTransaksiKeluarDto {
            barang_id: 7,
            jumlah: 2,
            tanggal: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            alasan: AlasanKeluar::PemakaianHarian,
            catatan: None,
        };
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "barangId": 7,
                "jumlah": 2,
                "tanggal": "2024-03-15",
                "alasan": "Pemakaian harian"
            })
        );
    }

    #[test]
    fn test_unknown_reason_label_survives() {
        let raw = json!({
            "id": 1,
            "barang": { "id": 7, "name": "Gula", "satuan": "kg", "kategori": { "id": 3, "name": "Bumbu" } },
            "jumlah": 1,
            "tanggal": "2024-03-15",
            "alasan": "Transfer ke Cabang",
            "createdBy": { "id": 1, "name": "Admin", "email": "admin@papaloma.id", "role": "admin" },
            "createdAt": "2024-03-15T10:00:00.000Z"
        });
        let trx: TransaksiKeluar = serde_json::from_value(raw).unwrap();
        assert_eq!(trx.alasan, "Transfer ke Cabang");
        assert!(trx.alasan_kind().is_none());
    }
}
