use serde::{Deserialize, Serialize};

/// Reason recorded on a stock-out transaction.
///
/// The server stores the label text, so the serialized form is the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlasanKeluar {
    #[serde(rename = "Pemakaian harian")]
    PemakaianHarian,
    #[serde(rename = "Rusak")]
    Rusak,
    #[serde(rename = "Kadaluarsa")]
    Kadaluarsa,
    #[serde(rename = "Hilang")]
    Hilang,
    #[serde(rename = "Retur supplier")]
    ReturSupplier,
    #[serde(rename = "Lainnya")]
    Lainnya,
}

impl AlasanKeluar {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlasanKeluar::PemakaianHarian => "Pemakaian harian",
            AlasanKeluar::Rusak => "Rusak",
            AlasanKeluar::Kadaluarsa => "Kadaluarsa",
            AlasanKeluar::Hilang => "Hilang",
            AlasanKeluar::ReturSupplier => "Retur supplier",
            AlasanKeluar::Lainnya => "Lainnya",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.as_str() == label)
    }

    pub fn all() -> [AlasanKeluar; 6] {
        [
            AlasanKeluar::PemakaianHarian,
            AlasanKeluar::Rusak,
            AlasanKeluar::Kadaluarsa,
            AlasanKeluar::Hilang,
            AlasanKeluar::ReturSupplier,
            AlasanKeluar::Lainnya,
        ]
    }
}
