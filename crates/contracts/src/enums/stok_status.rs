use serde::{Deserialize, Serialize};

/// Stock level of an item relative to its minimum threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StokStatus {
    Normal,
    Rendah,
    Habis,
}

impl StokStatus {
    pub fn evaluate(stok: u32, stok_minimum: u32) -> Self {
        if stok == 0 {
            StokStatus::Habis
        } else if stok <= stok_minimum {
            StokStatus::Rendah
        } else {
            StokStatus::Normal
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StokStatus::Normal => "Normal",
            StokStatus::Rendah => "Rendah",
            StokStatus::Habis => "Habis",
        }
    }

    /// Out-of-stock items are low as well
    pub fn is_low(&self) -> bool {
        !matches!(self, StokStatus::Normal)
    }
}

/// `stokStatus` filter accepted by `GET /barang`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StokStatusFilter {
    Low,
    Normal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(StokStatus::evaluate(0, 5), StokStatus::Habis);
        assert_eq!(StokStatus::evaluate(0, 0), StokStatus::Habis);
        assert_eq!(StokStatus::evaluate(5, 5), StokStatus::Rendah);
        assert_eq!(StokStatus::evaluate(1, 5), StokStatus::Rendah);
        assert_eq!(StokStatus::evaluate(6, 5), StokStatus::Normal);
    }

    #[test]
    fn test_low_includes_out_of_stock() {
        assert!(StokStatus::Habis.is_low());
        assert!(StokStatus::Rendah.is_low());
        assert!(!StokStatus::Normal.is_low());
    }
}
