use serde::{Deserialize, Serialize};

/// Physical condition of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kondisi {
    #[default]
    Baik,
    Rusak,
    Kadaluarsa,
}

impl Kondisi {
    /// Wire code, also used as the list filter value
    pub fn code(&self) -> &'static str {
        match self {
            Kondisi::Baik => "baik",
            Kondisi::Rusak => "rusak",
            Kondisi::Kadaluarsa => "kadaluarsa",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Kondisi::Baik => "Baik",
            Kondisi::Rusak => "Rusak",
            Kondisi::Kadaluarsa => "Kadaluarsa",
        }
    }

    /// Damaged and expired items count as shrinkage
    pub fn is_loss(&self) -> bool {
        !matches!(self, Kondisi::Baik)
    }

    pub fn all() -> [Kondisi; 3] {
        [Kondisi::Baik, Kondisi::Rusak, Kondisi::Kadaluarsa]
    }
}
