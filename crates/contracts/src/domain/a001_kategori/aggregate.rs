use serde::{Deserialize, Serialize};

/// Item category (aggregate a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kategori {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Number of items in the category, present on list responses only
    #[serde(default)]
    pub barang_count: Option<u32>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Category as embedded in item and transaction payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KategoriRef {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateKategoriDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateKategoriDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `data` of `GET /kategori`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KategoriListData {
    #[serde(default)]
    pub kategori: Vec<Kategori>,
}

/// `data` of `GET/POST/PUT /kategori/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KategoriData {
    pub kategori: Kategori,
}
