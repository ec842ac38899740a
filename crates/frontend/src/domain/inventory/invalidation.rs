/// Lists the inventory store can re-read from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Barang,
    Kategori,
    TransaksiMasuk,
    TransaksiKeluar,
}

/// Every write the inventory store performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    AddBarang,
    UpdateBarang,
    DeleteBarang,
    AddKategori,
    UpdateKategori,
    DeleteKategori,
    AddTransaksiMasuk,
    AddTransaksiKeluar,
}

impl Mutation {
    /// Lists re-fetched, in this order, once the server accepted the write.
    /// A stock movement changes the item's stock, so the item list follows
    /// the transaction list.
    pub fn affected(&self) -> &'static [Slice] {
        match self {
            Mutation::AddBarang | Mutation::UpdateBarang | Mutation::DeleteBarang => &[Slice::Barang],
            Mutation::AddKategori | Mutation::UpdateKategori | Mutation::DeleteKategori => {
                &[Slice::Kategori]
            }
            Mutation::AddTransaksiMasuk => &[Slice::TransaksiMasuk, Slice::Barang],
            Mutation::AddTransaksiKeluar => &[Slice::TransaksiKeluar, Slice::Barang],
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Mutation::AddBarang => "Barang berhasil ditambahkan",
            Mutation::UpdateBarang => "Barang berhasil diperbarui",
            Mutation::DeleteBarang => "Barang berhasil dihapus",
            Mutation::AddKategori => "Kategori berhasil ditambahkan",
            Mutation::UpdateKategori => "Kategori berhasil diperbarui",
            Mutation::DeleteKategori => "Kategori berhasil dihapus",
            Mutation::AddTransaksiMasuk => "Barang masuk berhasil dicatat",
            Mutation::AddTransaksiKeluar => "Barang keluar berhasil dicatat",
        }
    }
}
