pub mod a001_kategori;
pub mod a002_barang;
pub mod a003_transaksi_masuk;
pub mod a004_transaksi_keluar;
