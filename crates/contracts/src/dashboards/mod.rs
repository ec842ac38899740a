pub mod d400_inventory;
pub mod d401_laporan;
