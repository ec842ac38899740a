pub mod d400_inventory;
pub mod d401_laporan;

pub use d400_inventory::ui::InventoryDashboard;
