pub mod alasan_keluar;
pub mod kondisi;
pub mod notification_type;
pub mod stok_status;
pub mod user_role;

pub use alasan_keluar::AlasanKeluar;
pub use kondisi::Kondisi;
pub use notification_type::NotificationType;
pub use stok_status::{StokStatus, StokStatusFilter};
pub use user_role::{UserRole, UserStatus};
