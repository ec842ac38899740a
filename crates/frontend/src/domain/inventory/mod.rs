//! Inventory state shared by the item, category, stock-movement and
//! dashboard pages.

pub mod invalidation;
pub mod store;

pub use invalidation::{Mutation, Slice};
pub use store::{use_inventory, InventoryStore};
