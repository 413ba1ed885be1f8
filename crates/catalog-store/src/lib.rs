//! # Catalog Store
//!
//! 庫存儲存與 BOM 關聯儲存

pub mod bom;
pub mod inventory;

// Re-export 主要類型
pub use bom::BomRepository;
pub use inventory::InventoryStore;
