//! # Catalog
//!
//! 產品型錄與 BOM 可生產性判定
//!
//! - `catalog-core`：資料模型、錯誤類型與驗證
//! - `catalog-store`：庫存儲存與 BOM 關聯儲存
//! - `catalog-calc`：可生產性判定引擎
//! - `catalog-service`：呈現層消費的交易門面

// Re-export 主要類型
pub use catalog_calc::{ProducibilityCalculator, Shortage};
pub use catalog_core::{
    BomLine, CatalogError, Product, ProductDraft, RawMaterial, RawMaterialDraft, Result,
    ValidationError,
};
pub use catalog_service::CatalogService;
pub use catalog_store::{BomRepository, InventoryStore};
