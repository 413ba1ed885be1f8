//! # Catalog Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod product;
pub mod raw_material;
pub mod validation;

// Re-export 主要類型
pub use bom::BomLine;
pub use product::{Product, ProductDraft};
pub use raw_material::{RawMaterial, RawMaterialDraft};
pub use validation::ValidationError;

/// 型錄服務錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("驗證失敗: {0}")]
    Validation(#[from] ValidationError),

    #[error("找不到產品: {0}")]
    ProductNotFound(u64),

    #[error("找不到原料: {0}")]
    RawMaterialNotFound(u64),

    #[error("產品 {product_id} 與原料 {raw_material_id} 之間沒有關聯")]
    AssociationNotFound {
        product_id: u64,
        raw_material_id: u64,
    },

    #[error("無效的用量: {0}（必須大於 0）")]
    InvalidQuantity(rust_decimal::Decimal),

    #[error("原料 {raw_material_id} 仍被產品 {product_ids:?} 引用，無法刪除")]
    RawMaterialInUse {
        raw_material_id: u64,
        product_ids: Vec<u64>,
    },

    #[error("儲存層錯誤: {0}")]
    Storage(String),
}

impl CatalogError {
    /// 檢查是否為「找不到」類型的錯誤
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::ProductNotFound(_)
                | CatalogError::RawMaterialNotFound(_)
                | CatalogError::AssociationNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
