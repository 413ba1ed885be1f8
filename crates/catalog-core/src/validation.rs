//! 欄位驗證
//!
//! 呈現層有自己的表單檢查，但 API 是信任邊界，核心在任何
//! 變更落地之前都要獨立重新驗證一次。

use rust_decimal::Decimal;

use crate::{ProductDraft, RawMaterialDraft};

/// 驗證錯誤
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("名稱不可為空")]
    EmptyName,

    #[error("售價必須大於 0，收到 {0}")]
    NonPositivePrice(Decimal),

    #[error("成本不可為負，收到 {0}")]
    NegativeCost(Decimal),

    #[error("庫存不可為負，收到 {0}")]
    NegativeStock(Decimal),
}

/// 驗證產品草稿
pub fn validate_product(draft: &ProductDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if draft.price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice(draft.price));
    }
    Ok(())
}

/// 驗證原料草稿
///
/// 庫存為 0 是合法值；負值才拒絕。
pub fn validate_raw_material(draft: &RawMaterialDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if draft.cost < Decimal::ZERO {
        return Err(ValidationError::NegativeCost(draft.cost));
    }
    if draft.current_stock < Decimal::ZERO {
        return Err(ValidationError::NegativeStock(draft.current_stock));
    }
    Ok(())
}
