//! BOM 關聯模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// BOM 關聯（單條用料線）
///
/// 連結一個產品與一種原料，帶每單位產品的需求用量。
/// 同一組 `(product_id, raw_material_id)` 至多一條；重複關聯
/// 時覆蓋用量而不是新增一條。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomLine {
    /// 關聯記錄ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: u64,

    /// 原料ID
    pub raw_material_id: u64,

    /// 每單位產品的需求用量（嚴格大於 0）
    pub quantity: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 關聯
    pub fn new(product_id: u64, raw_material_id: u64, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            raw_material_id,
            quantity,
        }
    }

    /// 複合鍵
    pub fn key(&self) -> (u64, u64) {
        (self.product_id, self.raw_material_id)
    }
}
