//! 可生產性計算
//!
//! 純讀取、不保留任何狀態；庫存隨時在變，每次呼叫都以
//! 當下的庫存與 BOM 重新計算，不得提供過期結果。判定是
//! 某個時間點的可行性快照，不是配額：多個產品可以同時以
//! 同一批庫存都判為可生產，這裡不做保留或扣帳。

use catalog_core::{BomLine, Product};
use catalog_store::{BomRepository, InventoryStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一原料缺口
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortage {
    /// 原料ID
    pub raw_material_id: u64,

    /// 需求用量
    pub required: Decimal,

    /// 現有庫存（原料不存在時視為 0）
    pub available: Decimal,
}

impl Shortage {
    /// 缺少的數量
    pub fn missing(&self) -> Decimal {
        self.required - self.available
    }
}

/// 可生產性計算器
pub struct ProducibilityCalculator;

impl ProducibilityCalculator {
    /// 判定單一產品當下是否可生產
    ///
    /// 規則：
    /// - 沒有任何 BOM 關聯的產品不可生產（沒有申報用料
    ///   清單不能當成什麼都不需要）
    /// - 每一條關聯都必須滿足 `current_stock >= quantity`，
    ///   全數通過才算可生產
    /// - 關聯指向不存在的原料時視為該條庫存不足，查詢
    ///   本身永不回報錯誤
    pub fn can_be_produced(
        product_id: u64,
        inventory: &InventoryStore,
        bom: &BomRepository,
    ) -> bool {
        let lines = bom.lines_for_product(product_id);
        if lines.is_empty() {
            return false;
        }

        lines.iter().all(|line| Self::line_satisfied(line, inventory))
    }

    fn line_satisfied(line: &BomLine, inventory: &InventoryStore) -> bool {
        match inventory.raw_material(line.raw_material_id) {
            Some(material) => material.covers(line.quantity),
            // 懸空引用降級為不可生產，不讓整個查詢失敗
            None => false,
        }
    }

    /// 列出當下可生產的產品
    ///
    /// 逐一評估儲存層中的每個產品，回傳通過全部用料檢查
    /// 的子集，順序與儲存層的自然列表順序一致（插入順序，
    /// 相同輸入必得相同輸出）。
    pub fn list_producible(inventory: &InventoryStore, bom: &BomRepository) -> Vec<Product> {
        let products = inventory.products();
        tracing::debug!("可生產性掃描：產品 {} 筆", products.len());

        let producible: Vec<Product> = products
            .into_iter()
            .filter(|product| Self::can_be_produced(product.id, inventory, bom))
            .collect();

        tracing::debug!("可生產產品：{} 筆", producible.len());
        producible
    }

    /// 產品的缺料清單
    ///
    /// 回傳庫存不足的關聯（依原料 ID 遞增）。空清單不等於
    /// 可生產：沒有任何關聯的產品缺料清單也是空的。
    pub fn shortages(
        product_id: u64,
        inventory: &InventoryStore,
        bom: &BomRepository,
    ) -> Vec<Shortage> {
        bom.lines_for_product(product_id)
            .iter()
            .filter_map(|line| {
                let available = inventory
                    .raw_material(line.raw_material_id)
                    .map(|material| material.current_stock)
                    .unwrap_or(Decimal::ZERO);

                if available < line.quantity {
                    Some(Shortage {
                        raw_material_id: line.raw_material_id,
                        required: line.quantity,
                        available,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}
