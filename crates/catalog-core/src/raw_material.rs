//! 原料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 原料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterial {
    /// 原料ID（建立時由儲存層配發）
    pub id: u64,

    /// 名稱
    pub name: String,

    /// 描述（可為空字串）
    pub description: String,

    /// 單位成本
    pub cost: Decimal,

    /// 現有庫存（允許小數，0 為合法值）
    pub current_stock: Decimal,
}

impl RawMaterial {
    /// 由草稿與配發的 ID 組成原料
    pub fn from_draft(id: u64, draft: RawMaterialDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            cost: draft.cost,
            current_stock: draft.current_stock,
        }
    }

    /// 檢查庫存是否足以覆蓋指定用量
    pub fn covers(&self, quantity: Decimal) -> bool {
        self.current_stock >= quantity
    }

    /// 進貨：累加庫存
    pub fn receive(&mut self, quantity: Decimal) {
        self.current_stock += quantity;
    }
}

/// 原料建立/更新資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialDraft {
    /// 名稱
    pub name: String,

    /// 描述
    pub description: String,

    /// 單位成本
    pub cost: Decimal,

    /// 現有庫存
    pub current_stock: Decimal,
}

impl RawMaterialDraft {
    /// 創建新的原料草稿
    pub fn new(name: String, cost: Decimal, current_stock: Decimal) -> Self {
        Self {
            name,
            description: String::new(),
            cost,
            current_stock,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}
