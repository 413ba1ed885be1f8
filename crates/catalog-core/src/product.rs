//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 產品ID（建立時由儲存層配發，之後不變）
    pub id: u64,

    /// 名稱
    pub name: String,

    /// 描述（可為空字串）
    pub description: String,

    /// 售價
    pub price: Decimal,
}

impl Product {
    /// 由草稿與配發的 ID 組成產品
    pub fn from_draft(id: u64, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
        }
    }
}

/// 產品建立/更新資料
///
/// 呼叫端提交的欄位；`id` 由儲存層配發。更新時整筆覆蓋，
/// 不支援部分欄位省略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// 名稱
    pub name: String,

    /// 描述
    pub description: String,

    /// 售價
    pub price: Decimal,
}

impl ProductDraft {
    /// 創建新的產品草稿
    pub fn new(name: String, price: Decimal) -> Self {
        Self {
            name,
            description: String::new(),
            price,
        }
    }

    /// 建構器模式：設置描述
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }
}
